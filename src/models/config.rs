//! Mission tunables
//!
//! Every threshold and multiplier the simulation uses lives here so that
//! tests can build scenarios with known numbers.

/// Configuration for a single mission. `Default` gives the standard
/// Captain-difficulty game; [`GameConfig::cadet`] and
/// [`GameConfig::admiral`] give the easier and harder presets.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Minimum Klingons in the galaxy; generation tops up to this.
    pub min_klingons: i32,
    /// Per-quadrant chance of rolling a Klingon group during generation.
    pub klingon_chance: f64,
    /// Per-quadrant chance of a starbase during generation.
    pub starbase_chance: f64,
    /// Minimum starbases in the galaxy; generation force-places up to this.
    pub min_starbases: i32,
    pub initial_energy: f64,
    pub initial_torpedoes: i32,
    pub initial_stardate: f64,
    /// Mission deadline, in stardates from the initial stardate.
    pub time_limit: f64,
    /// Energy deducted per warp unit travelled.
    pub energy_per_warp: f64,
    /// Maximum sectors a torpedo travels before it is lost.
    pub torpedo_range: i32,
    /// Health restored to each damaged system per turn.
    pub repair_rate: f64,
    /// Scales the per-turn repair rate (difficulty knob).
    pub repair_multiplier: f64,
    /// Fraction of phaser damage that erodes Klingon shields.
    pub phaser_shield_erosion: f64,
    /// Multiplier on Klingon energy when computing counter-attack damage.
    pub klingon_attack_factor: f64,
    /// Scales rolled Klingon energy and shields (difficulty knob).
    pub klingon_strength_multiplier: f64,
    /// Scales incoming counter-attack damage (difficulty knob).
    pub damage_multiplier: f64,
    /// Chance that a hull hit degrades one undamaged system.
    pub system_damage_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_klingons: 10,
            klingon_chance: 0.3,
            starbase_chance: 0.1,
            min_starbases: 1,
            initial_energy: 3000.0,
            initial_torpedoes: 10,
            initial_stardate: 2000.0,
            time_limit: 30.0,
            energy_per_warp: 8.0,
            torpedo_range: 12,
            repair_rate: 0.1,
            repair_multiplier: 1.0,
            phaser_shield_erosion: 0.3,
            klingon_attack_factor: 0.3,
            klingon_strength_multiplier: 1.0,
            damage_multiplier: 1.0,
            system_damage_chance: 0.3,
        }
    }
}

impl GameConfig {
    /// Easier preset: more time, resources, and starbases, weaker Klingons,
    /// softer hits, faster repairs.
    pub fn cadet() -> Self {
        GameConfig {
            min_klingons: 5,
            min_starbases: 3,
            initial_energy: 3500.0,
            initial_torpedoes: 12,
            time_limit: 40.0,
            klingon_strength_multiplier: 0.7,
            damage_multiplier: 0.8,
            repair_multiplier: 1.5,
            ..GameConfig::default()
        }
    }

    /// Standard preset, identical to `Default`.
    pub fn captain() -> Self {
        GameConfig::default()
    }

    /// Hardest preset: more and stronger Klingons, fewer resources, less
    /// time, harder hits, slower repairs.
    pub fn admiral() -> Self {
        GameConfig {
            min_klingons: 12,
            min_starbases: 1,
            initial_energy: 2500.0,
            initial_torpedoes: 8,
            time_limit: 25.0,
            klingon_strength_multiplier: 1.5,
            damage_multiplier: 1.3,
            repair_multiplier: 0.7,
            ..GameConfig::default()
        }
    }
}
