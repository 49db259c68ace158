//! Per-system damage tracking
//!
//! Each of the 7 ship systems carries a continuous health level in [0, 1].
//! 1.0 is fully operational; below [`OPERATIONAL_THRESHOLD`] the system
//! refuses to operate. Damaged systems recover passively each turn and are
//! fully restored when docking at a starbase.

use rand::Rng;

use super::constants::{ShipSystem, NUM_SYSTEMS, OPERATIONAL_THRESHOLD};

/// Health levels for all ship systems, indexed by [`ShipSystem`].
#[derive(Debug, Clone)]
pub struct SystemTable {
    levels: [f64; NUM_SYSTEMS],
}

impl Default for SystemTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemTable {
    pub fn new() -> Self {
        SystemTable {
            levels: [1.0; NUM_SYSTEMS],
        }
    }

    pub fn level(&self, system: ShipSystem) -> f64 {
        self.levels[system as usize]
    }

    pub fn set_level(&mut self, system: ShipSystem, level: f64) {
        self.levels[system as usize] = level.clamp(0.0, 1.0);
    }

    pub fn is_operational(&self, system: ShipSystem) -> bool {
        self.levels[system as usize] >= OPERATIONAL_THRESHOLD
    }

    /// True if every system is at full health (scoring bonus condition).
    pub fn all_at_full_health(&self) -> bool {
        self.levels.iter().all(|&l| l >= 1.0)
    }

    /// Passive repair: restore `rate` to every damaged system, capped at 1.0.
    pub fn repair_tick(&mut self, rate: f64) {
        for level in self.levels.iter_mut() {
            if *level < 1.0 {
                *level = (*level + rate).min(1.0);
            }
        }
    }

    /// Starbase repair: all systems back to full health.
    pub fn repair_all(&mut self) {
        self.levels = [1.0; NUM_SYSTEMS];
    }

    /// Degrade one currently undamaged system to a random health in [0, 0.8).
    /// Returns the system hit, or None if everything is already damaged.
    pub fn damage_random(&mut self, rng: &mut impl Rng) -> Option<ShipSystem> {
        let candidates: Vec<ShipSystem> = ShipSystem::ALL
            .iter()
            .copied()
            .filter(|&s| self.levels[s as usize] >= 1.0)
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let target = candidates[rng.gen_range(0..candidates.len())];
        self.levels[target as usize] = rng.gen::<f64>() * 0.8;
        Some(target)
    }
}
