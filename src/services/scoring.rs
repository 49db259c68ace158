//! Mission scoring
//!
//! Victory scoring rewards kills, leftover resources, and speed; a clean
//! ship and a fast finish earn flat bonuses. Defeats score zero.

use crate::models::galaxy::Galaxy;
use crate::models::score::{Grade, ScoreRecord};

pub const POINTS_PER_KLINGON: i32 = 100;
pub const POINTS_PER_TORPEDO: i32 = 50;
pub const SPEED_BONUS_PER_STARDATE: i32 = 100;
pub const SPEED_BONUS_CUTOFF: f64 = 20.0;
pub const NO_DAMAGE_BONUS: i32 = 1000;
pub const PERFECTION_BONUS: i32 = 500;
pub const PERFECTION_CUTOFF: f64 = 15.0;

/// Letter grade for a final score.
pub fn grade_for(total: i32) -> Grade {
    match total {
        t if t >= 3000 => Grade::S,
        t if t >= 2000 => Grade::A,
        t if t >= 1500 => Grade::B,
        t if t >= 1000 => Grade::C,
        t if t >= 500 => Grade::D,
        _ => Grade::F,
    }
}

/// Full scoring breakdown for a completed victorious mission.
pub fn final_score(galaxy: &Galaxy) -> ScoreRecord {
    let used = galaxy.mission.elapsed();
    let klingon_points = galaxy.mission.klingons_destroyed() * POINTS_PER_KLINGON;
    let time_bonus = (galaxy.mission.remaining() * 10.0).floor() as i32;
    let energy_bonus = (galaxy.ship.energy / 100.0).floor() as i32;
    let torpedo_bonus = galaxy.ship.torpedoes * POINTS_PER_TORPEDO;
    let speed_bonus = if used < SPEED_BONUS_CUTOFF {
        ((SPEED_BONUS_CUTOFF - used) as i32) * SPEED_BONUS_PER_STARDATE
    } else {
        0
    };
    let no_damage_bonus = if galaxy.ship.systems.all_at_full_health() {
        NO_DAMAGE_BONUS
    } else {
        0
    };
    let perfection_bonus = if used < PERFECTION_CUTOFF {
        PERFECTION_BONUS
    } else {
        0
    };

    let total = klingon_points
        + time_bonus
        + energy_bonus
        + torpedo_bonus
        + speed_bonus
        + no_damage_bonus
        + perfection_bonus;

    ScoreRecord {
        klingon_points,
        time_bonus,
        energy_bonus,
        torpedo_bonus,
        speed_bonus,
        no_damage_bonus,
        perfection_bonus,
        total,
        grade: grade_for(total),
        victory: true,
    }
}

/// Running score shown mid-mission by the library computer. Omits the
/// speed bonuses, which only exist at mission end.
pub fn live_score(galaxy: &Galaxy) -> i32 {
    let mut score = galaxy.mission.klingons_destroyed() * POINTS_PER_KLINGON
        + (galaxy.ship.energy / 100.0).floor() as i32
        + galaxy.ship.torpedoes * POINTS_PER_TORPEDO
        + (galaxy.mission.remaining() * 10.0).floor() as i32;
    if galaxy.ship.systems.all_at_full_health() {
        score += PERFECTION_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::GameConfig;
    use crate::models::constants::ShipSystem;

    #[test]
    fn grade_thresholds() {
        assert_eq!(grade_for(3000), Grade::S);
        assert_eq!(grade_for(2999), Grade::A);
        assert_eq!(grade_for(2000), Grade::A);
        assert_eq!(grade_for(1999), Grade::B);
        assert_eq!(grade_for(1500), Grade::B);
        assert_eq!(grade_for(1000), Grade::C);
        assert_eq!(grade_for(999), Grade::D);
        assert_eq!(grade_for(499), Grade::F);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let mut galaxy = Galaxy::from_seed(GameConfig::default(), 42);
        galaxy.set_klingons_remaining(0);
        galaxy.set_stardate(2012.0);
        galaxy.ship.energy = 850.0;
        galaxy.ship.torpedoes = 5;

        let record = final_score(&galaxy);

        let parts = record.klingon_points
            + record.time_bonus
            + record.energy_bonus
            + record.torpedo_bonus
            + record.speed_bonus
            + record.no_damage_bonus
            + record.perfection_bonus;
        assert_eq!(record.total, parts);
        assert!(record.victory);
    }

    #[test]
    fn slow_mission_forfeits_speed_bonuses() {
        let mut galaxy = Galaxy::from_seed(GameConfig::default(), 42);
        galaxy.set_klingons_remaining(0);
        galaxy.set_stardate(2025.0);

        let record = final_score(&galaxy);
        assert_eq!(record.speed_bonus, 0);
        assert_eq!(record.perfection_bonus, 0);
    }

    #[test]
    fn damaged_ship_forfeits_no_damage_bonus() {
        let mut galaxy = Galaxy::from_seed(GameConfig::default(), 42);
        galaxy.set_klingons_remaining(0);
        galaxy.ship.systems.set_level(ShipSystem::Computer, 0.5);

        let record = final_score(&galaxy);
        assert_eq!(record.no_damage_bonus, 0);
    }

    #[test]
    fn live_score_tracks_kills_and_resources() {
        let mut galaxy = Galaxy::from_seed(GameConfig::default(), 42);
        let before = live_score(&galaxy);
        let remaining = galaxy.mission.klingons_remaining;
        galaxy.set_klingons_remaining(remaining - 1);

        assert_eq!(live_score(&galaxy), before + POINTS_PER_KLINGON);
    }
}
