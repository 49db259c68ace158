//! Damage model
//!
//! Incoming damage lands on raised shields first; the remainder drains the
//! main energy reserves and can knock out a ship system. Damaged systems
//! recover a fixed amount each turn and are fully restored by docking.

use rand::Rng;

use crate::models::constants::{ShipSystem, OPERATIONAL_THRESHOLD};
use crate::models::errors::GameResult;
use crate::models::galaxy::Galaxy;

/// Apply `damage` units to the ship. Shields absorb first while raised,
/// capped at their current value; depletion drops them. The remainder hits
/// the hull, with a chance of degrading one undamaged system.
pub fn apply_damage(galaxy: &mut Galaxy, damage: f64) {
    let mut remaining = damage;

    if galaxy.ship.shields_up && galaxy.ship.shields > 0.0 {
        let absorbed = remaining.min(galaxy.ship.shields);
        galaxy.ship.shields -= absorbed;
        remaining -= absorbed;
        galaxy.mission.log(format!(
            "Shields absorb {} damage. Shields now at {}",
            absorbed as i32, galaxy.ship.shields as i32
        ));
        if galaxy.ship.shields <= 0.0 {
            galaxy.ship.shields = 0.0;
            galaxy.ship.shields_up = false;
            galaxy.mission.log("*** SHIELDS DOWN ***");
        }
    }

    if remaining > 0.0 {
        galaxy.ship.energy -= remaining;
        galaxy
            .mission
            .log(format!("Hull hit for {} damage!", remaining as i32));

        let chance = galaxy.config.system_damage_chance;
        if galaxy.rng_mut().gen::<f64>() < chance {
            if let Some(system) = galaxy.damage_random_system() {
                galaxy.mission.log(format!("{} damaged!", system.name()));
            }
        }
    }
}

/// Passive repair tick, run on every turn advance. The difficulty
/// multiplier scales the configured rate.
pub fn repair_tick(galaxy: &mut Galaxy) {
    let rate = galaxy.config.repair_rate * galaxy.config.repair_multiplier;
    galaxy.ship.systems.repair_tick(rate);
}

/// Append the damage control report to the mission log.
pub fn damage_report(galaxy: &mut Galaxy) -> GameResult<()> {
    galaxy.mission.log("=== DAMAGE REPORT ===");
    let lines: Vec<String> = ShipSystem::ALL
        .iter()
        .map(|system| {
            let level = galaxy.ship.systems.level(*system);
            let status = if level >= 1.0 {
                "OPERATIONAL"
            } else if level >= OPERATIONAL_THRESHOLD {
                "DEGRADED"
            } else {
                "INOPERATIVE"
            };
            format!(
                "{:<14}{:>4}%  {}",
                system.name(),
                (level * 100.0).round() as i32,
                status
            )
        })
        .collect();
    for line in lines {
        galaxy.mission.log(line);
    }
    Ok(())
}
