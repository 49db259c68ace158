use rand::Rng;

use crate::models::galaxy::Galaxy;

use super::calculate_distance;
use crate::services::damage::apply_damage;

/// Klingon counter-attack, run after every turn-consuming player action
/// while the ship is undocked and hostiles remain in the quadrant.
///
/// Each live Klingon rolls to hit with a probability that falls off with
/// distance and scales with its remaining energy. Damage lands on the
/// shields first via the damage model.
pub fn klingons_fire(galaxy: &mut Galaxy) {
    if galaxy.ship.docked || galaxy.sector_map.klingons.is_empty() {
        return;
    }

    galaxy.mission.log("Klingons attack!");

    let ship_sector = galaxy.ship.sector;
    let attack_factor = galaxy.config.klingon_attack_factor * galaxy.config.damage_multiplier;

    // Snapshot attacker data first; damage application needs the whole galaxy
    let attackers: Vec<_> = galaxy
        .sector_map
        .klingons
        .iter()
        .filter(|k| k.is_alive())
        .map(|k| (k.sector, k.energy, calculate_distance(ship_sector, k.sector)))
        .collect();

    for (sector, energy, distance) in attackers {
        let hit_probability = (1.0 - distance / 10.0) * (energy / 300.0);
        if galaxy.rng_mut().gen::<f64>() < hit_probability {
            let damage = (energy / (distance + 1.0) * attack_factor).floor();
            galaxy.mission.log(format!(
                "Hit from Klingon at {},{} - {} damage!",
                sector.x, sector.y, damage as i32
            ));
            apply_damage(galaxy, damage);
        } else {
            galaxy
                .mission
                .log(format!("Klingon at {},{} missed.", sector.x, sector.y));
        }
    }
}
