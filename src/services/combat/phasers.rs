use crate::models::constants::ShipSystem;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;

use super::calculate_distance;

/// Fire phasers at every Klingon in the quadrant.
///
/// The requested energy is deducted unconditionally once the preconditions
/// pass, then divided evenly across targets. Per target the effective
/// energy falls off with distance and the Klingon's own shields soak a
/// tenth of their value before the rest lands.
pub fn fire_phasers(galaxy: &mut Galaxy, energy: f64) -> GameResult<()> {
    if galaxy.sector_map.klingons.is_empty() {
        return Err(GameError::NoTargets);
    }
    if !galaxy.ship.is_operational(ShipSystem::PhaserControl) {
        return Err(GameError::SystemDamaged(ShipSystem::PhaserControl));
    }
    if energy <= 0.0 {
        return Err(GameError::InvalidCommand(
            "phaser energy must be positive".to_string(),
        ));
    }
    if energy > galaxy.ship.energy {
        return Err(GameError::InsufficientEnergy {
            required: energy,
            available: galaxy.ship.energy,
        });
    }

    galaxy.ship.energy -= energy;
    galaxy.mission.log("Phasers fired!");

    let ship_sector = galaxy.ship.sector;
    let share = energy / galaxy.sector_map.klingons.len() as f64;
    let erosion = galaxy.config.phaser_shield_erosion;
    let mut destroyed: Vec<SectorPosition> = Vec::new();

    for klingon in galaxy.sector_map.klingons.iter_mut() {
        let distance = calculate_distance(ship_sector, klingon.sector);
        let effective = share * (1.0 - distance / 10.0);
        let damage = (effective - klingon.shields * 0.1).max(0.0);

        klingon.energy -= damage.floor();
        klingon.shields -= (damage * erosion).floor();

        galaxy.mission.log(format!(
            "Hit on Klingon at sector {},{} for {} damage",
            klingon.sector.x,
            klingon.sector.y,
            damage.floor() as i32
        ));

        if klingon.energy <= 0.0 {
            destroyed.push(klingon.sector);
        } else {
            galaxy.mission.log(format!(
                "  Klingon has {} energy remaining",
                klingon.energy as i32
            ));
        }
    }

    for pos in destroyed {
        galaxy
            .mission
            .log(format!("*** Klingon at {},{} destroyed! ***", pos.x, pos.y));
        galaxy.destroy_klingon(pos);
    }

    Ok(())
}
