use crate::models::constants::ShipSystem;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;

/// Transfer energy between the main reserves and the shields. Negative
/// amounts move energy back from the shields. Refused while docked; the
/// starbase provides cover and shields stay down.
pub fn adjust_shields(galaxy: &mut Galaxy, amount: f64) -> GameResult<()> {
    if !galaxy.ship.is_operational(ShipSystem::ShieldControl) {
        return Err(GameError::SystemDamaged(ShipSystem::ShieldControl));
    }
    if galaxy.ship.docked {
        return Err(GameError::ShieldsWhileDocked);
    }
    if amount > 0.0 && amount > galaxy.ship.energy {
        return Err(GameError::InsufficientEnergy {
            required: amount,
            available: galaxy.ship.energy,
        });
    }
    if amount < 0.0 && -amount > galaxy.ship.shields {
        return Err(GameError::InsufficientShieldEnergy {
            required: -amount,
            available: galaxy.ship.shields,
        });
    }

    galaxy.ship.energy -= amount;
    galaxy.ship.shields += amount;
    galaxy.ship.shields_up = galaxy.ship.shields > 0.0;

    galaxy
        .mission
        .log(format!("Shield energy now: {}", galaxy.ship.shields as i32));
    galaxy
        .mission
        .log(format!("Ship energy now: {}", galaxy.ship.energy as i32));
    Ok(())
}
