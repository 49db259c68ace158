//! Library computer
//!
//! The galactic record prints every quadrant swept so far as a packed
//! three digit code; the status report summarizes the mission at a glance.

use crate::models::constants::{ShipSystem, GALAXY_SIZE};
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;

/// Cumulative galactic record built from long range scans. Quadrants that
/// have never been swept show as `***`.
pub fn galactic_record(galaxy: &mut Galaxy) -> GameResult<()> {
    if !galaxy.ship.is_operational(ShipSystem::Computer) {
        return Err(GameError::SystemDamaged(ShipSystem::Computer));
    }

    galaxy.mission.log("=== GALACTIC RECORD ===");
    let q = galaxy.ship.quadrant;
    galaxy
        .mission
        .log(format!("Computed from quadrant {},{}", q.x, q.y));

    for y in 1..=GALAXY_SIZE as i32 {
        let mut line = String::new();
        for x in 1..=GALAXY_SIZE as i32 {
            let summary = galaxy.summary(QuadrantPosition { x, y });
            if summary.scanned {
                line.push_str(&format!(" {:03} ", summary.encoded()));
            } else {
                line.push_str(" *** ");
            }
        }
        galaxy.mission.log(line);
    }
    galaxy.mission.log("Format: KBS (Klingons, Bases, Stars)");
    Ok(())
}

/// Mission status: time, hostiles, resources.
pub fn status_report(galaxy: &mut Galaxy) -> GameResult<()> {
    if !galaxy.ship.is_operational(ShipSystem::Computer) {
        return Err(GameError::SystemDamaged(ShipSystem::Computer));
    }

    let lines = [
        "=== STATUS REPORT ===".to_string(),
        format!("Stardate           {:.1}", galaxy.mission.stardate),
        format!("Time remaining     {:.1}", galaxy.mission.remaining()),
        format!("Klingons remaining {}", galaxy.mission.klingons_remaining),
        format!("Starbases          {}", galaxy.mission.starbases_remaining),
        format!("Energy             {}", galaxy.ship.energy as i32),
        format!("Shields            {}", galaxy.ship.shields as i32),
        format!("Photon torpedoes   {}", galaxy.ship.torpedoes),
    ];
    for line in lines {
        galaxy.mission.log(line);
    }
    Ok(())
}
