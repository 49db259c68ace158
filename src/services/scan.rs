//! Sensor scans
//!
//! Short range renders the current quadrant's sector grid with a status
//! block alongside; long range records and reports the 3x3 quadrant
//! neighborhood as packed klingon/starbase/star digits.

use crate::models::constants::{ShipSystem, GALAXY_SIZE, SECTOR_SIZE};
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;

/// Short range sensor scan of the current quadrant.
pub fn short_range_scan(galaxy: &mut Galaxy) -> GameResult<()> {
    if !galaxy.ship.is_operational(ShipSystem::ShortRangeSensors) {
        return Err(GameError::SystemDamaged(ShipSystem::ShortRangeSensors));
    }

    let condition = galaxy.evaluate_condition();
    let ship = &galaxy.ship;
    let status: [String; SECTOR_SIZE] = [
        format!("STARDATE  {:.1}", galaxy.mission.stardate),
        format!("CONDITION {}", condition.label()),
        format!("QUADRANT  {},{}", ship.quadrant.x, ship.quadrant.y),
        format!("SECTOR    {},{}", ship.sector.x, ship.sector.y),
        format!("ENERGY    {}", ship.energy as i32),
        format!("SHIELDS   {}", ship.shields as i32),
        format!("PHOTON TORPEDOES {}", ship.torpedoes),
        format!("TIME LEFT {:.1}", galaxy.mission.remaining()),
    ];

    let border = "-=--=--=--=--=--=--=--=-".to_string();
    let mut lines = Vec::with_capacity(SECTOR_SIZE + 2);
    lines.push(border.clone());
    for y in 1..=SECTOR_SIZE as i32 {
        let row = galaxy.sector_map.render_row(y);
        lines.push(format!("{}        {}", row, status[(y - 1) as usize]));
    }
    lines.push(border);

    for line in lines {
        galaxy.mission.log(line);
    }
    Ok(())
}

/// Long range sensor scan: the 3x3 quadrant neighborhood, with positions
/// past the galaxy edge shown as `***`. Every in-bounds quadrant swept is
/// recorded for the library computer.
pub fn long_range_scan(galaxy: &mut Galaxy) -> GameResult<()> {
    if !galaxy.ship.is_operational(ShipSystem::LongRangeSensors) {
        return Err(GameError::SystemDamaged(ShipSystem::LongRangeSensors));
    }

    let q = galaxy.ship.quadrant;
    galaxy
        .mission
        .log(format!("LONG RANGE SCAN FOR QUADRANT {},{}", q.x, q.y));

    for dy in -1..=1 {
        let mut line = String::new();
        for dx in -1..=1 {
            let x = q.x + dx;
            let y = q.y + dy;
            if x < 1 || x > GALAXY_SIZE as i32 || y < 1 || y > GALAXY_SIZE as i32 {
                line.push_str(" *** ");
            } else {
                galaxy.record_scan(x, y);
                let summary = galaxy.summary(crate::models::position::QuadrantPosition { x, y });
                line.push_str(&format!(" {:03} ", summary.encoded()));
            }
        }
        galaxy.mission.log(line);
    }
    galaxy.mission.log("Format: KBS (Klingons, Bases, Stars)");
    Ok(())
}
