use crate::models::constants::{SectorContent, ShipSystem, SECTOR_SIZE};
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;

use crate::services::navigation::calculate_direction;

/// Fire one photon torpedo along a course.
///
/// The torpedo steps along the course vector from the ship's sector and
/// the first entity on the path ends the trace: a Klingon is destroyed, a
/// star absorbs the shot, a starbase is destroyed (a severe friendly-fire
/// event). Leaving the grid is a miss. One torpedo is expended whatever
/// the outcome.
pub fn fire_torpedo(galaxy: &mut Galaxy, course: f64) -> GameResult<()> {
    if !(1.0..=9.0).contains(&course) {
        return Err(GameError::InvalidCourse);
    }
    if !galaxy.ship.is_operational(ShipSystem::TorpedoTubes) {
        return Err(GameError::SystemDamaged(ShipSystem::TorpedoTubes));
    }
    if galaxy.ship.torpedoes <= 0 {
        return Err(GameError::OutOfTorpedoes);
    }

    galaxy.ship.torpedoes -= 1;
    galaxy.mission.log("Photon torpedo fired!");
    galaxy.mission.log("Torpedo track:");

    let (dx, dy) = calculate_direction(course);
    let mut x = galaxy.ship.sector.x as f64;
    let mut y = galaxy.ship.sector.y as f64;

    for _ in 0..galaxy.config.torpedo_range {
        x += dx;
        y += dy;

        let pos = SectorPosition {
            x: x.round() as i32,
            y: y.round() as i32,
        };

        if pos.x < 1 || pos.x > SECTOR_SIZE as i32 || pos.y < 1 || pos.y > SECTOR_SIZE as i32 {
            galaxy.mission.log("Torpedo missed - exited quadrant.");
            return Ok(());
        }

        galaxy.mission.log(format!("  {},{}", pos.x, pos.y));

        match galaxy.sector_map.get(pos) {
            SectorContent::Klingon => {
                galaxy.mission.log(format!(
                    "*** Direct hit on Klingon at {},{}! ***",
                    pos.x, pos.y
                ));
                galaxy.destroy_klingon(pos);
                return Ok(());
            }
            SectorContent::Star => {
                galaxy
                    .mission
                    .log(format!("Torpedo detonated against star at {},{}.", pos.x, pos.y));
                return Ok(());
            }
            SectorContent::Starbase => {
                galaxy.mission.log("*** STARBASE DESTROYED ***");
                galaxy.mission.log("Court martial proceedings await you!");
                galaxy.destroy_starbase(pos);
                return Ok(());
            }
            _ => {}
        }
    }

    galaxy.mission.log("Torpedo lost to the void.");
    Ok(())
}
