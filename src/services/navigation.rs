//! Navigation service
//!
//! Converts a (course, warp) order into a new sector and quadrant position.
//! Course is continuous in [1.0, 9.0] with 45-degree compass points and
//! linear interpolation between them; warp is in sector units. A move that
//! would leave the galaxy is rejected whole, before any energy is spent.

use crate::models::constants::{SectorContent, ShipSystem, COURSE_VECTORS, GALAXY_SIZE, SECTOR_SIZE};
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::position::{QuadrantPosition, SectorPosition};

/// Calculate the direction vector for a course value (1.0 ..= 9.0).
/// Uses linear interpolation between adjacent integer course vectors.
pub fn calculate_direction(course: f64) -> (f64, f64) {
    let r = (course.floor() as usize).min(8);
    let frac = course - r as f64;
    let dx = COURSE_VECTORS[r].0 + (COURSE_VECTORS[r + 1].0 - COURSE_VECTORS[r].0) * frac;
    let dy = COURSE_VECTORS[r].1 + (COURSE_VECTORS[r + 1].1 - COURSE_VECTORS[r].1) * frac;
    (dx, dy)
}

/// Resolve a warp order. The ship ends docked, destroyed by collision, or
/// at the computed position; the caller runs the counter-attack and the
/// turn advance afterwards.
pub fn navigate(galaxy: &mut Galaxy, course: f64, warp: f64) -> GameResult<()> {
    if !(1.0..=9.0).contains(&course) {
        return Err(GameError::InvalidCourse);
    }
    if !(0.1..=8.0).contains(&warp) {
        return Err(GameError::InvalidWarp);
    }
    if !galaxy.ship.is_operational(ShipSystem::Navigation) {
        return Err(GameError::SystemDamaged(ShipSystem::Navigation));
    }

    let (dx, dy) = calculate_direction(course);
    let step_x = (dx * warp).round() as i32;
    let step_y = (dy * warp).round() as i32;

    // Absolute 0-based coordinates, wrapped back into quadrant/sector pairs.
    // A large enough displacement can cross more than one boundary.
    let mut sx = galaxy.ship.sector.x - 1 + step_x;
    let mut sy = galaxy.ship.sector.y - 1 + step_y;
    let mut qx = galaxy.ship.quadrant.x - 1;
    let mut qy = galaxy.ship.quadrant.y - 1;

    let size = SECTOR_SIZE as i32;
    while sx < 0 {
        sx += size;
        qx -= 1;
    }
    while sx >= size {
        sx -= size;
        qx += 1;
    }
    while sy < 0 {
        sy += size;
        qy -= 1;
    }
    while sy >= size {
        sy -= size;
        qy += 1;
    }

    // Boundary rejection comes before the energy deduction: a refused move
    // costs nothing and changes nothing.
    if qx < 0 || qx >= GALAXY_SIZE as i32 || qy < 0 || qy >= GALAXY_SIZE as i32 {
        galaxy.mission.log("You cannot leave the galaxy!");
        return Err(GameError::GalaxyBoundary);
    }

    let cost = (warp * galaxy.config.energy_per_warp).floor();
    if galaxy.ship.energy < cost {
        return Err(GameError::InsufficientEnergy {
            required: cost,
            available: galaxy.ship.energy,
        });
    }
    galaxy.ship.energy -= cost;

    let new_quadrant = QuadrantPosition { x: qx + 1, y: qy + 1 };
    let new_sector = SectorPosition { x: sx + 1, y: sy + 1 };
    let old_sector = galaxy.ship.sector;
    let crossed = new_quadrant != galaxy.ship.quadrant;

    if crossed {
        // The destination quadrant is rolled fresh around the ship, so the
        // arrival sector is guaranteed clear.
        galaxy.ship.move_to(new_quadrant, new_sector);
        galaxy.enter_quadrant();
        galaxy.mission.log(format!(
            "Now entering quadrant {},{}",
            new_quadrant.x, new_quadrant.y
        ));
    } else if new_sector != old_sector {
        // Collision on arrival within the quadrant destroys the ship.
        if galaxy.sector_map.get(new_sector) != SectorContent::Empty {
            galaxy.sector_map.set(old_sector, SectorContent::Empty);
            galaxy.ship.destroyed = true;
            galaxy.mission.log(format!(
                "*** COLLISION AT SECTOR {},{} ***",
                new_sector.x, new_sector.y
            ));
            galaxy.mission.log("The ship has been destroyed.");
            return Ok(());
        }
        galaxy.sector_map.set(old_sector, SectorContent::Empty);
        galaxy.sector_map.set(new_sector, SectorContent::Ship);
        galaxy.ship.move_to(new_quadrant, new_sector);
    }

    galaxy.mission.log("Warp engines engaged.");
    galaxy.update_docking();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::GameConfig;
    use crate::models::sector_map::SectorMap;

    /// Place the ship at a known position on a cleared sector map.
    fn place_ship(galaxy: &mut Galaxy, quad: (i32, i32), sect: (i32, i32)) {
        galaxy.sector_map = SectorMap::new();
        galaxy.ship.move_to(
            QuadrantPosition { x: quad.0, y: quad.1 },
            SectorPosition { x: sect.0, y: sect.1 },
        );
        galaxy
            .sector_map
            .set(galaxy.ship.sector, SectorContent::Ship);
    }

    fn test_galaxy() -> Galaxy {
        Galaxy::from_seed(GameConfig::default(), 42)
    }

    // --- Direction vector tests ---

    #[test]
    fn direction_integer_courses() {
        let cases = [
            (1.0, (0.0, -1.0)),  // north
            (2.0, (1.0, -1.0)),  // northeast
            (3.0, (1.0, 0.0)),   // east
            (4.0, (1.0, 1.0)),   // southeast
            (5.0, (0.0, 1.0)),   // south
            (6.0, (-1.0, 1.0)),  // southwest
            (7.0, (-1.0, 0.0)),  // west
            (8.0, (-1.0, -1.0)), // northwest
            (9.0, (0.0, -1.0)),  // wraps to north
        ];
        for (course, (ex, ey)) in &cases {
            let (dx, dy) = calculate_direction(*course);
            assert!(
                (dx - ex).abs() < 1e-10 && (dy - ey).abs() < 1e-10,
                "course {} expected ({}, {}), got ({}, {})",
                course,
                ex,
                ey,
                dx,
                dy,
            );
        }
    }

    #[test]
    fn direction_fractional_interpolation() {
        // Course 1.5: midpoint between north (0,-1) and northeast (1,-1)
        let (dx, dy) = calculate_direction(1.5);
        assert!((dx - 0.5).abs() < 1e-10);
        assert!((dy - (-1.0)).abs() < 1e-10);

        // Course 8.5: midpoint between northwest (-1,-1) and north (0,-1)
        let (dx, dy) = calculate_direction(8.5);
        assert!((dx - (-0.5)).abs() < 1e-10);
        assert!((dy - (-1.0)).abs() < 1e-10);
    }

    // --- Movement tests ---

    #[test]
    fn move_north_within_quadrant() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (4, 6));

        navigate(&mut galaxy, 1.0, 2.0).unwrap();
        assert_eq!(galaxy.ship.sector, SectorPosition { x: 4, y: 4 });
        assert_eq!(galaxy.ship.quadrant, QuadrantPosition { x: 4, y: 4 });
    }

    #[test]
    fn move_east_charges_floor_of_warp_times_rate() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (2, 4));
        let initial = galaxy.ship.energy;

        navigate(&mut galaxy, 3.0, 2.5).unwrap();
        // floor(2.5 * 8) = 20
        assert!((galaxy.ship.energy - (initial - 20.0)).abs() < 1e-10);
        assert_eq!(galaxy.ship.sector.x, 5);
    }

    #[test]
    fn old_sector_is_cleared_after_move() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (4, 4));

        navigate(&mut galaxy, 5.0, 1.0).unwrap();
        assert_eq!(
            galaxy.sector_map.get(SectorPosition { x: 4, y: 4 }),
            SectorContent::Empty
        );
        assert_eq!(galaxy.sector_map.get(galaxy.ship.sector), SectorContent::Ship);
    }

    #[test]
    fn crossing_boundary_repopulates_quadrant() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (7, 4));

        navigate(&mut galaxy, 3.0, 3.0).unwrap();
        assert_eq!(galaxy.ship.quadrant, QuadrantPosition { x: 5, y: 4 });
        assert_eq!(galaxy.ship.sector, SectorPosition { x: 2, y: 4 });
        assert!(galaxy.summary(galaxy.ship.quadrant).visited);
        assert_eq!(galaxy.sector_map.get(galaxy.ship.sector), SectorContent::Ship);
    }

    #[test]
    fn full_warp_from_far_edge_lands_a_quadrant_over() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (2, 4), (8, 4));

        // Warp 8 east from sector 8: 8 sectors, wrapping once
        navigate(&mut galaxy, 3.0, 8.0).unwrap();
        assert_eq!(galaxy.ship.quadrant, QuadrantPosition { x: 3, y: 4 });
        assert_eq!(galaxy.ship.sector.x, 8);
    }

    // --- Rejection tests ---

    #[test]
    fn boundary_rejection_spends_nothing() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (1, 1), (2, 2));
        let energy = galaxy.ship.energy;
        let sector = galaxy.ship.sector;

        let err = navigate(&mut galaxy, 1.0, 5.0).unwrap_err();
        assert!(matches!(err, GameError::GalaxyBoundary));
        assert_eq!(galaxy.ship.energy, energy);
        assert_eq!(galaxy.ship.sector, sector);
    }

    #[test]
    fn insufficient_energy_rejection_changes_nothing() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (4, 4));
        galaxy.ship.energy = 10.0;
        let sector = galaxy.ship.sector;

        let err = navigate(&mut galaxy, 3.0, 2.0).unwrap_err();
        assert!(matches!(err, GameError::InsufficientEnergy { .. }));
        assert_eq!(galaxy.ship.energy, 10.0);
        assert_eq!(galaxy.ship.sector, sector);
    }

    #[test]
    fn damaged_engines_reject_without_cost() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (4, 4));
        galaxy.ship.systems.set_level(ShipSystem::Navigation, 0.2);
        let energy = galaxy.ship.energy;

        let err = navigate(&mut galaxy, 3.0, 1.0).unwrap_err();
        assert!(matches!(err, GameError::SystemDamaged(ShipSystem::Navigation)));
        assert_eq!(galaxy.ship.energy, energy);
    }

    #[test]
    fn out_of_range_course_and_warp_rejected() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (4, 4));
        assert!(matches!(
            navigate(&mut galaxy, 0.5, 1.0),
            Err(GameError::InvalidCourse)
        ));
        assert!(matches!(
            navigate(&mut galaxy, 3.0, 9.0),
            Err(GameError::InvalidWarp)
        ));
        assert!(matches!(
            navigate(&mut galaxy, 3.0, 0.05),
            Err(GameError::InvalidWarp)
        ));
    }

    // --- Collision test ---

    #[test]
    fn arrival_on_star_destroys_ship() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (4, 4));
        galaxy
            .sector_map
            .set(SectorPosition { x: 4, y: 2 }, SectorContent::Star);

        navigate(&mut galaxy, 1.0, 2.0).unwrap();
        assert!(galaxy.ship.destroyed);
    }

    // --- Docking test ---

    #[test]
    fn move_next_to_starbase_docks() {
        let mut galaxy = test_galaxy();
        place_ship(&mut galaxy, (4, 4), (4, 4));
        let base = SectorPosition { x: 4, y: 1 };
        galaxy.sector_map.set(base, SectorContent::Starbase);
        galaxy.sector_map.starbase = Some(base);
        galaxy.ship.energy = 1000.0;

        navigate(&mut galaxy, 1.0, 2.0).unwrap();
        assert_eq!(galaxy.ship.sector, SectorPosition { x: 4, y: 2 });
        assert!(galaxy.ship.docked);
        assert_eq!(galaxy.ship.energy, galaxy.ship.max_energy);
    }
}
