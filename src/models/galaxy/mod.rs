//! Galaxy state container
//!
//! Owns the 8x8 quadrant chart, the ship, the mission clock/log, and the
//! materialized sector map of the current quadrant. Services operate on
//! this container through free functions.

mod generation;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use super::config::GameConfig;
use super::constants::{Condition, SectorContent, GALAXY_SIZE};
use super::mission::Mission;
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::QuadrantSummary;
use super::sector_map::SectorMap;
use super::ship::Ship;

use generation::{choose_starting_quadrant, generate_chart, populate_quadrant};

pub struct Galaxy {
    /// 8x8 grid of quadrant summaries. Internal 0-based: chart[y-1][x-1].
    chart: [[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE],
    pub ship: Ship,
    pub mission: Mission,
    pub sector_map: SectorMap,
    pub config: GameConfig,
    rng: StdRng,
}

impl Galaxy {
    /// Create a new mission with an entropy-seeded generator.
    pub fn new(config: GameConfig) -> Self {
        Self::build(config, StdRng::from_entropy())
    }

    /// Create a new mission with every roll pinned to `seed`.
    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: GameConfig, mut rng: StdRng) -> Self {
        let (chart, total_klingons, total_starbases) = generate_chart(&config, &mut rng);

        let quadrant = choose_starting_quadrant(&chart, &mut rng);
        let sector = SectorPosition {
            x: rng.gen_range(1..=8),
            y: rng.gen_range(1..=8),
        };

        let mut galaxy = Galaxy {
            chart,
            ship: Ship::new(&config, quadrant, sector),
            mission: Mission::new(&config, total_klingons, total_starbases),
            sector_map: SectorMap::new(),
            config,
            rng,
        };

        galaxy.enter_quadrant();
        galaxy
    }

    // ========== Chart access ==========

    pub fn chart(&self) -> &[[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE] {
        &self.chart
    }

    pub fn summary(&self, pos: QuadrantPosition) -> QuadrantSummary {
        self.chart[(pos.y - 1) as usize][(pos.x - 1) as usize]
    }

    pub fn summary_mut(&mut self, pos: QuadrantPosition) -> &mut QuadrantSummary {
        &mut self.chart[(pos.y - 1) as usize][(pos.x - 1) as usize]
    }

    /// Mark a quadrant as recorded by the sensors. Out-of-range coordinates
    /// are ignored so long-range scans can sweep past the galaxy edge.
    pub fn record_scan(&mut self, x: i32, y: i32) {
        if (1..=GALAXY_SIZE as i32).contains(&x) && (1..=GALAXY_SIZE as i32).contains(&y) {
            self.chart[(y - 1) as usize][(x - 1) as usize].scanned = true;
        }
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Degrade one undamaged ship system, if any remain. Lives here so the
    /// roll can borrow the RNG and the system table together.
    pub fn damage_random_system(&mut self) -> Option<super::constants::ShipSystem> {
        self.ship.systems.damage_random(&mut self.rng)
    }

    // ========== Quadrant entry ==========

    /// Materialize the ship's current quadrant. Called on game start and on
    /// every quadrant transition; entity positions are rolled fresh each time.
    pub fn enter_quadrant(&mut self) {
        let q = self.ship.quadrant;
        let summary = self.summary(q);
        populate_quadrant(
            &mut self.sector_map,
            self.ship.sector,
            summary,
            &self.config,
            &mut self.rng,
        );
        let cell = self.summary_mut(q);
        cell.visited = true;
        cell.scanned = true;
    }

    // ========== Atomic updates ==========

    /// Destroy the Klingon at `pos`, updating the sector map, the quadrant
    /// chart, and the mission tally together.
    pub fn destroy_klingon(&mut self, pos: SectorPosition) {
        self.sector_map.set(pos, SectorContent::Empty);
        self.sector_map.klingons.retain(|k| k.sector != pos);
        self.mission.klingons_remaining -= 1;
        let q = self.ship.quadrant;
        self.summary_mut(q).klingons -= 1;
    }

    /// Destroy the starbase at `pos`, updating all tracking locations.
    pub fn destroy_starbase(&mut self, pos: SectorPosition) {
        self.sector_map.set(pos, SectorContent::Empty);
        self.sector_map.starbase = None;
        self.mission.starbases_remaining -= 1;
        let q = self.ship.quadrant;
        self.summary_mut(q).starbases = 0;
    }

    // ========== Docking ==========

    /// Recompute docking after movement: docked iff Chebyshev-adjacent to
    /// the quadrant's starbase. Newly docking restores the ship in full.
    pub fn update_docking(&mut self) -> bool {
        let adjacent = match self.sector_map.starbase {
            Some(base) => self.ship.sector.is_adjacent(base),
            None => false,
        };

        if adjacent {
            let was_docked = self.ship.docked;
            self.ship.dock();
            if !was_docked {
                self.mission.log("Docked at starbase. Shields dropped.");
                self.mission
                    .log("Energy and torpedoes replenished. All systems repaired.");
            }
        } else {
            self.ship.docked = false;
        }
        self.ship.docked
    }

    // ========== Condition ==========

    pub fn evaluate_condition(&self) -> Condition {
        if self.ship.docked {
            Condition::Docked
        } else if !self.sector_map.klingons.is_empty() {
            Condition::Red
        } else if self.ship.energy < self.config.initial_energy * 0.1 {
            Condition::Yellow
        } else {
            Condition::Green
        }
    }

    // Test-only setters
    #[cfg(test)]
    pub fn set_klingons_remaining(&mut self, count: i32) {
        self.mission.klingons_remaining = count;
    }

    #[cfg(test)]
    pub fn set_stardate(&mut self, stardate: f64) {
        self.mission.stardate = stardate;
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("stardate", &self.mission.stardate)
            .field("klingons_remaining", &self.mission.klingons_remaining)
            .field("starbases", &self.mission.starbases_remaining)
            .finish_non_exhaustive()
    }
}
