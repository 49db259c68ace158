use rand::rngs::StdRng;
use rand::Rng;

use crate::models::config::GameConfig;
use crate::models::constants::{SectorContent, GALAXY_SIZE, MAX_KLINGONS_PER_QUADRANT};
use crate::models::klingon::Klingon;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::QuadrantSummary;
use crate::models::sector_map::SectorMap;

/// Generate the 8x8 galaxy chart. Each cell rolls a Klingon group with a
/// weighting that favors zero, a starbase chance, and 1-8 stars. The chart
/// is then topped up to the configured Klingon and starbase minimums.
pub fn generate_chart(
    config: &GameConfig,
    rng: &mut StdRng,
) -> ([[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE], i32, i32) {
    let mut chart = [[QuadrantSummary::empty(); GALAXY_SIZE]; GALAXY_SIZE];
    let mut total_klingons = 0;
    let mut total_starbases = 0;

    // Indexed loops: both x and y are needed for 2D array access
    #[allow(clippy::needless_range_loop)]
    for y in 0..GALAXY_SIZE {
        for x in 0..GALAXY_SIZE {
            let klingons = if rng.gen::<f64>() < config.klingon_chance {
                rng.gen_range(1..=MAX_KLINGONS_PER_QUADRANT)
            } else {
                0
            };
            let starbases = if rng.gen::<f64>() < config.starbase_chance {
                1
            } else {
                0
            };
            let stars = rng.gen_range(1..=8);

            chart[y][x] = QuadrantSummary {
                klingons,
                starbases,
                stars,
                visited: false,
                scanned: false,
            };
            total_klingons += klingons;
            total_starbases += starbases;
        }
    }

    // Force-place starbases until the configured minimum is met
    while total_starbases < config.min_starbases {
        let x = rng.gen_range(0..GALAXY_SIZE);
        let y = rng.gen_range(0..GALAXY_SIZE);
        if chart[y][x].starbases == 0 {
            chart[y][x].starbases = 1;
            total_starbases += 1;
        }
    }

    // Top up Klingons to the mission minimum, skipping full quadrants
    while total_klingons < config.min_klingons {
        let x = rng.gen_range(0..GALAXY_SIZE);
        let y = rng.gen_range(0..GALAXY_SIZE);
        if chart[y][x].klingons < MAX_KLINGONS_PER_QUADRANT {
            chart[y][x].klingons += 1;
            total_klingons += 1;
        }
    }

    (chart, total_klingons, total_starbases)
}

/// Pick the starting quadrant: up to 100 attempts for a Klingon-free cell,
/// then fall back to any cell. The ship must not start under attack when a
/// safe quadrant exists.
pub fn choose_starting_quadrant(
    chart: &[[QuadrantSummary; GALAXY_SIZE]; GALAXY_SIZE],
    rng: &mut StdRng,
) -> QuadrantPosition {
    for _ in 0..100 {
        let pos = QuadrantPosition {
            x: rng.gen_range(1..=GALAXY_SIZE as i32),
            y: rng.gen_range(1..=GALAXY_SIZE as i32),
        };
        if chart[(pos.y - 1) as usize][(pos.x - 1) as usize].klingons == 0 {
            return pos;
        }
    }
    QuadrantPosition {
        x: rng.gen_range(1..=GALAXY_SIZE as i32),
        y: rng.gen_range(1..=GALAXY_SIZE as i32),
    }
}

/// Materialize the current quadrant: clear the sector map, place the ship,
/// then roll fresh positions for Klingons, the starbase, and stars.
/// Placement within one call is collision-free; nothing carries over from
/// earlier visits. Klingon strength scales with the difficulty multiplier.
pub fn populate_quadrant(
    sector_map: &mut SectorMap,
    ship_sector: SectorPosition,
    summary: QuadrantSummary,
    config: &GameConfig,
    rng: &mut StdRng,
) {
    *sector_map = SectorMap::new();
    sector_map.set(ship_sector, SectorContent::Ship);

    let strength = config.klingon_strength_multiplier;
    for _ in 0..summary.klingons {
        let pos = find_random_empty_sector(sector_map, rng);
        sector_map.set(pos, SectorContent::Klingon);
        let energy = (200.0 + rng.gen_range(0..100) as f64) * strength;
        let shields = (100.0 + rng.gen_range(0..100) as f64) * strength;
        sector_map.klingons.push(Klingon::new(pos, energy, shields));
    }

    for _ in 0..summary.starbases {
        let pos = find_random_empty_sector(sector_map, rng);
        sector_map.set(pos, SectorContent::Starbase);
        sector_map.starbase = Some(pos);
    }

    for _ in 0..summary.stars {
        let pos = find_random_empty_sector(sector_map, rng);
        sector_map.set(pos, SectorContent::Star);
    }
}

/// Find a random empty sector by picking random coordinates until one is empty.
fn find_random_empty_sector(sector_map: &SectorMap, rng: &mut StdRng) -> SectorPosition {
    loop {
        let pos = SectorPosition {
            x: rng.gen_range(1..=8),
            y: rng.gen_range(1..=8),
        };
        if sector_map.is_empty(pos) {
            return pos;
        }
    }
}
