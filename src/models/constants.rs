pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;
pub const MAX_KLINGONS_PER_QUADRANT: i32 = 3;

pub const NUM_SYSTEMS: usize = 7;

/// Health level below which a ship system refuses to operate.
pub const OPERATIONAL_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipSystem {
    Navigation = 0,
    ShortRangeSensors = 1,
    LongRangeSensors = 2,
    PhaserControl = 3,
    TorpedoTubes = 4,
    ShieldControl = 5,
    Computer = 6,
}

impl ShipSystem {
    pub fn name(&self) -> &'static str {
        match self {
            ShipSystem::Navigation => "WARP ENGINES",
            ShipSystem::ShortRangeSensors => "S.R. SENSORS",
            ShipSystem::LongRangeSensors => "L.R. SENSORS",
            ShipSystem::PhaserControl => "PHASER CNTRL",
            ShipSystem::TorpedoTubes => "PHOTON TUBES",
            ShipSystem::ShieldControl => "SHIELD CNTRL",
            ShipSystem::Computer => "COMPUTER",
        }
    }

    pub const ALL: [ShipSystem; NUM_SYSTEMS] = [
        ShipSystem::Navigation,
        ShipSystem::ShortRangeSensors,
        ShipSystem::LongRangeSensors,
        ShipSystem::PhaserControl,
        ShipSystem::TorpedoTubes,
        ShipSystem::ShieldControl,
        ShipSystem::Computer,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorContent {
    Empty = 0,
    Ship = 1,
    Klingon = 2,
    Starbase = 3,
    Star = 4,
}

impl SectorContent {
    pub fn symbol(&self) -> &'static str {
        match self {
            SectorContent::Empty => "   ",
            SectorContent::Ship => "<*>",
            SectorContent::Klingon => "+++",
            SectorContent::Starbase => ">!<",
            SectorContent::Star => " * ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Green,
    Yellow,
    Red,
    Docked,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Green => "GREEN",
            Condition::Yellow => "YELLOW",
            Condition::Red => "RED",
            Condition::Docked => "DOCKED",
        }
    }
}

/// Course direction vectors for courses 1-9. Index 0 is unused.
/// Course 1 is north, each increment rotates 45 degrees clockwise.
/// Format: (delta_x, delta_y); y increases top-to-bottom.
pub const COURSE_VECTORS: [(f64, f64); 10] = [
    (0.0, 0.0),   // index 0: unused
    (0.0, -1.0),  // course 1: north
    (1.0, -1.0),  // course 2: northeast
    (1.0, 0.0),   // course 3: east
    (1.0, 1.0),   // course 4: southeast
    (0.0, 1.0),   // course 5: south
    (-1.0, 1.0),  // course 6: southwest
    (-1.0, 0.0),  // course 7: west
    (-1.0, -1.0), // course 8: northwest
    (0.0, -1.0),  // course 9 (same as 1, for interpolation)
];
