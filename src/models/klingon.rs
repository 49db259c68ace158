use super::position::SectorPosition;

/// A Klingon warship within a quadrant's sector grid.
/// Destroyed when its energy reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct Klingon {
    pub sector: SectorPosition,
    pub energy: f64,
    pub shields: f64,
}

impl Klingon {
    pub fn new(sector: SectorPosition, energy: f64, shields: f64) -> Self {
        Klingon {
            sector,
            energy,
            shields,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.energy > 0.0
    }
}
