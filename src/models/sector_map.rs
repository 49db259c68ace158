use super::constants::{SectorContent, SECTOR_SIZE};
use super::klingon::Klingon;
use super::position::SectorPosition;

/// The 8x8 sector grid for the current quadrant.
/// Rebuilt every time the ship enters a quadrant; positions are never
/// preserved between visits.
pub struct SectorMap {
    /// 8x8 grid of sector contents. Internal 0-based indexing: grid[y-1][x-1].
    grid: [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE],
    /// Active Klingons in this quadrant.
    pub klingons: Vec<Klingon>,
    /// Position of the starbase in this quadrant, if any.
    pub starbase: Option<SectorPosition>,
}

impl Default for SectorMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SectorMap {
    pub fn new() -> Self {
        SectorMap {
            grid: [[SectorContent::Empty; SECTOR_SIZE]; SECTOR_SIZE],
            klingons: Vec::new(),
            starbase: None,
        }
    }

    /// Get the content at a 1-based sector position.
    pub fn get(&self, pos: SectorPosition) -> SectorContent {
        self.grid[(pos.y - 1) as usize][(pos.x - 1) as usize]
    }

    /// Set the content at a 1-based sector position.
    pub fn set(&mut self, pos: SectorPosition, content: SectorContent) {
        self.grid[(pos.y - 1) as usize][(pos.x - 1) as usize] = content;
    }

    /// Check if a 1-based sector position is empty.
    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        self.get(pos) == SectorContent::Empty
    }

    /// Render a row of the sector grid as a 24-character string.
    /// y is 1-based (1-8).
    pub fn render_row(&self, y: i32) -> String {
        (1..=SECTOR_SIZE as i32)
            .map(|x| self.get(SectorPosition { x, y }).symbol())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_empty() {
        let map = SectorMap::new();
        for y in 1..=SECTOR_SIZE as i32 {
            for x in 1..=SECTOR_SIZE as i32 {
                assert!(map.is_empty(SectorPosition { x, y }));
            }
        }
        assert!(map.klingons.is_empty());
        assert!(map.starbase.is_none());
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut map = SectorMap::new();
        let pos = SectorPosition { x: 3, y: 5 };
        map.set(pos, SectorContent::Klingon);
        assert_eq!(map.get(pos), SectorContent::Klingon);
        assert!(!map.is_empty(pos));
    }

    #[test]
    fn render_row_length_and_symbols() {
        let mut map = SectorMap::new();
        map.set(SectorPosition { x: 1, y: 2 }, SectorContent::Ship);
        map.set(SectorPosition { x: 8, y: 2 }, SectorContent::Star);
        let row = map.render_row(2);
        assert_eq!(row.len(), SECTOR_SIZE * 3);
        assert!(row.starts_with("<*>"));
        assert!(row.ends_with(" * "));
    }
}
