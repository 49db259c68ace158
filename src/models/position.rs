/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 1-8. (1,1) is upper-left, (8,8) is lower-right.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantPosition {
    pub x: i32,
    pub y: i32,
}

/// A position within an 8x8 sector grid.
/// Values range 1-8. (1,1) is upper-left, (8,8) is lower-right.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorPosition {
    pub x: i32,
    pub y: i32,
}

impl SectorPosition {
    /// Chebyshev adjacency: within one sector in both axes, self excluded.
    pub fn is_adjacent(&self, other: SectorPosition) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        dx <= 1 && dy <= 1 && (dx + dy) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_excludes_self() {
        let p = SectorPosition { x: 4, y: 4 };
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn adjacency_includes_all_eight_neighbors() {
        let p = SectorPosition { x: 4, y: 4 };
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let q = SectorPosition { x: 4 + dx, y: 4 + dy };
                assert!(p.is_adjacent(q), "({}, {}) should be adjacent", q.x, q.y);
            }
        }
    }

    #[test]
    fn adjacency_rejects_two_away() {
        let p = SectorPosition { x: 4, y: 4 };
        assert!(!p.is_adjacent(SectorPosition { x: 6, y: 4 }));
        assert!(!p.is_adjacent(SectorPosition { x: 4, y: 2 }));
        assert!(!p.is_adjacent(SectorPosition { x: 6, y: 6 }));
    }
}
