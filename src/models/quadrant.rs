/// Persistent data about a single quadrant in the galaxy.
/// Stores only counts — sector positions are rolled fresh on every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantSummary {
    pub klingons: i32,
    pub starbases: i32,
    pub stars: i32,
    /// The ship has entered this quadrant at least once.
    pub visited: bool,
    /// Sensors have recorded this quadrant (short or long range).
    pub scanned: bool,
}

impl QuadrantSummary {
    pub fn empty() -> Self {
        QuadrantSummary {
            klingons: 0,
            starbases: 0,
            stars: 0,
            visited: false,
            scanned: false,
        }
    }

    /// The 3-digit encoded value: klingons*100 + starbases*10 + stars.
    pub fn encoded(&self) -> i32 {
        self.klingons * 100 + self.starbases * 10 + self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_packs_digits() {
        let q = QuadrantSummary {
            klingons: 2,
            starbases: 1,
            stars: 5,
            visited: false,
            scanned: false,
        };
        assert_eq!(q.encoded(), 215);
    }

    #[test]
    fn encoded_empty_quadrant_is_zero() {
        assert_eq!(QuadrantSummary::empty().encoded(), 0);
    }
}
