//! Player commands
//!
//! The full set of bridge commands. Navigation may be issued with the
//! warp factor deferred; the engine then waits for a follow-up number.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Warp movement. A missing warp factor leaves the engine awaiting it.
    Navigate { course: f64, warp: Option<f64> },
    ShortRangeScan,
    LongRangeScan,
    FirePhasers { energy: f64 },
    FireTorpedo { course: f64 },
    AdjustShields { amount: f64 },
    DamageReport,
    Computer { query: ComputerQuery },
    Help,
    Quit,
}

/// Library computer sub-queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputerQuery {
    GalacticRecord,
    StatusReport,
    Score,
}

impl Command {
    /// Turn-consuming commands advance the stardate and draw a Klingon
    /// counter-attack. Scans, reports, and shield adjustments are free.
    pub fn consumes_turn(&self) -> bool {
        matches!(
            self,
            Command::Navigate { .. } | Command::FirePhasers { .. } | Command::FireTorpedo { .. }
        )
    }
}
