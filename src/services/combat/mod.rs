//! Combat resolution
//!
//! Phaser and torpedo fire against Klingons, the Klingon counter-attack,
//! and shield energy transfer.

mod klingon_attack;
mod phasers;
mod shields;
mod torpedoes;

pub use klingon_attack::klingons_fire;
pub use phasers::fire_phasers;
pub use shields::adjust_shields;
pub use torpedoes::fire_torpedo;

use crate::models::position::SectorPosition;

/// Euclidean distance between two sector positions, in sector units.
pub fn calculate_distance(from: SectorPosition, to: SectorPosition) -> f64 {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    (dx * dx + dy * dy).sqrt()
}
