use thiserror::Error;

use crate::models::constants::ShipSystem;

/// Game-specific error types.
///
/// Every variant except the terminal ones is a rejection: the command is
/// refused before any state mutation, so no resources are spent.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{} is damaged and inoperative", .0.name())]
    SystemDamaged(ShipSystem),
    #[error("insufficient energy: need {required}, have {available}")]
    InsufficientEnergy { required: f64, available: f64 },
    #[error("insufficient shield energy: need {required}, have {available}")]
    InsufficientShieldEnergy { required: f64, available: f64 },
    #[error("no photon torpedoes remaining")]
    OutOfTorpedoes,
    #[error("no hostile ships in this quadrant")]
    NoTargets,
    #[error("course must be between 1.0 and 9.0")]
    InvalidCourse,
    #[error("warp factor must be between 0.1 and 8.0")]
    InvalidWarp,
    #[error("that course would leave the galaxy")]
    GalaxyBoundary,
    #[error("shields cannot be raised while docked")]
    ShieldsWhileDocked,
    #[error("a numeric follow-up is expected")]
    AwaitingInput,
    #[error("no follow-up input is expected")]
    NoPendingInput,
    #[error("the mission is over")]
    GameOver,
    #[error("invalid command: {0}")]
    InvalidCommand(String),
}

/// Type alias for Results using GameError.
pub type GameResult<T> = Result<T, GameError>;
