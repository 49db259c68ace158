//! Star Trek 1971 Game Engine
//!
//! A Rust implementation of the classic 1971 Star Trek tactical combat
//! simulation.
//!
//! # Overview
//!
//! This library provides a complete game engine for playing Star Trek.
//! The player commands the USS Enterprise on a mission to destroy all
//! Klingon battle cruisers in the galaxy before time runs out, navigating
//! an 8x8 galaxy of quadrants, managing energy and shields, and resupplying
//! at starbases.
//!
//! # Modules
//!
//! - [`game_engine`] - Command dispatch, turn cycle, and game-over logic
//! - [`models`] - Domain models (Galaxy, Ship, Klingon, scoring, etc.)
//! - [`services`] - Game services (navigation, combat, scanning, etc.)
//! - [`cli`] - Argument handling and the bridge command parser
//!
//! # Example
//!
//! ```rust,no_run
//! use trek1971::{Command, GameConfig, GameEngine};
//!
//! let mut engine = GameEngine::from_seed(GameConfig::default(), 42);
//! engine.execute(Command::ShortRangeScan).ok();
//! for line in engine.galaxy().mission.messages() {
//!     println!("{}", line);
//! }
//! ```

pub mod cli;
pub mod game_engine;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use game_engine::{Command, ComputerQuery, DefeatReason, GameEngine, GameState};
pub use models::config::GameConfig;
pub use models::errors::{GameError, GameResult};
pub use models::galaxy::Galaxy;
pub use models::score::{Grade, ScoreRecord};
