//! Domain models
//!
//! This module contains all domain models representing game entities
//! and concepts. Models are pure data structures with minimal logic.

pub mod config;
pub mod constants;
pub mod errors;
pub mod galaxy;
pub mod klingon;
pub mod mission;
pub mod position;
pub mod quadrant;
pub mod score;
pub mod sector_map;
pub mod ship;
pub mod systems;
