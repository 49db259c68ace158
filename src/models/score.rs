//! Final scoring records
//!
//! Produced once at mission end and handed to the front end; the records
//! are serde-serializable so an external store can persist leaderboards.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn description(&self) -> &'static str {
        match self {
            Grade::S => "Legendary Captain",
            Grade::A => "Excellent Command",
            Grade::B => "Good Performance",
            Grade::C => "Adequate Mission",
            Grade::D => "Barely Passing",
            Grade::F => "Needs Improvement",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// Point-by-point breakdown of a finished mission. Immutable once computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub klingon_points: i32,
    pub time_bonus: i32,
    pub energy_bonus: i32,
    pub torpedo_bonus: i32,
    pub speed_bonus: i32,
    pub no_damage_bonus: i32,
    pub perfection_bonus: i32,
    pub total: i32,
    pub grade: Grade,
    pub victory: bool,
}

impl ScoreRecord {
    /// The zero score handed out for any defeat.
    pub fn defeat() -> Self {
        ScoreRecord {
            klingon_points: 0,
            time_bonus: 0,
            energy_bonus: 0,
            torpedo_bonus: 0,
            speed_bonus: 0,
            no_damage_bonus: 0,
            perfection_bonus: 0,
            total: 0,
            grade: Grade::F,
            victory: false,
        }
    }
}

/// One leaderboard row, as stored by the external persistence surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: i32,
    pub grade: Grade,
    pub date: String,
}

/// Maximum rows kept on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// Whether `score` would earn a slot in the given (descending) leaderboard.
pub fn qualifies_for_leaderboard(entries: &[HighScoreEntry], score: i32) -> bool {
    if score <= 0 {
        return false;
    }
    if entries.len() < LEADERBOARD_SIZE {
        return true;
    }
    entries.iter().any(|e| score > e.score)
}
