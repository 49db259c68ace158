//! Mission clock and narrative log
//!
//! The message log is the engine's output channel: every service appends
//! narrative lines here and the front end drains them after each command.
//! The log is append-only and never truncated during a session.

use super::config::GameConfig;

pub struct Mission {
    pub stardate: f64,
    pub initial_stardate: f64,
    pub time_limit: f64,
    pub klingons_remaining: i32,
    pub klingons_at_start: i32,
    pub starbases_remaining: i32,
    messages: Vec<String>,
}

impl Mission {
    pub fn new(config: &GameConfig, klingons: i32, starbases: i32) -> Self {
        Mission {
            stardate: config.initial_stardate,
            initial_stardate: config.initial_stardate,
            time_limit: config.time_limit,
            klingons_remaining: klingons,
            klingons_at_start: klingons,
            starbases_remaining: starbases,
            messages: Vec::new(),
        }
    }

    /// Stardates elapsed since mission start.
    pub fn elapsed(&self) -> f64 {
        self.stardate - self.initial_stardate
    }

    /// Stardates left before the deadline.
    pub fn remaining(&self) -> f64 {
        self.time_limit - self.elapsed()
    }

    pub fn is_time_expired(&self) -> bool {
        self.remaining() <= 0.0
    }

    pub fn klingons_destroyed(&self) -> i32 {
        self.klingons_at_start - self.klingons_remaining
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages appended since `from`, for incremental display.
    pub fn messages_since(&self, from: usize) -> &[String] {
        &self.messages[from.min(self.messages.len())..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_mission() -> Mission {
        Mission::new(&GameConfig::default(), 17, 3)
    }

    #[test]
    fn clock_starts_at_initial_stardate() {
        let mission = test_mission();
        assert_eq!(mission.elapsed(), 0.0);
        assert_eq!(mission.remaining(), 30.0);
        assert!(!mission.is_time_expired());
    }

    #[test]
    fn time_expires_at_the_limit() {
        let mut mission = test_mission();
        mission.stardate = mission.initial_stardate + 30.0;
        assert!(mission.is_time_expired());
    }

    #[test]
    fn log_is_append_only() {
        let mut mission = test_mission();
        mission.log("first");
        let cursor = mission.messages().len();
        mission.log("second");
        mission.log("third");
        assert_eq!(mission.messages_since(cursor), &["second", "third"]);
        assert_eq!(mission.messages().len(), 3);
    }

    #[test]
    fn klingons_destroyed_tracks_remaining() {
        let mut mission = test_mission();
        mission.klingons_remaining = 12;
        assert_eq!(mission.klingons_destroyed(), 5);
    }
}
