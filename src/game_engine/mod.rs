//! Game state machine
//!
//! The engine owns the galaxy, dispatches player commands to the service
//! layer, runs the Klingon counter-attack and turn advance after every
//! turn-consuming action, and tracks victory and defeat. Navigation
//! issued without a warp factor parks the engine in an awaiting-input
//! state until the number arrives.

mod commands;

pub use commands::{Command, ComputerQuery};

use crate::models::config::GameConfig;
use crate::models::errors::{GameError, GameResult};
use crate::models::galaxy::Galaxy;
use crate::models::score::ScoreRecord;
use crate::services::{combat, computer, damage, navigation, scan, scoring};

/// Core game engine that manages command dispatch and the game lifecycle.
pub struct GameEngine {
    galaxy: Galaxy,
    state: GameState,
    pending: Option<Pending>,
    score: Option<ScoreRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    Playing,
    Victory,
    Defeat { reason: DefeatReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatReason {
    ShipDestroyed,
    TimeExpired,
    OutOfEnergy,
    Resigned,
}

/// A command half-issued, waiting for a follow-up number.
#[derive(Debug, Clone, PartialEq)]
enum Pending {
    WarpFactor { course: f64 },
}

impl GameEngine {
    /// New game with a galaxy generated from system entropy.
    pub fn new(config: GameConfig) -> Self {
        Self::with_galaxy(Galaxy::new(config))
    }

    /// New game with a deterministic galaxy, for replays and tests.
    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_galaxy(Galaxy::from_seed(config, seed))
    }

    fn with_galaxy(galaxy: Galaxy) -> Self {
        let mut engine = Self {
            galaxy,
            state: GameState::Playing,
            pending: None,
            score: None,
        };
        engine.briefing();
        engine
    }

    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    pub fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Final score, present once the game has ended.
    pub fn score(&self) -> Option<&ScoreRecord> {
        self.score.as_ref()
    }

    /// True while the engine is waiting for a follow-up number.
    pub fn awaiting_input(&self) -> bool {
        self.pending.is_some()
    }

    /// Abandon the current mission and start over with a fresh galaxy.
    pub fn restart(&mut self) {
        let config = self.galaxy.config.clone();
        self.galaxy = Galaxy::new(config);
        self.state = GameState::Playing;
        self.pending = None;
        self.score = None;
        self.briefing();
    }

    fn briefing(&mut self) {
        let klingons = self.galaxy.mission.klingons_remaining;
        let time = self.galaxy.mission.time_limit;
        let starbases = self.galaxy.mission.starbases_remaining;
        self.galaxy.mission.log("*** STAR TREK ***");
        self.galaxy.mission.log(format!(
            "ORDERS: Destroy the {} Klingon battle cruisers invading the galaxy",
            klingons
        ));
        self.galaxy
            .mission
            .log(format!("You have {:.0} stardates to complete your mission.", time));
        self.galaxy.mission.log(format!(
            "There {} {} starbase{} in the galaxy for resupply.",
            if starbases == 1 { "is" } else { "are" },
            starbases,
            if starbases == 1 { "" } else { "s" }
        ));
    }

    /// Dispatch a player command.
    ///
    /// Turn-consuming commands that succeed draw the Klingon counter-attack
    /// and advance the stardate. Commands rejected by the service layer
    /// cost nothing. Refused outright once the game has ended or while a
    /// follow-up number is pending.
    pub fn execute(&mut self, command: Command) -> GameResult<()> {
        if self.state != GameState::Playing {
            return Err(GameError::GameOver);
        }
        if self.pending.is_some() {
            return Err(GameError::AwaitingInput);
        }

        let consumes = command.consumes_turn();
        match command {
            Command::Navigate { course, warp: None } => {
                self.pending = Some(Pending::WarpFactor { course });
                self.galaxy.mission.log("Enter warp factor (0.1-8.0):");
                return Ok(());
            }
            Command::Navigate {
                course,
                warp: Some(warp),
            } => navigation::navigate(&mut self.galaxy, course, warp)?,
            Command::ShortRangeScan => scan::short_range_scan(&mut self.galaxy)?,
            Command::LongRangeScan => scan::long_range_scan(&mut self.galaxy)?,
            Command::FirePhasers { energy } => combat::fire_phasers(&mut self.galaxy, energy)?,
            Command::FireTorpedo { course } => combat::fire_torpedo(&mut self.galaxy, course)?,
            Command::AdjustShields { amount } => combat::adjust_shields(&mut self.galaxy, amount)?,
            Command::DamageReport => damage::damage_report(&mut self.galaxy)?,
            Command::Computer { query } => self.run_computer(query)?,
            Command::Help => self.help(),
            Command::Quit => {
                self.galaxy.mission.log("Mission abandoned.");
                self.end_game(GameState::Defeat {
                    reason: DefeatReason::Resigned,
                });
                return Ok(());
            }
        }

        if consumes {
            self.after_action();
        }
        Ok(())
    }

    /// Supply the number a half-issued command is waiting for.
    pub fn submit_number(&mut self, value: f64) -> GameResult<()> {
        if self.state != GameState::Playing {
            return Err(GameError::GameOver);
        }
        // A rejected value cancels the order; the player re-issues it.
        match self.pending.take() {
            Some(Pending::WarpFactor { course }) => {
                navigation::navigate(&mut self.galaxy, course, value)?;
                self.after_action();
                Ok(())
            }
            None => Err(GameError::NoPendingInput),
        }
    }

    fn run_computer(&mut self, query: ComputerQuery) -> GameResult<()> {
        match query {
            ComputerQuery::GalacticRecord => computer::galactic_record(&mut self.galaxy),
            ComputerQuery::StatusReport => computer::status_report(&mut self.galaxy),
            ComputerQuery::Score => {
                let score = scoring::live_score(&self.galaxy);
                self.galaxy
                    .mission
                    .log(format!("Current score: {}", score));
                Ok(())
            }
        }
    }

    fn help(&mut self) {
        let lines = [
            "Commands:",
            "  NAV <course> [warp]  - Navigate (course 1-9, warp 0.1-8.0)",
            "  SRS                  - Short range sensor scan",
            "  LRS                  - Long range sensor scan",
            "  PHA <energy>         - Fire phasers",
            "  TOR <course>         - Fire photon torpedo",
            "  SHE <amount>         - Transfer energy to shields (negative drains)",
            "  DAM                  - Damage control report",
            "  REC                  - Cumulative galactic record",
            "  STA                  - Status report",
            "  SCO                  - Current score",
            "  HELP                 - This list",
            "  QUIT                 - Resign the mission",
        ];
        for line in lines {
            self.galaxy.mission.log(line);
        }
    }

    /// Counter-attack plus turn advance after a successful turn-consuming
    /// action.
    fn after_action(&mut self) {
        if !self.galaxy.ship.destroyed {
            combat::klingons_fire(&mut self.galaxy);
        }
        damage::repair_tick(&mut self.galaxy);
        self.galaxy.mission.stardate += 1.0;
        self.check_game_over();
    }

    /// Check victory and defeat conditions, ending the game when one holds.
    ///
    /// Returns the terminal state if the game is over.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.state != GameState::Playing {
            return Some(self.state.clone());
        }

        if self.galaxy.ship.destroyed {
            self.galaxy
                .mission
                .log("*** THE ENTERPRISE HAS BEEN DESTROYED ***");
            self.end_game(GameState::Defeat {
                reason: DefeatReason::ShipDestroyed,
            });
            return Some(self.state.clone());
        }

        if self.galaxy.ship.energy <= 0.0 && !self.galaxy.ship.docked {
            self.galaxy
                .mission
                .log("*** THE ENTERPRISE IS DEAD IN SPACE ***");
            self.end_game(GameState::Defeat {
                reason: DefeatReason::OutOfEnergy,
            });
            return Some(self.state.clone());
        }

        if self.galaxy.mission.is_time_expired() && self.galaxy.mission.klingons_remaining > 0 {
            self.galaxy
                .mission
                .log("*** TIME HAS RUN OUT. The Federation is doomed ***");
            self.end_game(GameState::Defeat {
                reason: DefeatReason::TimeExpired,
            });
            return Some(self.state.clone());
        }

        if self.galaxy.mission.klingons_remaining <= 0 {
            self.galaxy.mission.log(
                "MISSION ACCOMPLISHED: all Klingon battle cruisers destroyed!",
            );
            self.end_game(GameState::Victory);
            return Some(self.state.clone());
        }

        None
    }

    fn end_game(&mut self, state: GameState) {
        let record = match state {
            GameState::Victory => scoring::final_score(&self.galaxy),
            _ => ScoreRecord::defeat(),
        };
        self.log_score(&record);
        self.score = Some(record);
        self.state = state;
        self.pending = None;
    }

    fn log_score(&mut self, record: &ScoreRecord) {
        if record.victory {
            let lines = [
                "=== FINAL SCORE ===".to_string(),
                format!("Klingons destroyed {:>6}", record.klingon_points),
                format!("Time bonus         {:>6}", record.time_bonus),
                format!("Energy bonus       {:>6}", record.energy_bonus),
                format!("Torpedo bonus      {:>6}", record.torpedo_bonus),
                format!("Speed bonus        {:>6}", record.speed_bonus),
                format!("No damage bonus    {:>6}", record.no_damage_bonus),
                format!("Perfection bonus   {:>6}", record.perfection_bonus),
                format!("TOTAL              {:>6}", record.total),
                format!("RATING: {} - {}", record.grade, record.grade.description()),
            ];
            for line in lines {
                self.galaxy.mission.log(line);
            }
        } else {
            self.galaxy.mission.log("Final score: 0");
        }
    }
}
