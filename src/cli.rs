//! Command line arguments and the bridge command parser.

use crate::game_engine::{Command, ComputerQuery};
use crate::models::errors::{GameError, GameResult};

pub struct Args {
    pub seed: Option<u64>,
}

pub fn parse() -> Args {
    let mut args = Args { seed: None };
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" | "-s" => match iter.next().map(|val| val.parse::<u64>()) {
                Some(Ok(seed)) => args.seed = Some(seed),
                Some(Err(_)) => {
                    eprintln!("Error: seed must be a valid integer");
                    std::process::exit(1);
                }
                None => {
                    eprintln!("Error: --seed requires a value");
                    std::process::exit(1);
                }
            },
            "--help" | "-h" => {
                println!("Usage: trek1971 [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --seed <INT>  Seed for the random number generator");
                println!("  -h, --help        Print help");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    args
}

fn number(token: Option<&str>, what: &str) -> GameResult<f64> {
    token
        .and_then(|t| t.parse::<f64>().ok())
        .ok_or_else(|| GameError::InvalidCommand(format!("{} requires a number", what)))
}

/// Parse one line of bridge input into a [`Command`].
///
/// Keywords are case-insensitive and accept both the three letter
/// abbreviation and the full word. `NAV` may be given with or without a
/// warp factor; without one the engine prompts for it.
pub fn parse_command(input: &str) -> GameResult<Command> {
    let mut tokens = input.split_whitespace();
    let keyword = tokens
        .next()
        .ok_or_else(|| GameError::InvalidCommand("empty command".to_string()))?
        .to_ascii_uppercase();

    match keyword.as_str() {
        "NAV" | "NAVIGATE" => {
            let course = number(tokens.next(), "NAV")?;
            let warp = match tokens.next() {
                Some(t) => Some(t.parse::<f64>().map_err(|_| {
                    GameError::InvalidCommand("warp factor must be a number".to_string())
                })?),
                None => None,
            };
            Ok(Command::Navigate { course, warp })
        }
        "SRS" => Ok(Command::ShortRangeScan),
        "LRS" => Ok(Command::LongRangeScan),
        "PHA" | "PHASERS" => Ok(Command::FirePhasers {
            energy: number(tokens.next(), "PHA")?,
        }),
        "TOR" | "TORPEDO" => Ok(Command::FireTorpedo {
            course: number(tokens.next(), "TOR")?,
        }),
        "SHE" | "SHIELDS" => Ok(Command::AdjustShields {
            amount: number(tokens.next(), "SHE")?,
        }),
        "DAM" | "DAMAGE" => Ok(Command::DamageReport),
        "REC" | "RECORD" | "COM" => Ok(Command::Computer {
            query: ComputerQuery::GalacticRecord,
        }),
        "STA" | "STATUS" => Ok(Command::Computer {
            query: ComputerQuery::StatusReport,
        }),
        "SCO" | "SCORE" => Ok(Command::Computer {
            query: ComputerQuery::Score,
        }),
        "HELP" | "?" => Ok(Command::Help),
        "QUIT" | "EXIT" => Ok(Command::Quit),
        other => Err(GameError::InvalidCommand(other.to_string())),
    }
}
