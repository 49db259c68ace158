use std::io::{self, BufRead, Write};

use trek1971::{cli, GameConfig, GameEngine, GameState};

fn flush_messages(engine: &GameEngine, cursor: usize) -> usize {
    let messages = engine.galaxy().mission.messages_since(cursor);
    for line in messages {
        println!("{}", line);
    }
    cursor + messages.len()
}

fn main() {
    let args = cli::parse();

    let mut engine = match args.seed {
        Some(seed) => GameEngine::from_seed(GameConfig::default(), seed),
        None => GameEngine::new(GameConfig::default()),
    };

    let mut cursor = flush_messages(&engine, 0);
    let stdin = io::stdin();

    loop {
        if engine.awaiting_input() {
            print!("? ");
        } else {
            print!("COMMAND? ");
        }
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = if engine.awaiting_input() {
            match line.parse::<f64>() {
                Ok(value) => engine.submit_number(value),
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            }
        } else {
            cli::parse_command(line).and_then(|command| engine.execute(command))
        };

        if let Err(err) = result {
            println!("{}", err);
        }
        cursor = flush_messages(&engine, cursor);

        if *engine.state() != GameState::Playing {
            break;
        }
    }
}
