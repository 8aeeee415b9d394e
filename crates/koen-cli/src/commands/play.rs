use std::io::{self, BufRead, Write};

use colored::Colorize;

use koen_session::{GameConfig, GameSession, SessionError};

const DEFAULT_NAME: &str = "Adventurer";

pub fn run(name: Option<String>, seed: Option<u64>) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    println!("  {} to the Koen Adventure!", "Welcome".bold());
    println!("  Explore a magical world, fight monsters, and collect treasure.\n");

    let name = match name {
        Some(name) => name,
        None => {
            print!("Enter your character's name: ");
            io::stdout().flush().map_err(|e| e.to_string())?;
            if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
                return Err("no character name given".into());
            }
            match line.trim() {
                "" => DEFAULT_NAME.to_string(),
                trimmed => trimmed.to_string(),
            }
        }
    };

    let mut config = GameConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(name = %name, ?seed, "starting session");
    let mut session = GameSession::new(name, config);

    while !session.is_finished() {
        println!("\n{}", session.menu());
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        if reader.read_line(&mut line).map_err(|e| e.to_string())? == 0 {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => println!("{output}"),
            Err(e) if e.is_recoverable() => println!("{}", e.to_string().yellow()),
            Err(e @ SessionError::TooManyInvalidInputs(_)) => {
                return Err(format!("{e}; giving up"));
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    Ok(())
}
