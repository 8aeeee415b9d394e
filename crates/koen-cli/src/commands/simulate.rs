use colored::Colorize;

use koen_mechanics::RoundOutcome;
use koen_session::{GameConfig, run_simulation};

pub fn run(encounters: u32, seed: u64, verbose: bool) -> Result<(), String> {
    let config = GameConfig::default().with_seed(seed);
    let report = run_simulation("Bot", &config, encounters).map_err(|e| e.to_string())?;

    println!(
        "  {} {encounters} encounters (seed {seed})",
        "Simulating".bold()
    );

    if verbose {
        for (i, e) in report.encounters.iter().enumerate() {
            let outcome = match e.outcome {
                RoundOutcome::Victory => "victory".green(),
                RoundOutcome::Defeat => "defeat".red(),
                RoundOutcome::Fled => "fled".yellow(),
                RoundOutcome::Continuing => "unfinished".normal(),
            };
            println!(
                "  #{:<3} {:<12} {outcome} in {} rounds, {} HP left",
                i + 1,
                e.enemy,
                e.rounds,
                e.health_after
            );
        }
    }

    let p = &report.player;
    println!(
        "  Encounters: {} | Victories: {} | Defeats: {}",
        report.tally.total(),
        report.tally.victories,
        report.tally.defeats
    );
    println!(
        "  Level: {} | Experience: {} | Koen: {} | Health: {}/{}",
        p.level(),
        p.experience(),
        p.gold(),
        p.health(),
        p.max_health()
    );
    Ok(())
}
