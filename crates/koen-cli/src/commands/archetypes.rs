//! Print the bestiary.

use comfy_table::{Cell, Table};

use koen_mechanics::ARCHETYPES;
use koen_mechanics::encounter::{DAMAGE_VARIANCE, HEALTH_VARIANCE};

pub fn run(json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(&ARCHETYPES).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Health", "Damage", "Koen", "Experience"]);
    for a in &ARCHETYPES {
        table.add_row(vec![
            Cell::new(a.name),
            Cell::new(format!("{} ±{HEALTH_VARIANCE}", a.health)),
            Cell::new(format!("{} ±{DAMAGE_VARIANCE}", a.damage)),
            Cell::new(a.gold_reward),
            Cell::new(a.exp_reward),
        ]);
    }
    println!("{table}");
    Ok(())
}
