use colored::Colorize;
use fc_mechanics::{DiceValue, d6_range};

pub fn run(text: &str) -> Result<(), String> {
    let Some(value) = DiceValue::try_parse(text) else {
        return Err(format!("not dice notation: '{text}' (expected e.g. 2D+1)"));
    };

    let (low, high) = d6_range(value);
    println!("  {} {}", "Notation".bold(), value);
    if !value.is_canonical() {
        println!("  {}", format!("stored as '{}'", text.trim()).dimmed());
    }
    println!("  {} steps, range {low}-{high}", value.steps());

    Ok(())
}
