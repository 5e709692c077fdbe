use std::path::Path;

use colored::Colorize;

pub fn run(character: &Path, settings: Option<&Path>, rules: Option<&Path>) -> Result<(), String> {
    let snapshot = super::load_snapshot(character, settings, None)?;
    let rules = super::load_rules(rules)?;
    let character = &snapshot.character;

    let issues = snapshot.validate(&rules);
    if issues.is_empty() {
        println!("  All checks passed for '{}'.", character.name);
        return Ok(());
    }

    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!(
        "  '{}' is usable with {} warning{}.",
        character.name,
        warnings,
        if warnings == 1 { "" } else { "s" },
    );
    Ok(())
}
