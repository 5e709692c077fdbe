use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(
    character: &Path,
    settings: Option<&Path>,
    rules: Option<&Path>,
    injuries: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let snapshot = super::load_snapshot(character, settings, injuries)?;
    let rules = super::load_rules(rules)?;

    let sheet = snapshot.sheet(&rules);

    if json {
        let out = serde_json::to_string_pretty(&sheet).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if sheet.player_name.is_empty() {
        println!("  {}", sheet.name.bold());
    } else {
        println!("  {} ({})", sheet.name.bold(), sheet.player_name);
    }
    println!();

    let mut attributes = Table::new();
    attributes.set_content_arrangement(ContentArrangement::Dynamic);
    attributes.set_header(vec!["Attribute", "Value", "Blips"]);
    for row in &sheet.attributes {
        attributes.add_row(vec![
            row.name.clone(),
            row.value.to_string(),
            row.cost.to_string(),
        ]);
    }
    println!("{attributes}");
    println!();

    let mut skills = Table::new();
    skills.set_content_arrangement(ContentArrangement::Dynamic);
    skills.set_header(vec!["Attribute", "Skill", "Value", "Modifier"]);
    for group in &sheet.skill_groups {
        for row in &group.skills {
            let mut name = row.name.clone();
            if row.weakened_active {
                name.push_str(" (weakened)");
            }
            let modifier = match row.modifier_steps {
                0 => String::new(),
                n => format!("{n:+}"),
            };
            skills.add_row(vec![
                group.attribute.clone(),
                name,
                row.value.to_string(),
                modifier,
            ]);
            for spec in &row.specializations {
                skills.add_row(vec![
                    String::new(),
                    format!("  {}", spec.name),
                    spec.value.to_string(),
                    String::new(),
                ]);
            }
        }
    }
    println!("{skills}");
    println!();

    let budget = sheet.budget;
    let summary = format!(
        "{} of {} blips used, {} remaining",
        budget.used_blips, budget.total_blip_budget, budget.remaining_blips
    );
    if budget.is_over_budget() {
        println!("  {}", summary.red());
    } else {
        println!("  {summary}");
    }

    Ok(())
}
