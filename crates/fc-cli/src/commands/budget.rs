use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use fc_mechanics::{BudgetLineKind, budget_breakdown};

pub fn run(character: &Path, settings: Option<&Path>, rules: Option<&Path>) -> Result<(), String> {
    let snapshot = super::load_snapshot(character, settings, None)?;
    let rules = super::load_rules(rules)?;

    let lines = budget_breakdown(&snapshot.character, &rules);
    let budget = snapshot.budget(&rules);

    if lines.is_empty() {
        println!("  No blips spent.");
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Kind", "Name", "Steps", "Blips"]);
        for line in &lines {
            let kind = match line.kind {
                BudgetLineKind::Attribute => "attribute",
                BudgetLineKind::Skill => "skill",
                BudgetLineKind::Specialization => "specialization",
            };
            table.add_row(vec![
                kind.to_string(),
                line.label.clone(),
                line.steps.to_string(),
                line.cost.to_string(),
            ]);
        }
        println!("{table}");
    }
    println!();

    println!(
        "  {} {} total ({} start + {} earned)",
        "Budget".bold(),
        budget.total_blip_budget,
        snapshot.settings.default_start_blips,
        snapshot.character.earned_blips
    );
    println!("  {} used, {} remaining", budget.used_blips, budget.remaining_blips);
    if budget.is_over_budget() {
        println!(
            "  {}",
            format!("over budget by {}", -budget.balance).red().bold()
        );
    }

    Ok(())
}
