use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use fc_core::{Attribute, InjurySlot};

pub fn run(rules: Option<&Path>) -> Result<(), String> {
    let rules = super::load_rules(rules)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Baseline", "Skills"]);
    for attribute in Attribute::ALL {
        let skills: Vec<&str> = rules
            .skills_for(attribute)
            .map(|s| s.name.as_str())
            .collect();
        table.add_row(vec![
            attribute.name().to_string(),
            rules.baseline(attribute).to_string(),
            skills.join(", "),
        ]);
    }
    println!("{table}");
    println!();

    let mut injuries = Table::new();
    injuries.set_content_arrangement(ContentArrangement::Dynamic);
    injuries.set_header(vec!["Slot", "Hampers"]);
    for slot in InjurySlot::ALL {
        let words = rules.injury_keywords(slot);
        if !words.is_empty() {
            injuries.add_row(vec![slot.name().to_string(), words.join(", ")]);
        }
    }
    println!("{injuries}");
    println!();
    println!(
        "  {} skills, rules '{}'",
        rules.skill_catalog.len(),
        rules.name
    );

    Ok(())
}
