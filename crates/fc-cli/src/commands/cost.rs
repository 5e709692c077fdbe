use comfy_table::{ContentArrangement, Table};
use fc_mechanics::{DiceValue, MAX_PRICED_STEPS, additional_cost, from_steps, unit_cost};

pub fn run(steps: u64, from: u64) -> Result<(), String> {
    if steps == 0 {
        println!("  Nothing to buy.");
        return Ok(());
    }

    let end = from
        .checked_add(steps)
        .filter(|&end| end <= MAX_PRICED_STEPS)
        .ok_or_else(|| {
            format!("{steps} steps from {from} go past the priced range of {MAX_PRICED_STEPS} steps")
        })?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Step", "Rating", "Price", "Total"]);

    let mut total: u64 = 0;
    for step in from + 1..=end {
        let price = unit_cost(step);
        total = total.saturating_add(price);
        let rating: DiceValue = from_steps(i64::try_from(step).unwrap_or(i64::MAX));
        table.add_row(vec![
            step.to_string(),
            rating.to_string(),
            price.to_string(),
            total.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} steps from {} cost {} blips",
        steps,
        from,
        additional_cost(from, steps)
    );

    Ok(())
}
