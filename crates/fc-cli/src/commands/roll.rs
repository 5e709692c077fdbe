use colored::Colorize;
use fc_mechanics::{DiceValue, roll_d6};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(notation: &str, seed: Option<u64>, target: Option<i64>) -> Result<(), String> {
    let Some(value) = DiceValue::try_parse(notation) else {
        return Err(format!("not dice notation: '{notation}'"));
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let roll = roll_d6(value, &mut rng);

    println!("  {roll}");
    if roll.is_critical_failure() {
        println!("  {}", "Red die shows 1.".red().bold());
    } else if roll.exploded() {
        println!("  {}", "Red die exploded.".green());
    }

    if let Some(target) = target {
        if roll.succeeds_against(target) {
            println!("  {} against {target}", "Success".green().bold());
        } else {
            println!("  {} against {target}", "Failure".red().bold());
        }
    }

    Ok(())
}
