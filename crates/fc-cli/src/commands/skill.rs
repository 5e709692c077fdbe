use colored::Colorize;
use fc_core::Skill;
use fc_mechanics::{DiceValue, RulesConfig, SkillInput, resolve_skill_value};

pub fn run(
    attribute: &str,
    dice: u32,
    steps: u32,
    weakened: bool,
    equipment: i64,
    injury: i64,
) -> Result<(), String> {
    let Some(attribute_value) = DiceValue::try_parse(attribute) else {
        return Err(format!("not dice notation: '{attribute}'"));
    };

    let mut skill = Skill::new("skill", "attribute")
        .with_bonus_dice(dice)
        .with_bonus_steps(steps);
    skill.is_weakened = weakened;

    let rules = RulesConfig::default();
    let input = SkillInput::new(attribute_value)
        .with_bonus_dice(dice)
        .with_bonus_steps(u64::from(steps))
        .with_flags(skill.is_weakened, skill.is_learned());
    let value = resolve_skill_value(&rules, &input, equipment, injury);

    println!("  {} {}", "Skill value".bold(), value.to_string().green());
    if input.weakened_penalty_applies() {
        println!(
            "  {}",
            format!("weakened and untrained: -{}D", rules.weakened_penalty_dice).yellow()
        );
    }

    Ok(())
}
