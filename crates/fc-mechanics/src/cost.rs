//! The blip cost curve.
//!
//! The i-th step bought above a baseline costs `ceil(i / 3)` blips, so the
//! price rises by one blip for every whole die already bought. Attributes
//! are charged from their fixed baseline; skills and specializations from
//! zero.

use fc_core::{Attribute, Skill, Specialization};

use crate::dice::{DiceValue, MAX_STEPS, STEPS_PER_DIE};
use crate::rules::RulesConfig;

/// Most steps the curve prices. Anything beyond costs `u64::MAX`.
pub const MAX_PRICED_STEPS: u64 = MAX_STEPS as u64;

/// Price in blips of the `step`-th step bought (1-indexed).
pub fn unit_cost(step: u64) -> u64 {
    step.div_ceil(STEPS_PER_DIE as u64)
}

/// Total blips for buying `steps` steps from scratch, summed per step.
///
/// Totals above [`MAX_PRICED_STEPS`] are unaffordable and cost `u64::MAX`.
pub fn cumulative_cost(steps: u64) -> u64 {
    if steps > MAX_PRICED_STEPS {
        return u64::MAX;
    }
    (1..=steps).fold(0u64, |acc, step| acc.saturating_add(unit_cost(step)))
}

/// Blips needed to buy `added` more steps on top of `current`.
pub fn additional_cost(current: u64, added: u64) -> u64 {
    match current.checked_add(added) {
        Some(end) if end <= MAX_PRICED_STEPS => cumulative_cost(end) - cumulative_cost(current),
        _ => u64::MAX,
    }
}

/// Steps an attribute value sits above its baseline. Never negative.
pub fn attribute_steps(rules: &RulesConfig, attribute: Attribute, value: DiceValue) -> u64 {
    let above = value.steps() - rules.baseline(attribute).steps();
    u64::try_from(above).unwrap_or(0)
}

/// Blips spent raising an attribute from its baseline to `value`.
pub fn attribute_cost(rules: &RulesConfig, attribute: Attribute, value: DiceValue) -> u64 {
    cumulative_cost(attribute_steps(rules, attribute, value))
}

/// Blips spent on a skill's own dice and steps, excluding specializations.
pub fn skill_training_cost(skill: &Skill) -> u64 {
    cumulative_cost(skill.training_steps())
}

/// Blips spent on one specialization.
pub fn specialization_cost(spec: &Specialization) -> u64 {
    cumulative_cost(u64::from(spec.blips))
}
