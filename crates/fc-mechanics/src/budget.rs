//! Blip budget accounting for a character.

use fc_core::{Attribute, Character, CharacterCreationSettings, display_skill_name};
use serde::{Deserialize, Serialize};

use crate::cost::{
    attribute_cost, attribute_steps, skill_training_cost, specialization_cost,
};
use crate::dice::DiceValue;
use crate::rules::RulesConfig;

/// How many blips a character has, has spent, and has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBudget {
    /// Starting blips plus GM-awarded blips.
    pub total_blip_budget: u64,
    /// Blips spent on attributes, skills, and specializations.
    pub used_blips: u64,
    /// Blips still available. Never negative.
    pub remaining_blips: u64,
    /// `total - used`; negative when the character is over budget.
    pub balance: i64,
}

impl CharacterBudget {
    fn new(total: u64, used: u64) -> Self {
        let balance = i64::try_from(total)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(used).unwrap_or(i64::MAX));
        Self {
            total_blip_budget: total,
            used_blips: used,
            remaining_blips: total.saturating_sub(used),
            balance,
        }
    }

    /// True if more blips were spent than the budget allows.
    pub fn is_over_budget(&self) -> bool {
        self.balance < 0
    }
}

/// What a budget line was spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetLineKind {
    /// Steps above an attribute's baseline.
    Attribute,
    /// A skill's own dice and steps.
    Skill,
    /// Blips in one specialization.
    Specialization,
}

/// One charged item in a budget breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLine {
    /// Kind of purchase.
    pub kind: BudgetLineKind,
    /// Attribute, skill, or "skill / specialization" name.
    pub label: String,
    /// Steps bought.
    pub steps: u64,
    /// Blips charged.
    pub cost: u64,
}

/// The character's value for an attribute, or the baseline if absent.
fn attribute_value(character: &Character, rules: &RulesConfig, attribute: Attribute) -> DiceValue {
    character
        .attribute_notation(attribute)
        .map(DiceValue::parse)
        .unwrap_or_else(|| rules.baseline(attribute))
}

/// Every purchase with a non-zero cost, in sheet order: attributes, then
/// skills each followed by their specializations.
pub fn budget_breakdown(character: &Character, rules: &RulesConfig) -> Vec<BudgetLine> {
    let mut lines = Vec::new();

    for attribute in Attribute::ALL {
        let value = attribute_value(character, rules, attribute);
        let cost = attribute_cost(rules, attribute, value);
        if cost > 0 {
            lines.push(BudgetLine {
                kind: BudgetLineKind::Attribute,
                label: attribute.name().to_string(),
                steps: attribute_steps(rules, attribute, value),
                cost,
            });
        }
    }

    for skill in &character.skills {
        let name = display_skill_name(&skill.name);
        let cost = skill_training_cost(skill);
        if cost > 0 {
            lines.push(BudgetLine {
                kind: BudgetLineKind::Skill,
                label: name.to_string(),
                steps: skill.training_steps(),
                cost,
            });
        }
        for spec in &skill.specializations {
            let cost = specialization_cost(spec);
            if cost > 0 {
                lines.push(BudgetLine {
                    kind: BudgetLineKind::Specialization,
                    label: format!("{name} / {}", spec.name),
                    steps: u64::from(spec.blips),
                    cost,
                });
            }
        }
    }

    lines
}

/// Compute the blip budget of a character.
///
/// Attribute keys that are not one of the seven attributes cost nothing and
/// are logged.
pub fn compute_character_budget(
    character: &Character,
    settings: &CharacterCreationSettings,
    rules: &RulesConfig,
) -> CharacterBudget {
    for key in character.attributes.keys() {
        if Attribute::parse(key).is_none() {
            tracing::warn!(
                character = %character.name,
                attribute = %key,
                "unknown attribute key, not charged"
            );
        }
    }

    let total = u64::from(settings.default_start_blips) + u64::from(character.earned_blips);
    let used = budget_breakdown(character, rules)
        .iter()
        .fold(0u64, |acc, line| acc.saturating_add(line.cost));
    CharacterBudget::new(total, used)
}
