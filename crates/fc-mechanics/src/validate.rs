//! Creation-limit checks for a character snapshot.
//!
//! Nothing here blocks a computation: the engine computes any snapshot.
//! Issues are surfaced to the GM, who decides whether a character may exceed
//! the campaign limits.

use fc_core::{Attribute, Character, CharacterCreationSettings, display_skill_name};

use crate::budget::compute_character_budget;
use crate::cost::attribute_steps;
use crate::dice::{DiceValue, STEPS_PER_DIE};
use crate::rules::RulesConfig;

/// A warning or error found while checking a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What the issue is about (attribute, skill, or the character itself).
    pub subject: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Whether this is an error (true) or a warning (false).
    pub is_error: bool,
}

impl ValidationIssue {
    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }

    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: true,
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.subject, self.message)
    }
}

/// Check a character against the campaign's creation limits.
pub fn validate_character(
    character: &Character,
    settings: &CharacterCreationSettings,
    rules: &RulesConfig,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    validate_attributes(character, settings, rules, &mut issues);
    validate_skills(character, settings, rules, &mut issues);

    let budget = compute_character_budget(character, settings, rules);
    if budget.is_over_budget() {
        issues.push(ValidationIssue::warning(
            character.name.clone(),
            format!(
                "blip budget exceeded: {} of {} used",
                budget.used_blips, budget.total_blip_budget
            ),
        ));
    }

    issues
}

fn validate_attributes(
    character: &Character,
    settings: &CharacterCreationSettings,
    rules: &RulesConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut total_dice = 0;

    for (key, notation) in &character.attributes {
        let Some(attribute) = Attribute::parse(key) else {
            issues.push(ValidationIssue::warning(
                key.clone(),
                "not one of the seven attributes",
            ));
            continue;
        };

        let Some(value) = DiceValue::try_parse(notation) else {
            issues.push(ValidationIssue::error(
                key.clone(),
                format!("unreadable dice notation '{notation}'"),
            ));
            continue;
        };

        if !value.is_canonical() {
            issues.push(ValidationIssue::warning(
                key.clone(),
                format!("'{notation}' is stored as {value}"),
            ));
        }

        let dice = attribute_steps(rules, attribute, value) / STEPS_PER_DIE as u64;
        total_dice += dice;
        if dice > u64::from(settings.max_attribute_dice_per_attribute) {
            issues.push(ValidationIssue::warning(
                key.clone(),
                format!(
                    "{dice} dice above baseline, limit is {}",
                    settings.max_attribute_dice_per_attribute
                ),
            ));
        }
    }

    if total_dice > u64::from(settings.max_attribute_points) {
        issues.push(ValidationIssue::warning(
            character.name.clone(),
            format!(
                "{total_dice} attribute dice bought, limit is {}",
                settings.max_attribute_points
            ),
        ));
    }
}

fn validate_skills(
    character: &Character,
    settings: &CharacterCreationSettings,
    rules: &RulesConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    let mut total_dice = 0u64;
    let mut total_blips = 0u64;

    for skill in &character.skills {
        let name = display_skill_name(&skill.name);

        if skill.attribute_kind().is_none()
            && character.attribute_notation_by_name(&skill.attribute).is_none()
        {
            issues.push(ValidationIssue::warning(
                name,
                format!("unknown attribute '{}'", skill.attribute),
            ));
        }

        total_dice += u64::from(skill.bonus_dice);
        if skill.bonus_dice > settings.max_skill_dice_per_skill {
            issues.push(ValidationIssue::warning(
                name,
                format!(
                    "{} bonus dice, limit is {}",
                    skill.bonus_dice, settings.max_skill_dice_per_skill
                ),
            ));
        }

        for spec in &skill.specializations {
            total_blips += u64::from(spec.blips);
            let subject = format!("{name} / {}", spec.name);
            if spec.blips > rules.max_specialization_blips {
                issues.push(ValidationIssue::error(
                    subject,
                    format!(
                        "{} blips, the rules allow at most {}",
                        spec.blips, rules.max_specialization_blips
                    ),
                ));
            } else if spec.blips > settings.max_blibs_per_specialization {
                issues.push(ValidationIssue::warning(
                    subject,
                    format!(
                        "{} blips, limit is {}",
                        spec.blips, settings.max_blibs_per_specialization
                    ),
                ));
            }
        }
    }

    if total_dice > u64::from(settings.max_skill_points) {
        issues.push(ValidationIssue::warning(
            character.name.clone(),
            format!(
                "{total_dice} skill dice bought, limit is {}",
                settings.max_skill_points
            ),
        ));
    }

    if total_blips > u64::from(settings.max_blibs) {
        issues.push(ValidationIssue::warning(
            character.name.clone(),
            format!(
                "{total_blips} specialization blips, limit is {}",
                settings.max_blibs
            ),
        ));
    }
}
