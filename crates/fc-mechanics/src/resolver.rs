//! Skill values: attribute + training + specializations + modifiers.
//!
//! All arithmetic happens on the step scale and is converted back to dice
//! once at the end, so a +1 from equipment is never rounded away.

use fc_core::{Character, InjuryRecord, NormalizedSkillKey, Skill, Specialization};
use serde::{Deserialize, Serialize};

use crate::dice::{DiceValue, STEPS_PER_DIE, Steps, from_steps};
use crate::modifiers::SkillModifiers;
use crate::rules::RulesConfig;

/// Everything that goes into a skill value before equipment and injuries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkillInput {
    /// The owning attribute's rating.
    pub attribute_value: DiceValue,
    /// Whole trained dice.
    pub bonus_dice: u32,
    /// Extra steps (trained steps plus specialization blips).
    pub bonus_steps: u64,
    /// The skill is weakened.
    pub is_weakened: bool,
    /// The skill has any training.
    pub is_learned: bool,
}

impl SkillInput {
    /// An untrained, unweakened skill on `attribute_value`.
    pub fn new(attribute_value: DiceValue) -> Self {
        Self {
            attribute_value,
            ..Self::default()
        }
    }

    /// Set the trained dice.
    pub fn with_bonus_dice(mut self, dice: u32) -> Self {
        self.bonus_dice = dice;
        self
    }

    /// Set the extra steps.
    pub fn with_bonus_steps(mut self, steps: u64) -> Self {
        self.bonus_steps = steps;
        self
    }

    /// Set the weakened and learned flags.
    pub fn with_flags(mut self, is_weakened: bool, is_learned: bool) -> Self {
        self.is_weakened = is_weakened;
        self.is_learned = is_learned;
        self
    }

    /// True if the weakened-untrained penalty applies.
    pub fn weakened_penalty_applies(&self) -> bool {
        self.is_weakened && !self.is_learned
    }
}

/// Steps of a skill before conversion back to dice. May be negative.
///
/// A weakened untrained skill loses `penalty_dice` whole dice from the
/// attribute (never below 0D) while keeping the attribute's modifier.
pub fn resolve_steps(input: &SkillInput, penalty_dice: u32, equipment: Steps, injury: Steps) -> Steps {
    let attribute = input.attribute_value.canonical();
    let mut base = attribute.steps();
    if input.weakened_penalty_applies() {
        let count = attribute.count.saturating_sub(penalty_dice);
        base = Steps::from(count) * STEPS_PER_DIE + Steps::from(attribute.modifier);
    }
    let training = Steps::from(input.bonus_dice) * STEPS_PER_DIE;
    let extra = Steps::try_from(input.bonus_steps).unwrap_or(Steps::MAX);
    base.saturating_add(training)
        .saturating_add(extra)
        .saturating_add(equipment)
        .saturating_sub(injury)
}

/// Final canonical rating of a skill. Totals below zero clamp to `0D`.
pub fn resolve_skill_value(
    rules: &RulesConfig,
    input: &SkillInput,
    equipment: Steps,
    injury: Steps,
) -> DiceValue {
    from_steps(resolve_steps(
        input,
        rules.weakened_penalty_dice,
        equipment,
        injury,
    ))
}

/// Notation-in, notation-out form of [`resolve_skill_value`] without
/// equipment or injuries.
pub fn calculate_skill_value(
    rules: &RulesConfig,
    attribute_value: &str,
    bonus_dice: u32,
    bonus_steps: u32,
    is_weakened: bool,
    is_learned: bool,
) -> String {
    let input = SkillInput::new(DiceValue::parse(attribute_value))
        .with_bonus_dice(bonus_dice)
        .with_bonus_steps(u64::from(bonus_steps))
        .with_flags(is_weakened, is_learned);
    resolve_skill_value(rules, &input, 0, 0).to_string()
}

/// A skill's final rating and how it got there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSkill {
    /// Skill name as stored.
    pub name: String,
    /// Owning attribute name as stored.
    pub attribute: String,
    /// The attribute rating the skill was built on.
    pub attribute_value: DiceValue,
    /// Final rating.
    pub value: DiceValue,
    /// The weakened-untrained penalty was applied.
    pub weakened_active: bool,
    /// Steps added by equipment.
    pub equipment_bonus: Steps,
    /// Steps removed by injuries.
    pub injury_penalty: Steps,
}

/// Resolves skill values for one character snapshot.
#[derive(Debug, Clone)]
pub struct SkillResolver<'a> {
    rules: &'a RulesConfig,
    character: &'a Character,
    modifiers: SkillModifiers<'a>,
}

impl<'a> SkillResolver<'a> {
    /// A resolver that applies the character's equipment and injuries.
    pub fn new(rules: &'a RulesConfig, character: &'a Character, injuries: &[InjuryRecord]) -> Self {
        Self {
            rules,
            character,
            modifiers: SkillModifiers::for_character(rules, character, injuries),
        }
    }

    /// A resolver with explicit modifier tables.
    pub fn with_modifiers(
        rules: &'a RulesConfig,
        character: &'a Character,
        modifiers: SkillModifiers<'a>,
    ) -> Self {
        Self {
            rules,
            character,
            modifiers,
        }
    }

    /// The character's rating for an attribute given by name.
    ///
    /// Missing values use the configured fallback and log a warning.
    pub fn attribute_value(&self, name: &str) -> DiceValue {
        match self.character.attribute_notation_by_name(name) {
            Some(notation) => DiceValue::parse(notation),
            None => {
                tracing::warn!(
                    character = %self.character.name,
                    attribute = name,
                    "attribute missing on character, using fallback"
                );
                self.rules.missing_attribute_value
            }
        }
    }

    /// Resolve a skill: trained dice, trained steps, and the sum of all
    /// specialization blips.
    pub fn skill(&self, skill: &Skill) -> ResolvedSkill {
        let steps = u64::from(skill.bonus_steps).saturating_add(skill.specialization_blips());
        self.resolve(skill, steps)
    }

    /// Rating when rolling for one specialization: the skill's own training
    /// plus that specialization's blips.
    pub fn specialization_value(&self, skill: &Skill, spec: &Specialization) -> DiceValue {
        self.resolve(skill, u64::from(skill.bonus_steps) + u64::from(spec.blips))
            .value
    }

    fn resolve(&self, skill: &Skill, bonus_steps: u64) -> ResolvedSkill {
        let attribute_value = self.attribute_value(&skill.attribute);
        let input = SkillInput::new(attribute_value)
            .with_bonus_dice(skill.bonus_dice)
            .with_bonus_steps(bonus_steps)
            .with_flags(skill.is_weakened, skill.is_learned());

        let key: NormalizedSkillKey = skill.key();
        let equipment_bonus = self.modifiers.equipment_bonus(&key);
        let injury_penalty = self.modifiers.injury_penalty(&key);

        ResolvedSkill {
            name: skill.name.clone(),
            attribute: skill.attribute.clone(),
            attribute_value: attribute_value.canonical(),
            value: resolve_skill_value(self.rules, &input, equipment_bonus, injury_penalty),
            weakened_active: input.weakened_penalty_applies(),
            equipment_bonus,
            injury_penalty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_core::{Attribute, InjurySlot, InventoryItem};

    fn rules() -> RulesConfig {
        RulesConfig::default()
    }

    fn value(input: SkillInput) -> String {
        resolve_skill_value(&rules(), &input, 0, 0).to_string()
    }

    #[test]
    fn one_bonus_die() {
        let input = SkillInput::new(DiceValue::dice(2)).with_bonus_dice(1);
        assert_eq!(resolve_steps(&input, 3, 0, 0), 9);
        assert_eq!(value(input), "3D");
    }

    #[test]
    fn one_bonus_step() {
        let input = SkillInput::new(DiceValue::dice(2)).with_bonus_steps(1);
        assert_eq!(resolve_steps(&input, 3, 0, 0), 7);
        assert_eq!(value(input), "2D+1");
    }

    #[test]
    fn equipment_and_injury_in_step_domain() {
        let input = SkillInput::new(DiceValue::dice(2));
        assert_eq!(resolve_steps(&input, 3, 2, 1), 7);
        assert_eq!(resolve_skill_value(&rules(), &input, 2, 1).to_string(), "2D+1");
    }

    #[test]
    fn small_bonus_is_not_rounded_away() {
        let input = SkillInput::new(DiceValue::new(2, 2));
        assert_eq!(resolve_skill_value(&rules(), &input, 1, 0), DiceValue::dice(3));
        assert_eq!(resolve_skill_value(&rules(), &input, 0, 1), DiceValue::new(2, 1));
    }

    #[test]
    fn weakened_untrained_loses_three_dice() {
        let input = SkillInput::new(DiceValue::new(4, 1)).with_flags(true, false);
        assert!(input.weakened_penalty_applies());
        assert_eq!(value(input), "1D+1");
    }

    #[test]
    fn weakened_penalty_floors_at_zero_dice() {
        let input = SkillInput::new(DiceValue::dice(2)).with_flags(true, false);
        assert_eq!(value(input), "0D");

        let input = SkillInput::new(DiceValue::new(2, 2)).with_flags(true, false);
        assert_eq!(value(input), "0D+2");
    }

    #[test]
    fn weakened_but_learned_uses_full_attribute() {
        let input = SkillInput::new(DiceValue::dice(3))
            .with_bonus_dice(1)
            .with_flags(true, true);
        assert!(!input.weakened_penalty_applies());
        assert_eq!(value(input), "4D");
    }

    #[test]
    fn extreme_modifiers_saturate() {
        let input = SkillInput::new(DiceValue::dice(2)).with_bonus_steps(u64::MAX);
        assert_eq!(resolve_steps(&input, 3, Steps::MAX, 0), Steps::MAX);
        let input = SkillInput::new(DiceValue::dice(2));
        assert_eq!(resolve_steps(&input, 3, 0, Steps::MAX), 6 - Steps::MAX);
        assert_eq!(resolve_skill_value(&rules(), &input, 0, Steps::MAX), DiceValue::ZERO);
    }

    #[test]
    fn penalty_size_comes_from_rules() {
        let rules = RulesConfig::default().with_weakened_penalty_dice(1);
        let input = SkillInput::new(DiceValue::dice(3)).with_flags(true, false);
        assert_eq!(resolve_skill_value(&rules, &input, 0, 0), DiceValue::dice(2));
    }

    #[test]
    fn negative_totals_clamp_to_zero() {
        let input = SkillInput::new(DiceValue::dice(1));
        assert_eq!(resolve_steps(&input, 3, 0, 5), -2);
        assert_eq!(resolve_skill_value(&rules(), &input, 0, 5), DiceValue::ZERO);
    }

    #[test]
    fn non_canonical_attribute_is_folded_first() {
        let input = SkillInput::new(DiceValue::new(2, -1)).with_bonus_steps(1);
        assert_eq!(value(input), "2D");
    }

    #[test]
    fn string_facade() {
        assert_eq!(calculate_skill_value(&rules(), "2D", 1, 0, false, false), "3D");
        assert_eq!(calculate_skill_value(&rules(), "2D", 0, 1, false, false), "2D+1");
        assert_eq!(calculate_skill_value(&rules(), "4D+1", 0, 0, true, false), "1D+1");
        assert_eq!(calculate_skill_value(&rules(), "kaputt", 0, 0, false, false), "1D");
    }

    #[test]
    fn resolver_sums_specializations() {
        let rules = rules();
        let character = Character::new("Georg").with_attribute(Attribute::Reflexe, "2D");
        let skill = Skill::new("bewaffneter Nahkampf", "Reflexe")
            .with_specialization(Specialization::new("Schwert", "bewaffneter Nahkampf").with_blips(1))
            .with_specialization(Specialization::new("Axt", "bewaffneter Nahkampf").with_blips(1));
        let resolver = SkillResolver::new(&rules, &character, &[]);
        let resolved = resolver.skill(&skill);
        assert_eq!(resolved.value, DiceValue::new(2, 2));
        assert!(!resolved.weakened_active);
    }

    #[test]
    fn resolver_specialization_uses_own_blips() {
        let rules = rules();
        let character = Character::new("Georg").with_attribute(Attribute::Reflexe, "3D");
        let sword = Specialization::new("Schwert", "bewaffneter Nahkampf").with_blips(2);
        let skill = Skill::new("bewaffneter Nahkampf", "Reflexe")
            .with_bonus_dice(1)
            .with_bonus_steps(1)
            .with_specialization(sword.clone())
            .with_specialization(Specialization::new("Axt", "bewaffneter Nahkampf").with_blips(1));
        let resolver = SkillResolver::new(&rules, &character, &[]);
        // 9 + 3 + 1 + 2 = 15
        assert_eq!(resolver.specialization_value(&skill, &sword), DiceValue::dice(5));
        // 9 + 3 + 1 + 3 = 16
        assert_eq!(resolver.skill(&skill).value, DiceValue::new(5, 1));
    }

    #[test]
    fn resolver_applies_equipment_and_injuries() {
        let rules = rules();
        let character = Character::new("Georg")
            .with_id("c1")
            .with_attribute(Attribute::Koordination, "2D")
            .with_item(InventoryItem::new("Dietrich").with_stat("schloesser oeffnen", 2));
        let injuries = vec![InjuryRecord::new("c1", InjurySlot::FingerR, 1)];
        let resolver = SkillResolver::new(&rules, &character, &injuries);
        let resolved = resolver.skill(&Skill::new("Schlösser öffnen", "Koordination"));
        assert_eq!(resolved.equipment_bonus, 2);
        assert_eq!(resolved.injury_penalty, 1);
        assert_eq!(resolved.value.to_string(), "2D+1");
    }

    #[test]
    fn resolver_weakened_flag() {
        let rules = rules();
        let character = Character::new("Georg").with_attribute(Attribute::Magie, "4D");
        let resolver = SkillResolver::new(&rules, &character, &[]);
        let resolved = resolver.skill(&Skill::new("magische Kraft", "Magie").weakened());
        assert!(resolved.weakened_active);
        assert_eq!(resolved.value, DiceValue::dice(1));
    }

    #[test]
    fn resolver_bought_step_lifts_weakened_penalty() {
        let rules = rules();
        let character = Character::new("Georg").with_attribute(Attribute::Reflexe, "4D");
        let resolver = SkillResolver::new(&rules, &character, &[]);
        let skill = Skill::new("Reiten", "Reflexe").with_bonus_steps(1).weakened();
        let resolved = resolver.skill(&skill);
        assert!(!resolved.weakened_active);
        assert_eq!(resolved.value, DiceValue::new(4, 1));
    }

    #[test]
    fn resolver_huge_training_does_not_overflow() {
        let rules = rules();
        let json = r#"{
            "attributes": {"Reflexe": "2D"},
            "skills": [{
                "name": "Reiten",
                "attribute": "Reflexe",
                "bonusDice": 2000000000,
                "bonusSteps": 4294967295,
                "specializations": [{"name": "Galopp", "blibs": 4294967295}]
            }]
        }"#;
        let character = Character::from_json(json).unwrap();
        let resolver = SkillResolver::new(&rules, &character, &[]);
        let skill = &character.skills[0];
        assert_eq!(resolver.skill(skill).value.count, u32::MAX);
        assert_eq!(
            resolver.specialization_value(skill, &skill.specializations[0]).count,
            u32::MAX
        );
    }

    #[test]
    fn resolver_missing_attribute_uses_fallback() {
        let rules = rules();
        let character = Character::new("Georg");
        let resolver = SkillResolver::new(&rules, &character, &[]);
        let resolved = resolver.skill(&Skill::new("Heben", "Stärke").with_bonus_dice(1));
        assert_eq!(resolved.attribute_value, DiceValue::dice(1));
        assert_eq!(resolved.value, DiceValue::dice(2));
    }

    #[test]
    fn resolver_reads_custom_attribute_keys() {
        let rules = rules();
        let mut character = Character::new("Georg");
        character
            .attributes
            .insert("Glück".to_string(), "3D".to_string());
        let resolver = SkillResolver::new(&rules, &character, &[]);
        assert_eq!(resolver.attribute_value("Glück"), DiceValue::dice(3));
        assert_eq!(resolver.attribute_value("Pech"), DiceValue::dice(1));
    }
}
