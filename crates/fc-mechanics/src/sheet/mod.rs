//! Character sheets: every attribute and skill with its current rating.
//!
//! A sheet is built from a character snapshot and the rules. It offers the
//! whole default catalog, so untrained skills appear at their attribute's
//! rating next to the ones the character has trained.

pub mod row;

pub use row::{AttributeRow, SkillGroup, SkillRow, SpecializationRow};

use fc_core::{
    Attribute, Character, CharacterCreationSettings, InjuryRecord, Skill, display_skill_name,
};
use serde::{Deserialize, Serialize};

use crate::budget::{CharacterBudget, compute_character_budget};
use crate::cost::attribute_cost;
use crate::dice::DiceValue;
use crate::resolver::SkillResolver;
use crate::rules::RulesConfig;

/// A character's computed sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    /// Character name.
    pub name: String,
    /// Owning player.
    pub player_name: String,
    /// The seven attributes in sheet order.
    pub attributes: Vec<AttributeRow>,
    /// Skills grouped by attribute. Skills owned by an attribute outside the
    /// seven form their own groups at the end.
    pub skill_groups: Vec<SkillGroup>,
    /// Blip budget.
    pub budget: CharacterBudget,
}

impl CharacterSheet {
    /// Compute the sheet for one character.
    pub fn build(
        character: &Character,
        settings: &CharacterCreationSettings,
        rules: &RulesConfig,
        injuries: &[InjuryRecord],
    ) -> Self {
        let attributes = Attribute::ALL
            .into_iter()
            .map(|attribute| {
                let value = character
                    .attribute_notation(attribute)
                    .map(DiceValue::parse)
                    .unwrap_or_else(|| rules.baseline(attribute));
                AttributeRow {
                    name: attribute.name().to_string(),
                    value: value.canonical(),
                    cost: attribute_cost(rules, attribute, value),
                }
            })
            .collect();

        let resolver = SkillResolver::new(rules, character, injuries);
        let skills = rules.merged_skills(&character.skills);

        let mut skill_groups: Vec<SkillGroup> = Attribute::ALL
            .into_iter()
            .map(|attribute| SkillGroup {
                attribute: attribute.name().to_string(),
                skills: Vec::new(),
            })
            .collect();

        let mut ordered: Vec<&Skill> = skills.iter().collect();
        // Stable sort keeps stored order among custom skills.
        ordered.sort_by_key(|s| catalog_position(rules, s));

        for skill in ordered {
            let row = skill_row(&resolver, skill);
            let group = match skill.attribute_kind() {
                Some(attribute) => attribute.name().to_string(),
                None => skill.attribute.clone(),
            };
            match skill_groups.iter_mut().find(|g| g.attribute == group) {
                Some(existing) => existing.skills.push(row),
                None => skill_groups.push(SkillGroup {
                    attribute: group,
                    skills: vec![row],
                }),
            }
        }

        Self {
            name: character.name.clone(),
            player_name: character.player_name.clone(),
            attributes,
            skill_groups,
            budget: compute_character_budget(character, settings, rules),
        }
    }

    /// Find a skill row by name, ignoring case and umlaut spelling.
    pub fn skill(&self, name: &str) -> Option<&SkillRow> {
        let key = fc_core::normalize_skill_key(name);
        self.skill_groups
            .iter()
            .flat_map(|g| &g.skills)
            .find(|row| fc_core::normalize_skill_key(&row.name) == key)
    }
}

fn catalog_position(rules: &RulesConfig, skill: &Skill) -> usize {
    let key = skill.key();
    rules
        .skill_catalog
        .iter()
        .position(|entry| fc_core::NormalizedSkillKey::new(&entry.name) == key)
        .unwrap_or(usize::MAX)
}

fn skill_row(resolver: &SkillResolver<'_>, skill: &Skill) -> SkillRow {
    let resolved = resolver.skill(skill);
    SkillRow {
        name: display_skill_name(&skill.name).to_string(),
        value: resolved.value,
        learned: skill.is_learned(),
        weakened_active: resolved.weakened_active,
        modifier_steps: resolved.equipment_bonus - resolved.injury_penalty,
        specializations: skill
            .specializations
            .iter()
            .map(|spec| SpecializationRow {
                name: spec.name.clone(),
                blips: spec.blips,
                value: resolver.specialization_value(skill, spec),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_core::{InjurySlot, InventoryItem, Specialization};

    fn build(character: &Character, injuries: &[InjuryRecord]) -> CharacterSheet {
        CharacterSheet::build(
            character,
            &CharacterCreationSettings::default(),
            &RulesConfig::default(),
            injuries,
        )
    }

    #[test]
    fn empty_character_shows_baselines_and_catalog() {
        let sheet = build(&Character::new("Georg"), &[]);
        assert_eq!(sheet.attributes.len(), 7);
        assert_eq!(sheet.attributes[0].value, DiceValue::dice(2));
        assert_eq!(sheet.attributes[6].name, "Magie");
        assert_eq!(sheet.attributes[6].value, DiceValue::ZERO);
        assert_eq!(sheet.skill_groups.len(), 7);
        let total: usize = sheet.skill_groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(total, 33);
        assert_eq!(sheet.budget.used_blips, 0);
    }

    #[test]
    fn catalog_order_within_groups() {
        let character = Character::new("Georg")
            .with_skill(Skill::new("Reiten", "Reflexe").with_bonus_dice(1))
            .with_skill(Skill::new("Fechten", "Reflexe").with_bonus_dice(1));
        let sheet = build(&character, &[]);
        let reflexe = &sheet.skill_groups[0];
        assert_eq!(reflexe.attribute, "Reflexe");
        let names: Vec<&str> = reflexe.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names[0], "unbewaffneter Kampf");
        assert_eq!(names[5], "Reiten");
        assert_eq!(names.last(), Some(&"Fechten"));
    }

    #[test]
    fn skill_values_and_specializations() {
        let character = Character::new("Georg")
            .with_attribute(Attribute::Reflexe, "3D")
            .with_skill(
                Skill::new("bewaffneter Nahkampf", "Reflexe")
                    .with_bonus_dice(1)
                    .with_specialization(
                        Specialization::new("Schwert", "bewaffneter Nahkampf").with_blips(2),
                    ),
            );
        let sheet = build(&character, &[]);
        let row = sheet.skill("Bewaffneter Nahkampf").unwrap();
        assert_eq!(row.value, DiceValue::new(4, 2));
        assert!(row.learned);
        assert_eq!(row.specializations[0].value, DiceValue::new(4, 2));
        assert_eq!(sheet.skill("Reiten").unwrap().value, DiceValue::dice(3));
    }

    #[test]
    fn weakened_catalog_skill() {
        let character = Character::new("Georg")
            .with_attribute(Attribute::Magie, "2D")
            .with_skill(Skill::new("magische Kraft", "Magie").weakened());
        let sheet = build(&character, &[]);
        let row = sheet.skill("magische Kraft").unwrap();
        assert!(row.weakened_active);
        assert_eq!(row.value, DiceValue::ZERO);
    }

    #[test]
    fn modifiers_show_on_rows() {
        let character = Character::new("Georg")
            .with_id("c1")
            .with_attribute(Attribute::Reflexe, "2D")
            .with_item(InventoryItem::new("Seil").with_stat("Klettern", 1));
        let injuries = vec![InjuryRecord::new("c1", InjurySlot::Legs, 3)];
        let sheet = build(&character, &injuries);
        let row = sheet.skill("Klettern").unwrap();
        assert_eq!(row.modifier_steps, -2);
        assert_eq!(row.value, DiceValue::new(1, 1));
    }

    #[test]
    fn unknown_attribute_gets_own_group() {
        let character = Character::new("Georg").with_skill(Skill::new("Fliegen", "Flügel"));
        let sheet = build(&character, &[]);
        assert_eq!(sheet.skill_groups.len(), 8);
        let last = &sheet.skill_groups[7];
        assert_eq!(last.attribute, "Flügel");
        // Missing attribute falls back to 1D.
        assert_eq!(last.skills[0].value, DiceValue::dice(1));
    }

    #[test]
    fn attribute_cost_on_rows() {
        let character = Character::new("Georg").with_attribute(Attribute::Wissen, "3D+1");
        let sheet = build(&character, &[]);
        let wissen = sheet.attributes.iter().find(|a| a.name == "Wissen").unwrap();
        assert_eq!(wissen.cost, 5);
        assert_eq!(sheet.budget.used_blips, 5);
    }
}
