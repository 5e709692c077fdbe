//! Rules configuration: the read-only tables the engine computes against.
//!
//! A [`RulesConfig`] holds the attribute baselines, the default skill
//! catalog, the injury slot keywords, and the weakened-skill penalty. It is
//! built once (from [`preset::fallcrest`] or a JSON file via
//! [`RulesConfig::from_json`]) and passed by reference into every
//! computation, so no call site carries its own copy of these tables.

pub mod preset;

use std::collections::{BTreeMap, HashSet};

use fc_core::{Attribute, InjurySlot, NormalizedSkillKey, Skill, normalize_skill_key};
use serde::{Deserialize, Serialize};

use crate::dice::DiceValue;
use crate::error::{MechError, MechResult};

/// A skill in the default catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSkill {
    /// Display name.
    pub name: String,
    /// Owning attribute.
    pub attribute: Attribute,
}

/// The complete rules configuration for a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesConfig {
    /// Name of the rules preset (e.g. "fallcrest").
    pub name: String,
    /// Starting rating of each attribute; costs are charged above it.
    pub baselines: BTreeMap<Attribute, DiceValue>,
    /// Skills every character sheet offers.
    pub skill_catalog: Vec<CatalogSkill>,
    /// Normalized skill-name fragments hampered by an injury in each slot.
    pub injury_keywords: BTreeMap<InjurySlot, Vec<String>>,
    /// Dice removed from the attribute when a weakened skill is untrained.
    pub weakened_penalty_dice: u32,
    /// Rating used when a character has no value for a skill's attribute.
    pub missing_attribute_value: DiceValue,
    /// Hard cap on blips in one specialization, above any GM setting.
    pub max_specialization_blips: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        preset::fallcrest()
    }
}

impl RulesConfig {
    /// Load rules from JSON. Missing fields fall back to the Fallcrest preset.
    ///
    /// Injury keywords are normalized on load.
    pub fn from_json(json: &str) -> MechResult<Self> {
        let mut rules: Self = serde_json::from_str(json)?;
        for words in rules.injury_keywords.values_mut() {
            for word in words.iter_mut() {
                *word = normalize_skill_key(word);
            }
        }
        rules.validate()?;
        Ok(rules)
    }

    /// Check the tables for mistakes that would silently skew results.
    pub fn validate(&self) -> MechResult<()> {
        for (slot, words) in &self.injury_keywords {
            if words.iter().any(|w| w.is_empty()) {
                return Err(MechError::InvalidConfig(format!(
                    "empty injury keyword for slot '{slot}'"
                )));
            }
        }

        let mut seen = HashSet::new();
        for skill in &self.skill_catalog {
            if skill.name.trim().is_empty() {
                return Err(MechError::InvalidConfig(
                    "catalog skill with empty name".to_string(),
                ));
            }
            if !seen.insert(NormalizedSkillKey::new(&skill.name)) {
                return Err(MechError::InvalidConfig(format!(
                    "duplicate catalog skill: {}",
                    skill.name
                )));
            }
        }

        for (attribute, value) in &self.baselines {
            if !value.is_canonical() {
                return Err(MechError::InvalidConfig(format!(
                    "baseline for {attribute} is not canonical: {}D{:+}",
                    value.count, value.modifier
                )));
            }
        }

        Ok(())
    }

    /// Set the weakened-skill penalty in dice.
    pub fn with_weakened_penalty_dice(mut self, dice: u32) -> Self {
        self.weakened_penalty_dice = dice;
        self
    }

    /// Override one attribute's baseline.
    pub fn with_baseline(mut self, attribute: Attribute, value: DiceValue) -> Self {
        self.baselines.insert(attribute, value.canonical());
        self
    }

    /// The baseline rating of an attribute.
    ///
    /// Tables loaded from JSON may omit attributes; those use the Fallcrest
    /// baseline.
    pub fn baseline(&self, attribute: Attribute) -> DiceValue {
        self.baselines
            .get(&attribute)
            .copied()
            .unwrap_or_else(|| preset::default_baseline(attribute))
    }

    /// Catalog skills owned by an attribute, in catalog order.
    pub fn skills_for(&self, attribute: Attribute) -> impl Iterator<Item = &CatalogSkill> {
        self.skill_catalog
            .iter()
            .filter(move |s| s.attribute == attribute)
    }

    /// Find a catalog skill by name, ignoring case and umlaut spelling.
    pub fn catalog_entry(&self, name: &str) -> Option<&CatalogSkill> {
        let key = NormalizedSkillKey::new(name);
        self.skill_catalog
            .iter()
            .find(|s| NormalizedSkillKey::new(&s.name) == key)
    }

    /// Keywords for an injury slot. Unknown slots have none.
    pub fn injury_keywords(&self, slot: InjurySlot) -> &[String] {
        self.injury_keywords
            .get(&slot)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Untrained skills for the whole catalog, as the creation sheet offers.
    pub fn default_skills(&self) -> Vec<Skill> {
        self.skill_catalog
            .iter()
            .map(|s| Skill::new(s.name.clone(), s.attribute.name()))
            .collect()
    }

    /// The character's skills plus every catalog skill they have not taken.
    ///
    /// Skills are matched by normalized name, so a stored "Schloesser
    /// oeffnen" counts as the catalog's "Schlösser öffnen". Taken skills
    /// come first in their stored order.
    pub fn merged_skills(&self, taken: &[Skill]) -> Vec<Skill> {
        let have: HashSet<NormalizedSkillKey> = taken.iter().map(Skill::key).collect();
        let mut merged = taken.to_vec();
        merged.extend(
            self.default_skills()
                .into_iter()
                .filter(|s| !have.contains(&s.key())),
        );
        merged
    }
}
