use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::key::NormalizedSkillKey;

/// A narrower sub-skill that adds steps on top of its parent skill.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Specialization {
    /// Stable identifier assigned by the app.
    pub id: String,
    /// Display name (e.g. "Schwert").
    pub name: String,
    /// Name of the parent skill.
    pub skill_name: String,
    /// Steps bought for this specialization. Stored as `blibs`.
    #[serde(rename = "blibs")]
    pub blips: u32,
}

impl Specialization {
    /// Create a specialization with no blips.
    pub fn new(name: impl Into<String>, skill_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skill_name: skill_name.into(),
            ..Self::default()
        }
    }

    /// Set the blips bought for this specialization.
    pub fn with_blips(mut self, blips: u32) -> Self {
        self.blips = blips;
        self
    }
}

/// A skill a character has taken, trained on top of its owning attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    /// Stable identifier assigned by the app.
    pub id: String,
    /// Display name (e.g. "Schlösser öffnen").
    pub name: String,
    /// Name of the owning attribute as stored by the app.
    pub attribute: String,
    /// Whole trained dice added atop the attribute.
    pub bonus_dice: u32,
    /// Trained steps below a whole die (0-2 in practice).
    pub bonus_steps: u32,
    /// Specializations taken under this skill.
    pub specializations: Vec<Specialization>,
    /// Weakened skills cannot be used at full attribute rating until learned.
    pub is_weakened: bool,
    /// A skill the player added that is not in the default catalog.
    pub is_custom: bool,
    /// Hover text shown next to the skill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Skill {
    /// Create an untrained skill owned by `attribute`.
    pub fn new(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            ..Self::default()
        }
    }

    /// Set the whole trained dice.
    pub fn with_bonus_dice(mut self, dice: u32) -> Self {
        self.bonus_dice = dice;
        self
    }

    /// Set the trained steps below a whole die.
    pub fn with_bonus_steps(mut self, steps: u32) -> Self {
        self.bonus_steps = steps;
        self
    }

    /// Add a specialization.
    pub fn with_specialization(mut self, spec: Specialization) -> Self {
        self.specializations.push(spec);
        self
    }

    /// Mark the skill as weakened.
    pub fn weakened(mut self) -> Self {
        self.is_weakened = true;
        self
    }

    /// True if the skill has any training: bonus dice, bonus steps, or
    /// specialization blips.
    pub fn is_learned(&self) -> bool {
        self.bonus_dice > 0
            || self.bonus_steps > 0
            || self.specializations.iter().any(|s| s.blips > 0)
    }

    /// Steps bought for the skill itself, excluding specializations.
    pub fn training_steps(&self) -> u64 {
        u64::from(self.bonus_dice) * 3 + u64::from(self.bonus_steps)
    }

    /// Sum of blips across all specializations.
    pub fn specialization_blips(&self) -> u64 {
        self.specializations.iter().map(|s| u64::from(s.blips)).sum()
    }

    /// The owning attribute, if it names one of the seven.
    pub fn attribute_kind(&self) -> Option<Attribute> {
        Attribute::parse(&self.attribute)
    }

    /// The normalized lookup key for this skill.
    pub fn key(&self) -> NormalizedSkillKey {
        NormalizedSkillKey::new(&self.name)
    }
}

/// Strip a list-numbering prefix such as `"3) Reiten"` or `"12. Heben"`.
///
/// Names without a prefix are returned trimmed.
pub fn display_skill_name(name: &str) -> &str {
    let trimmed = name.trim();
    let digits = trimmed.len() - trimmed.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return trimmed;
    }
    let rest = &trimmed[digits..];
    let after_sep = rest.trim_start_matches([')', '.', ' ', '-']);
    if after_sep.len() == rest.len() || after_sep.is_empty() {
        return trimmed;
    }
    after_sep.trim()
}
