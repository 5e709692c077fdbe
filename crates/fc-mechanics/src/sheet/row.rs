//! Rows of a rendered character sheet.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceValue, Steps};

/// One attribute line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRow {
    /// Attribute name.
    pub name: String,
    /// Current rating, canonical. Absent attributes show their baseline.
    pub value: DiceValue,
    /// Blips spent above the baseline.
    pub cost: u64,
}

/// One specialization line under a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecializationRow {
    /// Specialization name.
    pub name: String,
    /// Blips bought.
    pub blips: u32,
    /// Rating when rolling for this specialization.
    pub value: DiceValue,
}

/// One skill line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRow {
    /// Skill name without list numbering.
    pub name: String,
    /// Final rating.
    pub value: DiceValue,
    /// The skill has training.
    pub learned: bool,
    /// The weakened-untrained penalty is in effect.
    pub weakened_active: bool,
    /// Net step change from equipment and injuries.
    pub modifier_steps: Steps,
    /// Specializations with their own ratings.
    pub specializations: Vec<SpecializationRow>,
}

/// The skills owned by one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    /// Owning attribute name.
    pub attribute: String,
    /// Skills in catalog order, custom skills last.
    pub skills: Vec<SkillRow>,
}
