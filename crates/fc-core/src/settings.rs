//! Global character-creation settings, set by the GM for the whole campaign.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Limits and budget applied when creating or advancing characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterCreationSettings {
    /// Whole attribute dice that may be bought across all attributes.
    pub max_attribute_points: u32,
    /// Whole attribute dice that may be bought for a single attribute.
    pub max_attribute_dice_per_attribute: u32,
    /// Whole skill dice that may be bought across all skills.
    pub max_skill_points: u32,
    /// Whole skill dice that may be bought for a single skill.
    pub max_skill_dice_per_skill: u32,
    /// Blips that may be spent on specializations overall.
    pub max_blibs: u32,
    /// Blips that may be put into one specialization.
    pub max_blibs_per_specialization: u32,
    /// Blip budget every new character starts with.
    pub default_start_blips: u32,
}

impl Default for CharacterCreationSettings {
    fn default() -> Self {
        Self {
            max_attribute_points: 7,
            max_attribute_dice_per_attribute: 2,
            max_skill_points: 8,
            max_skill_dice_per_skill: 2,
            max_blibs: 4,
            max_blibs_per_specialization: 2,
            default_start_blips: 67,
        }
    }
}

impl CharacterCreationSettings {
    /// Decode settings from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the starting blip budget.
    pub fn with_default_start_blips(mut self, blips: u32) -> Self {
        self.default_start_blips = blips;
        self
    }

    /// Set the per-attribute dice cap.
    pub fn with_max_attribute_dice_per_attribute(mut self, dice: u32) -> Self {
        self.max_attribute_dice_per_attribute = dice;
        self
    }

    /// Set the per-skill dice cap.
    pub fn with_max_skill_dice_per_skill(mut self, dice: u32) -> Self {
        self.max_skill_dice_per_skill = dice;
        self
    }

    /// Set the per-specialization blip cap.
    pub fn with_max_blibs_per_specialization(mut self, blips: u32) -> Self {
        self.max_blibs_per_specialization = blips;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let s = CharacterCreationSettings::default();
        assert_eq!(s.max_attribute_points, 7);
        assert_eq!(s.max_skill_points, 8);
        assert_eq!(s.max_blibs, 4);
        assert_eq!(s.max_attribute_dice_per_attribute, 2);
        assert_eq!(s.max_skill_dice_per_skill, 2);
        assert_eq!(s.max_blibs_per_specialization, 2);
        assert_eq!(s.default_start_blips, 67);
    }

    #[test]
    fn builder_methods() {
        let s = CharacterCreationSettings::default()
            .with_default_start_blips(80)
            .with_max_skill_dice_per_skill(3);
        assert_eq!(s.default_start_blips, 80);
        assert_eq!(s.max_skill_dice_per_skill, 3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = CharacterCreationSettings::from_json(r#"{"defaultStartBlips": 90}"#).unwrap();
        assert_eq!(s.default_start_blips, 90);
        assert_eq!(s.max_attribute_points, 7);
    }
}
