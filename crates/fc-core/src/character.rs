use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::error::CoreResult;
use crate::key::normalize_skill_key;
use crate::skill::Skill;

/// An item in a character's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    /// Stable identifier assigned by the app.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Stack size, if tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Shop category (weapon, armor, equipment, other).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Step bonuses keyed by free-text skill name.
    pub stats: BTreeMap<String, i32>,
}

impl InventoryItem {
    /// Create an item without stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a step bonus for a skill.
    pub fn with_stat(mut self, skill: impl Into<String>, bonus: i32) -> Self {
        self.stats.insert(skill.into(), bonus);
        self
    }
}

/// A snapshot of a character as stored by the campaign app.
///
/// Attribute values stay in their stored notation form; parsing them is
/// the rules engine's job so that corrupt values degrade gracefully there.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    /// Stable identifier assigned by the app.
    pub id: String,
    /// Character name.
    pub name: String,
    /// Name of the owning player.
    pub player_name: String,
    /// Attribute notation keyed by attribute name (e.g. "Stärke": "2D+1").
    pub attributes: BTreeMap<String, String>,
    /// Skills the character has taken.
    pub skills: Vec<Skill>,
    /// Carried items.
    pub inventory: Vec<InventoryItem>,
    /// Blips awarded by the GM on top of the starting budget.
    pub earned_blips: u32,
    /// Non-player character flag.
    #[serde(rename = "isNPC")]
    pub is_npc: bool,
}

impl Character {
    /// Create an empty character.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Decode a character from the app's JSON form.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the stored identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Store an attribute value in notation form.
    pub fn with_attribute(mut self, attribute: Attribute, notation: impl Into<String>) -> Self {
        self.attributes
            .insert(attribute.name().to_string(), notation.into());
        self
    }

    /// Add a skill.
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Add an inventory item.
    pub fn with_item(mut self, item: InventoryItem) -> Self {
        self.inventory.push(item);
        self
    }

    /// Set the GM-awarded blips.
    pub fn with_earned_blips(mut self, blips: u32) -> Self {
        self.earned_blips = blips;
        self
    }

    /// The stored notation for an attribute, if present.
    ///
    /// Tries the exact display name first, then any key that normalizes to
    /// the same spelling (so `"Staerke"` finds Stärke).
    pub fn attribute_notation(&self, attribute: Attribute) -> Option<&str> {
        if let Some(value) = self.attributes.get(attribute.name()) {
            return Some(value);
        }
        let wanted = normalize_skill_key(attribute.name());
        self.attributes
            .iter()
            .find(|(k, _)| normalize_skill_key(k) == wanted)
            .map(|(_, v)| v.as_str())
    }

    /// The stored notation for an attribute given by free-text name.
    pub fn attribute_notation_by_name(&self, name: &str) -> Option<&str> {
        match Attribute::parse(name) {
            Some(attr) => self.attribute_notation(attr),
            None => self.attributes.get(name).map(String::as_str),
        }
    }
}
