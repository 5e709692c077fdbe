use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// The body slot an injury occupies. Each slot hampers a set of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjurySlot {
    /// Head.
    Head,
    /// Neck.
    Neck,
    /// Ears.
    Ears,
    /// Torso.
    Torso,
    /// Legs.
    Legs,
    /// Feet.
    Feet,
    /// Back.
    Back,
    /// Left-hand fingers.
    FingerL,
    /// Right-hand fingers.
    FingerR,
    /// Wrists.
    Wrists,
    /// Ankles.
    Ankles,
    /// Main hand.
    MainHand,
    /// Off hand.
    OffHand,
    /// Belt area.
    Belt,
    /// Mental trauma.
    Psyche,
    /// A slot name this version does not know. Hampers nothing.
    #[serde(other)]
    Other,
}

impl InjurySlot {
    /// All known slots.
    pub const ALL: [InjurySlot; 15] = [
        Self::Head,
        Self::Neck,
        Self::Ears,
        Self::Torso,
        Self::Legs,
        Self::Feet,
        Self::Back,
        Self::FingerL,
        Self::FingerR,
        Self::Wrists,
        Self::Ankles,
        Self::MainHand,
        Self::OffHand,
        Self::Belt,
        Self::Psyche,
    ];

    /// The stored slot name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::Ears => "ears",
            Self::Torso => "torso",
            Self::Legs => "legs",
            Self::Feet => "feet",
            Self::Back => "back",
            Self::FingerL => "finger_l",
            Self::FingerR => "finger_r",
            Self::Wrists => "wrists",
            Self::Ankles => "ankles",
            Self::MainHand => "main_hand",
            Self::OffHand => "off_hand",
            Self::Belt => "belt",
            Self::Psyche => "psyche",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for InjurySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An active injury on a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryRecord {
    /// Stable identifier assigned by the app.
    #[serde(default)]
    pub id: String,
    /// The injured character.
    pub character_id: String,
    /// Where the injury sits.
    pub slot: InjurySlot,
    /// The injury template this record was created from.
    #[serde(default)]
    pub template_id: String,
    /// Current severity; 1 (light) and 3 (heavy) are the expected values.
    #[serde(default)]
    pub current_severity: i32,
}

impl InjuryRecord {
    /// Create an injury record.
    pub fn new(character_id: impl Into<String>, slot: InjurySlot, severity: i32) -> Self {
        Self {
            id: String::new(),
            character_id: character_id.into(),
            slot,
            template_id: String::new(),
            current_severity: severity,
        }
    }

    /// Decode a JSON array of injury records.
    pub fn list_from_json(json: &str) -> CoreResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names_round_trip_through_serde() {
        for slot in InjurySlot::ALL {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.name()));
            let back: InjurySlot = serde_json::from_str(&json).unwrap();
            assert_eq!(back, slot);
        }
    }

    #[test]
    fn unknown_slot_decodes_as_other() {
        let slot: InjurySlot = serde_json::from_str("\"tail\"").unwrap();
        assert_eq!(slot, InjurySlot::Other);
    }

    #[test]
    fn record_from_json() {
        let json = r#"{"id": "x", "characterId": "c1", "slot": "finger_l", "templateId": "t3", "currentSeverity": 3}"#;
        let record: InjuryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.slot, InjurySlot::FingerL);
        assert_eq!(record.current_severity, 3);
        assert_eq!(record.character_id, "c1");
    }

    #[test]
    fn list_from_json() {
        let json = r#"[
            {"characterId": "c1", "slot": "legs", "currentSeverity": 1},
            {"characterId": "c2", "slot": "head", "currentSeverity": 3}
        ]"#;
        let records = InjuryRecord::list_from_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].slot, InjurySlot::Head);
        assert!(InjuryRecord::list_from_json("{}").is_err());
    }
}
