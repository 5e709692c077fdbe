use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::normalize_skill_key;

/// One of the seven attributes every character has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    /// Reflexes: melee, acrobatics, riding, stealth.
    Reflexe,
    /// Coordination: ranged combat, steering, sleight of hand.
    Koordination,
    /// Strength: endurance, lifting, running, swimming.
    #[serde(rename = "Stärke")]
    Staerke,
    /// Knowledge: schooling, crafts, navigation, healing.
    Wissen,
    /// Perception: survival, fine arts, games.
    Wahrnehmung,
    /// Presence: charm, intimidation, deception, command.
    Ausstrahlung,
    /// Magic. The only attribute that starts untrained.
    Magie,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 7] = [
        Self::Reflexe,
        Self::Koordination,
        Self::Staerke,
        Self::Wissen,
        Self::Wahrnehmung,
        Self::Ausstrahlung,
        Self::Magie,
    ];

    /// The display name as stored in character snapshots.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reflexe => "Reflexe",
            Self::Koordination => "Koordination",
            Self::Staerke => "Stärke",
            Self::Wissen => "Wissen",
            Self::Wahrnehmung => "Wahrnehmung",
            Self::Ausstrahlung => "Ausstrahlung",
            Self::Magie => "Magie",
        }
    }

    /// Look up an attribute by name, ignoring case and umlaut spelling.
    pub fn parse(name: &str) -> Option<Self> {
        let key = normalize_skill_key(name);
        Self::ALL
            .into_iter()
            .find(|a| normalize_skill_key(a.name()) == key)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
