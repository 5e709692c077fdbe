//! Loading the inputs of one recomputation from the app's JSON.

use fc_core::{Character, CharacterCreationSettings, InjuryRecord};

use crate::budget::{CharacterBudget, compute_character_budget};
use crate::error::MechResult;
use crate::rules::RulesConfig;
use crate::sheet::CharacterSheet;
use crate::validate::{ValidationIssue, validate_character};

/// A character together with the campaign settings and injury records it is
/// computed against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// The character.
    pub character: Character,
    /// Campaign creation settings.
    pub settings: CharacterCreationSettings,
    /// Injury records; only those of this character count.
    pub injuries: Vec<InjuryRecord>,
}

impl Snapshot {
    /// A snapshot with default settings and no injuries.
    pub fn new(character: Character) -> Self {
        Self {
            character,
            ..Self::default()
        }
    }

    /// Decode the character from JSON.
    pub fn from_json(character: &str) -> MechResult<Self> {
        Ok(Self::new(Character::from_json(character)?))
    }

    /// Replace the settings with ones decoded from JSON.
    pub fn with_settings_json(mut self, json: &str) -> MechResult<Self> {
        self.settings = CharacterCreationSettings::from_json(json)?;
        Ok(self)
    }

    /// Replace the injuries with a JSON array of records.
    pub fn with_injuries_json(mut self, json: &str) -> MechResult<Self> {
        self.injuries = InjuryRecord::list_from_json(json)?;
        Ok(self)
    }

    /// The character's sheet.
    pub fn sheet(&self, rules: &RulesConfig) -> CharacterSheet {
        CharacterSheet::build(&self.character, &self.settings, rules, &self.injuries)
    }

    /// The character's blip budget.
    pub fn budget(&self, rules: &RulesConfig) -> CharacterBudget {
        compute_character_budget(&self.character, &self.settings, rules)
    }

    /// Creation-limit issues.
    pub fn validate(&self, rules: &RulesConfig) -> Vec<ValidationIssue> {
        validate_character(&self.character, &self.settings, rules)
    }
}
