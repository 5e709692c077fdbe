//! Equipment bonuses and injury penalties as step deltas.
//!
//! Both tables are built once per recomputation and looked up by
//! normalized skill key, so resolving every skill on a sheet stays linear
//! in the number of skills.

use std::collections::{BTreeMap, HashMap};

use fc_core::{InjuryRecord, InjurySlot, InventoryItem, NormalizedSkillKey};

use crate::dice::Steps;
use crate::rules::RulesConfig;

/// Step bonuses from carried items, keyed by normalized skill name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentBonuses {
    by_skill: HashMap<NormalizedSkillKey, Steps>,
}

impl EquipmentBonuses {
    /// Sum every item's stat map into one table.
    pub fn from_inventory(items: &[InventoryItem]) -> Self {
        let mut by_skill: HashMap<NormalizedSkillKey, Steps> = HashMap::new();
        for item in items {
            for (skill, bonus) in &item.stats {
                *by_skill.entry(NormalizedSkillKey::new(skill)).or_default() +=
                    Steps::from(*bonus);
            }
        }
        Self { by_skill }
    }

    /// Bonus for a skill key; 0 if no item mentions it.
    pub fn bonus_for(&self, key: &NormalizedSkillKey) -> Steps {
        self.by_skill.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct skills with a bonus.
    pub fn len(&self) -> usize {
        self.by_skill.len()
    }

    /// True if no item grants any bonus.
    pub fn is_empty(&self) -> bool {
        self.by_skill.is_empty()
    }
}

/// Step penalties from a character's active injuries.
#[derive(Debug, Clone)]
pub struct InjuryPenalties<'a> {
    rules: &'a RulesConfig,
    by_slot: BTreeMap<InjurySlot, Steps>,
}

impl<'a> InjuryPenalties<'a> {
    /// No injuries.
    pub fn none(rules: &'a RulesConfig) -> Self {
        Self {
            rules,
            by_slot: BTreeMap::new(),
        }
    }

    /// Collect the injuries belonging to `character_id`.
    ///
    /// Severities are summed per slot; negative severities count as 0.
    pub fn for_character(
        rules: &'a RulesConfig,
        injuries: &[InjuryRecord],
        character_id: &str,
    ) -> Self {
        let mut by_slot: BTreeMap<InjurySlot, Steps> = BTreeMap::new();
        for injury in injuries.iter().filter(|i| i.character_id == character_id) {
            let severity = injury.current_severity;
            if severity != 1 && severity != 3 {
                tracing::warn!(
                    injury = %injury.id,
                    severity,
                    "unexpected injury severity, using raw value"
                );
            }
            *by_slot.entry(injury.slot).or_default() += Steps::from(severity.max(0));
        }
        Self { rules, by_slot }
    }

    /// Penalty for a skill: the sum over slots whose keywords occur in the
    /// skill's normalized name.
    pub fn penalty_for(&self, key: &NormalizedSkillKey) -> Steps {
        self.by_slot
            .iter()
            .filter(|(slot, _)| {
                self.rules
                    .injury_keywords(**slot)
                    .iter()
                    .any(|word| key.contains(word))
            })
            .map(|(_, severity)| severity)
            .sum()
    }

    /// True if the character has no injuries.
    pub fn is_empty(&self) -> bool {
        self.by_slot.is_empty()
    }
}

/// Everything that shifts a skill's steps after training.
#[derive(Debug, Clone)]
pub struct SkillModifiers<'a> {
    /// Bonuses from carried items.
    pub equipment: EquipmentBonuses,
    /// Penalties from active injuries.
    pub injuries: InjuryPenalties<'a>,
}

impl<'a> SkillModifiers<'a> {
    /// No equipment, no injuries.
    pub fn none(rules: &'a RulesConfig) -> Self {
        Self {
            equipment: EquipmentBonuses::default(),
            injuries: InjuryPenalties::none(rules),
        }
    }

    /// Build both tables for one character.
    pub fn for_character(
        rules: &'a RulesConfig,
        character: &fc_core::Character,
        injuries: &[InjuryRecord],
    ) -> Self {
        Self {
            equipment: EquipmentBonuses::from_inventory(&character.inventory),
            injuries: InjuryPenalties::for_character(rules, injuries, &character.id),
        }
    }

    /// Equipment bonus for a skill.
    pub fn equipment_bonus(&self, key: &NormalizedSkillKey) -> Steps {
        self.equipment.bonus_for(key)
    }

    /// Injury penalty for a skill, as a positive number.
    pub fn injury_penalty(&self, key: &NormalizedSkillKey) -> Steps {
        self.injuries.penalty_for(key)
    }
}
