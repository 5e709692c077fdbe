//! Core types for the Fallcrest campaign tools: characters, attributes,
//! skills, inventory items, and injury records.
//!
//! This crate mirrors the JSON snapshots the campaign app stores. It holds
//! no rules logic; dice notation, costs, and skill values are computed by
//! `fc-mechanics` from these types.

/// The seven fixed attributes of the D6 system.
pub mod attribute;
/// Character snapshots and inventory items.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Injury records and body slots.
pub mod injury;
/// Skill-name normalization.
pub mod key;
/// Global character-creation settings.
pub mod settings;
/// Skills and specializations.
pub mod skill;

/// Re-export attribute types.
pub use attribute::Attribute;
/// Re-export character types.
pub use character::{Character, InventoryItem};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export injury types.
pub use injury::{InjuryRecord, InjurySlot};
/// Re-export key normalization.
pub use key::{NormalizedSkillKey, normalize_skill_key};
/// Re-export settings.
pub use settings::CharacterCreationSettings;
/// Re-export skill types.
pub use skill::{Skill, Specialization, display_skill_name};
