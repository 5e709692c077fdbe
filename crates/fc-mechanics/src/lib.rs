//! D6 dice-pool rules engine for the Fallcrest campaign tools.
//!
//! Provides dice notation and the step scale, the blip cost curve, skill
//! value resolution with equipment and injury modifiers, blip budgets,
//! creation-limit checks, and character sheets. All constant tables live in
//! a [`RulesConfig`]; the shipped Fallcrest rules come from
//! [`rules::preset::fallcrest`].

pub mod budget;
pub mod cost;
pub mod dice;
pub mod error;
pub mod modifiers;
pub mod resolver;
pub mod rules;
pub mod sheet;
pub mod snapshot;
pub mod validate;

pub use budget::{BudgetLine, BudgetLineKind, CharacterBudget, budget_breakdown, compute_character_budget};
pub use cost::{MAX_PRICED_STEPS, additional_cost, cumulative_cost, unit_cost};
pub use dice::{
    D6Roll, DiceValue, MAX_DICE, MAX_STEPS, STEPS_PER_DIE, Steps, d6_range, from_steps, roll_d6,
    to_steps,
};
pub use error::{MechError, MechResult};
pub use modifiers::{EquipmentBonuses, InjuryPenalties, SkillModifiers};
pub use resolver::{
    ResolvedSkill, SkillInput, SkillResolver, calculate_skill_value, resolve_skill_value,
};
pub use rules::{CatalogSkill, RulesConfig};
pub use sheet::CharacterSheet;
pub use snapshot::Snapshot;
pub use validate::{ValidationIssue, validate_character};
