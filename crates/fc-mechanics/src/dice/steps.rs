//! The flat step scale: one die is three steps.

use super::DiceValue;

/// A position on the step scale.
pub type Steps = i64;

/// Steps in one die.
pub const STEPS_PER_DIE: Steps = 3;

/// Largest die count the notation codec accepts.
pub const MAX_DICE: u32 = 1000;

/// [`MAX_DICE`] on the step scale.
pub const MAX_STEPS: Steps = MAX_DICE as Steps * STEPS_PER_DIE;

/// Flatten a dice value onto the step scale.
pub fn to_steps(value: DiceValue) -> Steps {
    Steps::from(value.count) * STEPS_PER_DIE + Steps::from(value.modifier)
}

/// Convert a step total back to a canonical dice value.
///
/// Negative totals clamp to `0D`.
pub fn from_steps(steps: Steps) -> DiceValue {
    let steps = steps.max(0);
    let count = u32::try_from(steps / STEPS_PER_DIE).unwrap_or(u32::MAX);
    // Always 0..=2 after the clamp above.
    let modifier = (steps % STEPS_PER_DIE) as i32;
    DiceValue { count, modifier }
}
