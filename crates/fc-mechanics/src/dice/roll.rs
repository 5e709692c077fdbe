//! Rolling D6 ratings with the red die.
//!
//! The first die of every roll is the red die. A red 6 explodes: roll again
//! and add, for as long as sixes keep coming. A red 1 is a critical failure
//! regardless of the total.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::{DiceValue, MAX_DICE};

/// The outcome of rolling one D6 rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct D6Roll {
    /// The rating that was rolled, canonical.
    pub value: DiceValue,
    /// Every regular die, red die first.
    pub dice: Vec<u32>,
    /// Extra rolls from the red die exploding.
    pub exploding: Vec<u32>,
    /// Flat modifier from the rating.
    pub modifier: i32,
    /// Sum of dice, explosions, and modifier.
    pub total: i64,
}

impl D6Roll {
    /// The red die's face.
    pub fn red_die(&self) -> u32 {
        self.dice.first().copied().unwrap_or(0)
    }

    /// True if the red die shows 1.
    pub fn is_critical_failure(&self) -> bool {
        self.red_die() == 1
    }

    /// True if the red die exploded at least once.
    pub fn exploded(&self) -> bool {
        !self.exploding.is_empty()
    }

    /// Whether the total meets a target number.
    ///
    /// A critical failure never succeeds.
    pub fn succeeds_against(&self, target: i64) -> bool {
        !self.is_critical_failure() && self.total >= target
    }
}

impl std::fmt::Display for D6Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dice: Vec<String> = self.dice.iter().map(u32::to_string).collect();
        write!(f, "{}: [{}]", self.value, dice.join(", "))?;
        if self.exploded() {
            let extra: Vec<String> = self.exploding.iter().map(u32::to_string).collect();
            write!(f, " explodes [{}]", extra.join(", "))?;
        }
        if self.modifier != 0 {
            write!(f, " +{}", self.modifier)?;
        }
        write!(f, " = {}", self.total)?;
        if self.is_critical_failure() {
            write!(f, " (critical failure)")?;
        }
        Ok(())
    }
}

/// Roll a rating. A `0D` rating still rolls the red die; at most
/// [`MAX_DICE`] dice are rolled.
pub fn roll_d6(value: DiceValue, rng: &mut StdRng) -> D6Roll {
    let value = value.canonical();
    let count = value.count.clamp(1, MAX_DICE);

    let dice: Vec<u32> = (0..count).map(|_| rng.random_range(1..=6)).collect();

    let mut exploding = Vec::new();
    let mut current = dice[0];
    while current == 6 {
        current = rng.random_range(1..=6);
        exploding.push(current);
    }

    let dice_sum: i64 = dice.iter().chain(&exploding).map(|&d| i64::from(d)).sum();
    let total = dice_sum + i64::from(value.modifier);

    D6Roll {
        value,
        dice,
        exploding,
        modifier: value.modifier,
        total,
    }
}

/// Lowest and highest possible totals, ignoring explosions.
pub fn d6_range(value: DiceValue) -> (i64, i64) {
    let value = value.canonical();
    let count = i64::from(value.count);
    let modifier = i64::from(value.modifier);
    (count + modifier, count * 6 + modifier)
}
