//! D6 dice notation, the step scale, and rolling.
//!
//! A rating like `"2D+1"` means "roll two six-sided dice and add one". The
//! engine does its arithmetic on a flat step scale where one die is worth
//! three steps; [`DiceValue`] is only the presentation form.

pub mod roll;
pub mod steps;

pub use roll::{D6Roll, d6_range, roll_d6};
pub use steps::{MAX_DICE, MAX_STEPS, STEPS_PER_DIE, Steps, from_steps, to_steps};

use serde::{Deserialize, Serialize};

/// A dice rating: `count` six-sided dice plus a flat `modifier`.
///
/// Canonical values keep `modifier` in `0..=2`; everything the engine
/// emits is canonical. Parsed input may carry other modifiers (`"2D-1"`),
/// which [`DiceValue::canonical`] folds back onto the step scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DiceValue {
    /// Number of dice.
    pub count: u32,
    /// Flat modifier added to the roll.
    pub modifier: i32,
}

impl DiceValue {
    /// Returned by [`DiceValue::parse`] for input it does not understand.
    pub const FALLBACK: DiceValue = DiceValue::new(1, 0);

    /// No dice at all.
    pub const ZERO: DiceValue = DiceValue::new(0, 0);

    /// Create a value from its parts.
    pub const fn new(count: u32, modifier: i32) -> Self {
        Self { count, modifier }
    }

    /// A whole number of dice with no modifier.
    pub const fn dice(count: u32) -> Self {
        Self::new(count, 0)
    }

    /// Parse notation such as `"2D"`, `"2D+1"`, or `"3D-1"`.
    ///
    /// Never fails: unrecognized input yields [`DiceValue::FALLBACK`] so that
    /// legacy or hand-edited data still renders.
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_else(|| {
            tracing::debug!(input = text, "unrecognized dice notation, using 1D");
            Self::FALLBACK
        })
    }

    /// Strict form of [`DiceValue::parse`].
    ///
    /// Counts above [`MAX_DICE`] and modifiers beyond [`MAX_STEPS`] are
    /// rejected.
    pub fn try_parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let (count_str, rest) = trimmed.split_once(['D', 'd'])?;
        let count = parse_digits(count_str).filter(|&c| c <= MAX_DICE)?;

        let modifier = if rest.is_empty() {
            0
        } else if let Some(digits) = rest.strip_prefix('+') {
            i32::try_from(parse_digits(digits)?).ok()?
        } else if let Some(digits) = rest.strip_prefix('-') {
            -i32::try_from(parse_digits(digits)?).ok()?
        } else {
            return None;
        };
        if Steps::from(modifier).abs() > MAX_STEPS {
            return None;
        }

        Some(Self { count, modifier })
    }

    /// True if the modifier is in `0..=2`.
    pub fn is_canonical(&self) -> bool {
        (0..STEPS_PER_DIE as i32).contains(&self.modifier)
    }

    /// The same rating on the step scale, re-expressed canonically.
    ///
    /// Ratings below zero steps clamp to `0D`.
    pub fn canonical(self) -> Self {
        from_steps(self.steps())
    }

    /// This value on the step scale.
    pub fn steps(self) -> Steps {
        to_steps(self)
    }
}

impl Default for DiceValue {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Digits only, no sign or whitespace.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl std::fmt::Display for DiceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let canonical = self.canonical();
        if canonical.modifier == 0 {
            write!(f, "{}D", canonical.count)
        } else {
            write!(f, "{}D+{}", canonical.count, canonical.modifier)
        }
    }
}

impl From<String> for DiceValue {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<DiceValue> for String {
    fn from(value: DiceValue) -> Self {
        value.to_string()
    }
}

/// Parse notation, falling back to `1D` on unrecognized input.
pub fn parse(text: &str) -> DiceValue {
    DiceValue::parse(text)
}

/// Render a value in canonical notation.
pub fn format(value: DiceValue) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_plain_dice() {
        assert_eq!(parse("2D"), DiceValue::new(2, 0));
        assert_eq!(parse("0D"), DiceValue::new(0, 0));
        assert_eq!(parse("12D"), DiceValue::new(12, 0));
    }

    #[test]
    fn parse_with_modifier() {
        assert_eq!(parse("2D+1"), DiceValue::new(2, 1));
        assert_eq!(parse("3D-1"), DiceValue::new(3, -1));
    }

    #[test]
    fn parse_tolerates_whitespace_and_case() {
        assert_eq!(parse("  2D+2 \n"), DiceValue::new(2, 2));
        assert_eq!(parse("4d"), DiceValue::new(4, 0));
    }

    #[test]
    fn parse_falls_back_on_garbage() {
        for input in ["", "D", "2", "abc", "2D+", "2D+x", "-1D", "2 D", "2D +1", "D+1", "2D*2"] {
            assert_eq!(parse(input), DiceValue::FALLBACK, "input: {input:?}");
            assert_eq!(DiceValue::try_parse(input), None, "input: {input:?}");
        }
    }

    #[test]
    fn parse_falls_back_on_overflow() {
        assert_eq!(parse("99999999999D"), DiceValue::FALLBACK);
        assert_eq!(parse("1D+99999999999"), DiceValue::FALLBACK);
    }

    #[test]
    fn parse_rejects_oversized_ratings() {
        assert_eq!(DiceValue::try_parse("1000D"), Some(DiceValue::dice(MAX_DICE)));
        assert_eq!(DiceValue::try_parse("1001D"), None);
        assert_eq!(DiceValue::try_parse("1000000000D"), None);
        assert_eq!(parse("4000000000D"), DiceValue::FALLBACK);
        assert_eq!(DiceValue::try_parse("1D+3000"), Some(DiceValue::new(1, 3000)));
        assert_eq!(DiceValue::try_parse("1D+3001"), None);
        assert_eq!(DiceValue::try_parse("1D-3001"), None);
    }

    #[test]
    fn format_omits_zero_modifier() {
        assert_eq!(format(DiceValue::dice(2)), "2D");
        assert_eq!(format(DiceValue::new(2, 1)), "2D+1");
    }

    #[test]
    fn format_canonicalizes() {
        assert_eq!(format(parse("2D-1")), "1D+2");
        assert_eq!(format(DiceValue::new(2, 3)), "3D");
        assert_eq!(format(DiceValue::new(0, -4)), "0D");
    }

    #[test]
    fn canonical_check() {
        assert!(DiceValue::new(2, 2).is_canonical());
        assert!(!DiceValue::new(2, 3).is_canonical());
        assert!(!DiceValue::new(2, -1).is_canonical());
        assert_eq!(DiceValue::new(2, 3).canonical(), DiceValue::dice(3));
    }

    #[test]
    fn serde_as_notation() {
        let json = serde_json::to_string(&DiceValue::new(2, 1)).unwrap();
        assert_eq!(json, "\"2D+1\"");
        let back: DiceValue = serde_json::from_str("\"3D\"").unwrap();
        assert_eq!(back, DiceValue::dice(3));
        let lenient: DiceValue = serde_json::from_str("\"kaputt\"").unwrap();
        assert_eq!(lenient, DiceValue::FALLBACK);
    }

    proptest! {
        #[test]
        fn parse_format_round_trip(count in 0u32..1000, modifier in 0i32..=2) {
            let v = DiceValue::new(count, modifier);
            prop_assert_eq!(parse(&format(v)), v);
        }

        #[test]
        fn format_is_stable(count in 0u32..1000, modifier in 0i32..=2) {
            let s = format(DiceValue::new(count, modifier));
            prop_assert_eq!(format(parse(&s)), s);
        }

        #[test]
        fn parse_never_panics(s in "\\PC{0,16}") {
            let _ = parse(&s);
        }
    }
}
