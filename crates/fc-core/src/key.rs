use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalize a skill or attribute name for comparison.
///
/// Trims, lowercases, and folds German umlauts and sharp s to their
/// two-letter spellings (`ä→ae`, `ö→oe`, `ü→ue`, `ß→ss`). Every place that
/// compares skill names (equipment stats, injury keywords, catalog merges)
/// must go through this function.
pub fn normalize_skill_key(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().chars().flat_map(char::to_lowercase) {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            other => out.push(other),
        }
    }
    out
}

/// A skill name in normalized form, usable as a map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedSkillKey(String);

impl NormalizedSkillKey {
    /// Normalize `name` into a key.
    pub fn new(name: &str) -> Self {
        Self(normalize_skill_key(name))
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `fragment` occurs anywhere in the key.
    ///
    /// `fragment` is expected to be normalized already.
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl From<String> for NormalizedSkillKey {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for NormalizedSkillKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<NormalizedSkillKey> for String {
    fn from(key: NormalizedSkillKey) -> Self {
        key.0
    }
}

impl Borrow<str> for NormalizedSkillKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedSkillKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn folds_umlauts() {
        assert_eq!(normalize_skill_key("Schlösser öffnen"), "schloesser oeffnen");
        assert_eq!(normalize_skill_key("Überleben"), "ueberleben");
        assert_eq!(normalize_skill_key("Stärke"), "staerke");
        assert_eq!(normalize_skill_key("Geschäftssinn"), "geschaeftssinn");
        assert_eq!(normalize_skill_key("Größe"), "groesse");
    }

    #[test]
    fn spelled_out_and_umlaut_forms_match() {
        assert_eq!(
            NormalizedSkillKey::new("Schlösser öffnen"),
            NormalizedSkillKey::new("schloesser oeffnen")
        );
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(normalize_skill_key("  Reiten \t"), "reiten");
    }

    #[test]
    fn contains_fragment() {
        let key = NormalizedSkillKey::new("Schlösser öffnen");
        assert!(key.contains("schloss"));
        assert!(!key.contains("schlöss"));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(NormalizedSkillKey::new("Heben"), 2);
        assert_eq!(map.get("heben"), Some(&2));
    }

    #[test]
    fn serde_normalizes_on_read() {
        let key: NormalizedSkillKey = serde_json::from_str("\"Schöne Künste\"").unwrap();
        assert_eq!(key.as_str(), "schoene kuenste");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"schoene kuenste\"");
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(s in "[a-zA-ZäöüÄÖÜß ()-]{0,24}") {
            let once = normalize_skill_key(&s);
            prop_assert_eq!(normalize_skill_key(&once), once);
        }
    }
}
