//! The Fallcrest house rules as shipped with the campaign app.

use std::collections::BTreeMap;

use fc_core::{Attribute, InjurySlot};

use crate::dice::DiceValue;
use crate::rules::{CatalogSkill, RulesConfig};

/// Baseline rating every new character starts with.
pub fn default_baseline(attribute: Attribute) -> DiceValue {
    match attribute {
        Attribute::Magie => DiceValue::ZERO,
        _ => DiceValue::dice(2),
    }
}

/// The Fallcrest rules: 2D baselines (Magie 0D), the default skill
/// catalog, and the injury slot table.
pub fn fallcrest() -> RulesConfig {
    RulesConfig {
        name: "fallcrest".to_string(),
        baselines: Attribute::ALL
            .into_iter()
            .map(|a| (a, default_baseline(a)))
            .collect(),
        skill_catalog: default_catalog(),
        injury_keywords: default_injury_keywords(),
        weakened_penalty_dice: 3,
        missing_attribute_value: DiceValue::FALLBACK,
        max_specialization_blips: 4,
    }
}

fn default_catalog() -> Vec<CatalogSkill> {
    let table: [(Attribute, &[&str]); 7] = [
        (
            Attribute::Reflexe,
            &[
                "unbewaffneter Kampf",
                "bewaffneter Nahkampf",
                "Akrobatik",
                "Klettern",
                "Springen",
                "Reiten",
                "Schleichen",
            ],
        ),
        (
            Attribute::Koordination,
            &["Fernkampf", "Steuern", "Fingerfertigkeit", "Schlösser öffnen"],
        ),
        (
            Attribute::Staerke,
            &["Ausdauer", "Heben", "Rennen", "Schwimmen"],
        ),
        (
            Attribute::Wissen,
            &["Schulwissen", "Handwerk", "Navigation", "Geschäftssinn", "Heilkunde"],
        ),
        (
            Attribute::Wahrnehmung,
            &["Überleben", "schöne Künste", "Spielen"],
        ),
        (
            Attribute::Ausstrahlung,
            &[
                "Betören",
                "Bedrohen",
                "Betrügen",
                "Verkleiden",
                "Kommandieren",
                "mentaler Widerstand",
            ],
        ),
        (
            Attribute::Magie,
            &[
                "magisches Wissen",
                "magische Kraft",
                "magische Konzentration",
                "magische Ausdauer",
            ],
        ),
    ];

    table
        .into_iter()
        .flat_map(|(attribute, names)| {
            names.iter().map(move |name| CatalogSkill {
                name: (*name).to_string(),
                attribute,
            })
        })
        .collect()
}

// Keywords are matched against normalized skill names by substring, so
// they are written in normalized spelling.
fn default_injury_keywords() -> BTreeMap<InjurySlot, Vec<String>> {
    let table: [(InjurySlot, &[&str]); 15] = [
        (
            InjurySlot::Head,
            &[
                "wissen",
                "wahrnehmung",
                "schulwissen",
                "handwerk",
                "navigation",
                "geschaeft",
                "heilkunde",
                "ueberleben",
                "schoene kuenste",
                "spielen",
            ],
        ),
        (
            InjurySlot::Neck,
            &["betoeren", "bedrohen", "kommandieren", "verkleiden"],
        ),
        (
            InjurySlot::Ears,
            &["wahrnehmung", "ueberleben", "schoene kuenste", "spielen"],
        ),
        (InjurySlot::Torso, &["ausdauer", "heben", "schwimmen"]),
        (
            InjurySlot::Legs,
            &[
                "rennen",
                "springen",
                "klettern",
                "reiten",
                "schleichen",
                "akrobatik",
                "laufen",
            ],
        ),
        (
            InjurySlot::Feet,
            &["rennen", "springen", "klettern", "schleichen", "laufen"],
        ),
        (InjurySlot::Back, &["heben", "ausdauer", "schwimmen"]),
        (
            InjurySlot::FingerL,
            &["fingerfertigkeit", "schloesser", "schloss"],
        ),
        (
            InjurySlot::FingerR,
            &["fingerfertigkeit", "schloesser", "schloss"],
        ),
        (
            InjurySlot::Wrists,
            &["fingerfertigkeit", "schloesser", "schloss", "handwerk"],
        ),
        (InjurySlot::Ankles, &["rennen", "schleichen", "laufen"]),
        (
            InjurySlot::MainHand,
            &[
                "bewaffneter nahkampf",
                "unbewaffneter kampf",
                "fernkampf",
                "handwerk",
            ],
        ),
        (
            InjurySlot::OffHand,
            &[
                "bewaffneter nahkampf",
                "unbewaffneter kampf",
                "fernkampf",
                "handwerk",
            ],
        ),
        (InjurySlot::Belt, &["ausdauer", "ueberleben"]),
        (
            InjurySlot::Psyche,
            &[
                "willenskraft",
                "konzentration",
                "mentaler widerstand",
                "magische konzentration",
            ],
        ),
    ];

    table
        .into_iter()
        .map(|(slot, words)| (slot, words.iter().map(|w| (*w).to_string()).collect()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_core::normalize_skill_key;

    #[test]
    fn baselines() {
        let rules = fallcrest();
        assert_eq!(rules.baseline(Attribute::Reflexe), DiceValue::dice(2));
        assert_eq!(rules.baseline(Attribute::Staerke), DiceValue::dice(2));
        assert_eq!(rules.baseline(Attribute::Magie), DiceValue::ZERO);
    }

    #[test]
    fn catalog_covers_every_attribute() {
        let rules = fallcrest();
        assert_eq!(rules.skill_catalog.len(), 33);
        for attr in Attribute::ALL {
            assert!(rules.skills_for(attr).count() > 0, "{attr} has no skills");
        }
        assert_eq!(rules.skills_for(Attribute::Koordination).count(), 4);
    }

    #[test]
    fn every_slot_has_keywords() {
        let rules = fallcrest();
        for slot in InjurySlot::ALL {
            assert!(!rules.injury_keywords(slot).is_empty(), "{slot}");
        }
    }

    #[test]
    fn keywords_are_already_normalized() {
        let rules = fallcrest();
        for words in rules.injury_keywords.values() {
            for word in words {
                assert_eq!(&normalize_skill_key(word), word);
            }
        }
    }

    #[test]
    fn every_catalog_skill_with_umlauts_is_reachable_by_injury() {
        let rules = fallcrest();
        for name in ["Überleben", "schöne Künste", "Betören", "Schlösser öffnen", "Geschäftssinn"] {
            let key = normalize_skill_key(name);
            let hit = rules
                .injury_keywords
                .values()
                .flatten()
                .any(|w| key.contains(w.as_str()));
            assert!(hit, "{name} is not matched by any injury keyword");
        }
    }

    #[test]
    fn preset_rules_validate() {
        assert!(fallcrest().validate().is_ok());
    }
}
