//! Tests for combo identities and result serialization.

use synastry_core::constants::COMBO_COUNT;
use synastry_core::types::{
    ChineseAnimal, Combo, CompatibilityResult, MatchColor, MatchRecord, ResultSource, SubScores,
    Tier, WesternSign,
};

#[test]
fn test_combo_enumeration_is_dense_and_ordered() {
    let combos: Vec<Combo> = Combo::all().collect();
    assert_eq!(combos.len(), COMBO_COUNT);
    for (i, combo) in combos.iter().enumerate() {
        assert_eq!(combo.index(), i);
    }
    // Sign-major order: the first twelve share the first sign.
    assert!(combos[..12].iter().all(|c| c.west == WesternSign::Aries));
    assert_eq!(combos[0].east, ChineseAnimal::Rat);
    assert_eq!(combos[143].west, WesternSign::Pisces);
    assert_eq!(combos[143].east, ChineseAnimal::Pig);
}

#[test]
fn test_combo_key_parsing_is_case_insensitive() {
    let combo: Combo = "leo-dragon".parse().unwrap();
    assert_eq!(combo.west, WesternSign::Leo);
    assert_eq!(combo.east, ChineseAnimal::Dragon);
}

#[test]
fn test_sign_ordinals_follow_ecliptic_order() {
    assert_eq!(WesternSign::Aries.ordinal(), 0);
    assert_eq!(WesternSign::Cancer.ordinal(), 3);
    assert_eq!(WesternSign::Pisces.ordinal(), 11);
    assert_eq!(ChineseAnimal::Rat.ordinal(), 0);
    assert_eq!(ChineseAnimal::Pig.ordinal(), 11);
}

#[test]
fn test_tier_ordering_best_first() {
    assert!(Tier::Soulmate < Tier::Excellent);
    assert!(Tier::Excellent < Tier::Harmonious);
    assert!(Tier::OppositesAttract < Tier::Difficult);
}

#[test]
fn test_result_serializes_round_trip() {
    let result = CompatibilityResult {
        score: 93,
        tier: Tier::Soulmate,
        themes: ["triple-harmony".to_string()].into_iter().collect(),
        warnings: Default::default(),
        source: ResultSource::Computed,
    };
    let json = serde_json::to_string(&result).unwrap();
    let back: CompatibilityResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_match_record_document_field_names() {
    let record = MatchRecord {
        overall: 72,
        summary: "steady".into(),
        insight: vec!["line".into()],
        scores: SubScores::uniform(72),
        color: MatchColor::Green,
    };
    let json = serde_json::to_value(&record).unwrap();
    // Field names must match the persisted per-sign document format.
    assert_eq!(json["overall"], 72);
    assert_eq!(json["color"], "green");
    assert_eq!(json["scores"]["core_vibe"], 72);
    assert_eq!(json["scores"]["long_term"], 72);
}

#[test]
fn test_neutral_fallback_record() {
    let fallback = MatchRecord::neutral_fallback();
    assert_eq!(fallback.overall, 50);
    assert_eq!(fallback.color, MatchColor::Grey);
    assert_eq!(fallback.scores.chemistry, 50);
}
