//! End-to-end scenarios for the scoring engine.

use synastry_core::errors::ValidationError;
use synastry_core::types::{
    ChineseAnimal, Combo, ElementRelation, ResultSource, Tier, WesternSign,
};
use synastry_engine::classifier::element_relation;
use synastry_engine::{OverrideTable, ScoreEngine};

fn combo(west: WesternSign, east: ChineseAnimal) -> Combo {
    Combo::new(west, east)
}

/// Engine without overrides, so computed behavior is visible everywhere.
fn computed_engine() -> ScoreEngine {
    ScoreEngine::default().with_overrides(OverrideTable::empty())
}

#[test]
fn identical_combo_promotes_to_top_tier() {
    let engine = computed_engine();
    let leo_dragon = combo(WesternSign::Leo, ChineseAnimal::Dragon);
    let result = engine.score(leo_dragon, leo_dragon);
    assert_eq!(result.tier, Tier::Soulmate);
    // The score keeps its same-animal band; only the tier is promoted.
    assert_eq!(result.score, 68);
    assert!(result.themes.iter().any(|t| t == "identical-combo"));
}

#[test]
fn favorable_both_layers_earns_synergy() {
    let engine = computed_engine();
    // Gemini-Libra share Air; Rat-Dragon share a trine.
    let result = engine.score(
        combo(WesternSign::Gemini, ChineseAnimal::Rat),
        combo(WesternSign::Libra, ChineseAnimal::Dragon),
    );
    assert!(result.tier <= Tier::Excellent, "got {:?}", result.tier);
    assert!(result.themes.iter().any(|t| t == "triple-harmony"));

    // The same east pairing with an unfavorable west layer scores lower.
    let without_synergy = engine.score(
        combo(WesternSign::Gemini, ChineseAnimal::Rat),
        combo(WesternSign::Taurus, ChineseAnimal::Dragon),
    );
    assert!(without_synergy.score < result.score);
}

#[test]
fn clash_pair_is_capped_despite_favorable_west() {
    let engine = computed_engine();
    // Aries-Aries is the same element; Rat-Horse is a clash pair.
    let result = engine.score(
        combo(WesternSign::Aries, ChineseAnimal::Rat),
        combo(WesternSign::Aries, ChineseAnimal::Horse),
    );
    let ceiling = engine.config().effective_conflict_ceiling();
    assert!(result.score <= ceiling, "{} > {}", result.score, ceiling);
    assert_eq!(result.tier, Tier::OppositesAttract);
    assert!(result.warnings.iter().any(|w| w == "six-conflicts"));
}

#[test]
fn unknown_tokens_fail_before_scoring() {
    let engine = computed_engine();
    let err = engine
        .score_tokens("Leo", "Unicorn", "Aries", "Rat")
        .unwrap_err();
    assert!(matches!(err, ValidationError::UnknownAnimal { token } if token == "Unicorn"));

    let err = engine
        .score_tokens("Ophiuchus", "Rat", "Aries", "Rat")
        .unwrap_err();
    assert!(matches!(err, ValidationError::UnknownSign { .. }));
}

#[test]
fn override_replaces_computed_result_exactly() {
    let engine = ScoreEngine::default(); // builtin overrides
    let a = combo(WesternSign::Leo, ChineseAnimal::Dragon);
    let b = combo(WesternSign::Aries, ChineseAnimal::Tiger);

    for (x, y) in [(a, b), (b, a)] {
        let result = engine.score(x, y);
        assert_eq!(result.source, ResultSource::Override);
        assert_eq!(result.score, 96);
        assert_eq!(
            result.themes.to_vec(),
            vec!["double-fire".to_string(), "power-couple".to_string()]
        );
        assert!(result.warnings.is_empty());
    }

    // Without the table, the pair scores differently.
    let computed = computed_engine().score(a, b);
    assert_eq!(computed.source, ResultSource::Computed);
    assert_ne!(computed.score, 96);
}

#[test]
fn same_animal_banding_follows_element_relation() {
    let engine = computed_engine();
    let expected = |rel: ElementRelation| match rel {
        ElementRelation::Same => 68,
        ElementRelation::Compatible => 65,
        ElementRelation::Semi => 62,
        ElementRelation::Opposite => 58,
    };

    for animal in ChineseAnimal::ALL {
        for west_a in WesternSign::ALL {
            for west_b in WesternSign::ALL {
                let result = engine.score(combo(west_a, animal), combo(west_b, animal));
                let band = expected(element_relation(west_a, west_b));
                assert_eq!(
                    result.score, band,
                    "{west_a}-{animal} x {west_b}-{animal}"
                );
                assert!([68, 65, 62, 58].contains(&result.score));
            }
        }
    }
}

#[test]
fn scores_are_symmetric_and_bounded_over_the_full_grid() {
    let engine = ScoreEngine::default(); // overrides included
    for a in Combo::all() {
        for b in Combo::all() {
            let forward = engine.score(a, b);
            assert!(forward.score <= 100);
            let reverse = engine.score(b, a);
            assert_eq!(forward.score, reverse.score, "{a} x {b}");
            assert_eq!(forward.tier, reverse.tier, "{a} x {b}");
        }
    }
}

#[test]
fn scoring_is_idempotent() {
    let engine = ScoreEngine::default();
    let a = combo(WesternSign::Scorpio, ChineseAnimal::Snake);
    let b = combo(WesternSign::Cancer, ChineseAnimal::Rooster);
    let first = engine.score_with_years(a, b, 1989, 1993);
    let second = engine.score_with_years(a, b, 1989, 1993);
    assert_eq!(first, second);
}

#[test]
fn birth_years_only_nudge_distinct_animal_pairs() {
    let engine = computed_engine();
    let a = combo(WesternSign::Virgo, ChineseAnimal::Tiger);
    let b = combo(WesternSign::Capricorn, ChineseAnimal::Dog);
    let plain = engine.score(a, b);
    // 1984 Wood generates 1986 Fire.
    let generating = engine.score_with_years(a, b, 1984, 1986);
    assert!(generating.score >= plain.score);
}

#[test]
fn neutral_cross_trine_pair_lands_mid_table() {
    let engine = computed_engine();
    // Rat-Tiger carries no classical pattern.
    let result = engine.score(
        combo(WesternSign::Taurus, ChineseAnimal::Rat),
        combo(WesternSign::Virgo, ChineseAnimal::Tiger),
    );
    assert_eq!(result.tier, Tier::Neutral);
    assert!(result.score >= 55 && result.score < 80);
}
