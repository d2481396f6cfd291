//! Matrix record generation from the scoring pipeline.

use synastry_core::types::{
    Combo, CompatibilityResult, ElementRelation, MatchColor, MatchRecord, SubScores, Tier,
};

use crate::narrative::compose;
use crate::scoring::{PairFacts, ScoreEngine};

/// Build the full matrix record for one pair.
pub fn build_record(engine: &ScoreEngine, user: Combo, partner: Combo) -> MatchRecord {
    let result = engine.score(user, partner);
    let facts = engine.facts(user, partner);
    let narrative = compose(&result, &facts);
    let scores = derive_sub_scores(&result, &facts, &narrative);

    MatchRecord {
        overall: result.score,
        summary: narrative.summary,
        insight: narrative.lines,
        scores,
        color: color_for(result.tier),
    }
}

/// Derive the six named sub-scores from the overall score and the
/// classification facts, as deterministic fixed offsets.
fn derive_sub_scores(
    result: &CompatibilityResult,
    facts: &PairFacts,
    narrative: &crate::narrative::Narrative,
) -> SubScores {
    let overall = result.score;
    let is_conflict = facts
        .pairing
        .relation()
        .is_some_and(|tag| tag.is_conflict());

    let communication_delta: i16 = match facts.west_relation {
        ElementRelation::Same => 4,
        ElementRelation::Compatible => 2,
        ElementRelation::Semi => -2,
        ElementRelation::Opposite => -6,
    };
    let lifestyle_delta: i16 = if facts.same_trine { 3 } else { -1 };
    // Tense pairs grow the most; easy ones coast.
    let growth_delta: i16 = if is_conflict { 6 } else { -2 };

    SubScores {
        core_vibe: overall,
        chemistry: star_score(narrative.chemistry_stars),
        communication: offset(overall, communication_delta),
        lifestyle: offset(overall, lifestyle_delta),
        long_term: star_score(narrative.stability_stars),
        growth: offset(overall, growth_delta),
    }
}

/// Map a 0-5 star rating onto the 0-100 scale.
fn star_score(stars: f32) -> u8 {
    (stars * 20.0).round().clamp(0.0, 100.0) as u8
}

fn offset(score: u8, delta: i16) -> u8 {
    (score as i16 + delta).clamp(0, 100) as u8
}

fn color_for(tier: Tier) -> MatchColor {
    match tier {
        Tier::Soulmate | Tier::Excellent | Tier::Harmonious => MatchColor::Green,
        Tier::Neutral | Tier::OppositesAttract => MatchColor::Yellow,
        Tier::Difficult => MatchColor::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::OverrideTable;
    use synastry_core::types::{ChineseAnimal, WesternSign};

    #[test]
    fn record_mirrors_engine_score() {
        let engine = ScoreEngine::default().with_overrides(OverrideTable::empty());
        let a = Combo::new(WesternSign::Gemini, ChineseAnimal::Rat);
        let b = Combo::new(WesternSign::Libra, ChineseAnimal::Dragon);
        let record = build_record(&engine, a, b);
        assert_eq!(record.overall, engine.score(a, b).score);
        assert_eq!(record.color, MatchColor::Green);
        assert!(!record.summary.is_empty());
        assert_eq!(record.insight.len(), 3);
    }

    #[test]
    fn sub_scores_stay_in_range() {
        let engine = ScoreEngine::default();
        for a in Combo::all().step_by(7) {
            for b in Combo::all().step_by(11) {
                let s = build_record(&engine, a, b).scores;
                for v in [
                    s.core_vibe,
                    s.chemistry,
                    s.communication,
                    s.lifestyle,
                    s.long_term,
                    s.growth,
                ] {
                    assert!(v <= 100);
                }
            }
        }
    }
}
