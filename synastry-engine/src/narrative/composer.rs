//! Narrative assembly and star ratings.

use synastry_core::types::{Aspect, ChineseRelation, CompatibilityResult, ElementRelation, PairClass};

use crate::scoring::PairFacts;

use super::phrases;

/// Display narrative for one scored pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Narrative {
    /// One-sentence tier summary.
    pub summary: String,
    /// One to three supporting lines, ending with the numeric score.
    pub lines: Vec<String>,
    /// Spark rating, 0-5 in 0.5 steps.
    pub chemistry_stars: f32,
    /// Staying-power rating, 0-5 in 0.5 steps.
    pub stability_stars: f32,
}

/// Compose the narrative for a scored pair.
///
/// Pure phrase-bank lookup keyed by tier and refining facts, with the
/// numeric score substituted into the closing line.
pub fn compose(result: &CompatibilityResult, facts: &PairFacts) -> Narrative {
    let summary = phrases::tier_summary(
        result.tier,
        facts.same_trine,
        facts.west_relation == ElementRelation::Same,
    )
    .to_string();

    let lines = vec![
        phrases::element_headline(facts.element_a, facts.element_b).to_string(),
        phrases::pairing_line(facts.pairing).to_string(),
        format!("Overall match: {}% ({})", result.score, result.tier.as_str()),
    ];

    let (chemistry_stars, stability_stars) = star_ratings(result.score, facts);

    Narrative {
        summary,
        lines,
        chemistry_stars,
        stability_stars,
    }
}

/// Base star pair for the Chinese-layer pattern at a given score.
fn base_stars(score: u8, pairing: PairClass) -> (f32, f32) {
    match pairing {
        PairClass::SameAnimal => {
            if score >= 66 {
                (3.5, 3.0)
            } else {
                (3.0, 2.5)
            }
        }
        PairClass::Relation(tag) => match tag {
            ChineseRelation::SanHe => {
                if score >= 90 {
                    (4.5, 5.0)
                } else if score >= 82 {
                    (4.0, 4.5)
                } else {
                    (3.5, 4.0)
                }
            }
            ChineseRelation::LiuHe => {
                if score >= 85 {
                    (4.5, 4.5)
                } else {
                    (4.0, 4.0)
                }
            }
            ChineseRelation::Neutral => {
                if score >= 60 {
                    (3.0, 3.0)
                } else {
                    (2.5, 2.5)
                }
            }
            // Clash pairs run hot: chemistry outpaces stability.
            ChineseRelation::LiuChong => (3.5, 2.0),
            ChineseRelation::LiuHai => (3.0, 2.0),
            ChineseRelation::Xing => (2.5, 1.5),
        },
    }
}

/// Apply the aspect tweak and clamp to display bounds.
///
/// Soft aspects lift both ratings; hard aspects trade stability for
/// chemistry. Conflict patterns keep a lower stability cap so the pair
/// never reads as settled.
fn star_ratings(score: u8, facts: &PairFacts) -> (f32, f32) {
    let (mut chemistry, mut stability) = base_stars(score, facts.pairing);

    let is_conflict = facts
        .pairing
        .relation()
        .is_some_and(ChineseRelation::is_conflict);

    match facts.aspect {
        Aspect::Trine | Aspect::Sextile => {
            chemistry += 0.5;
            if !is_conflict {
                stability += 0.5;
            }
        }
        Aspect::Square | Aspect::Opposition => {
            chemistry += 0.5;
            stability -= 0.5;
        }
        Aspect::Other => {}
    }

    let (chem_max, stab_max) = if is_conflict { (4.0, 3.0) } else { (5.0, 5.0) };
    (
        round_half(chemistry.clamp(0.0, chem_max)),
        round_half(stability.clamp(0.0, stab_max)),
    )
}

fn round_half(x: f32) -> f32 {
    (x * 2.0).round() / 2.0
}
