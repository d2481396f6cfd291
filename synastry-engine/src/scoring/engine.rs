//! The scoring pipeline.

use std::sync::Arc;

use synastry_core::config::EngineConfig;
use synastry_core::errors::ValidationError;
use synastry_core::events::{MatchEventHandler, NoopEventHandler, OverrideAppliedEvent};
use synastry_core::types::{
    Aspect, ChineseRelation, Combo, CompatibilityResult, Element, ElementRelation, PairClass,
    ResultSource, SmallVec4,
};

use crate::classifier::{aspect, chinese_relation, element_relation, wuxing_relation};
use crate::taxonomy;

use super::bases;
use super::overrides::OverrideTable;
use super::tiers::tier_for;

/// Classification facts for one combo pair, shared by the scoring
/// pipeline, the narrative composer, and matrix record generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairFacts {
    pub west_relation: ElementRelation,
    pub aspect: Aspect,
    pub pairing: PairClass,
    pub element_a: Element,
    pub element_b: Element,
    pub same_trine: bool,
    pub identical_combo: bool,
}

/// The compatibility scoring engine.
///
/// Pure given its configuration: no clock, no randomness, no interior
/// mutability. Construct one at the composition root and share it freely.
pub struct ScoreEngine {
    config: EngineConfig,
    overrides: OverrideTable,
    events: Arc<dyn MatchEventHandler>,
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ScoreEngine {
    /// Engine with the given config and the built-in override set.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            overrides: OverrideTable::builtin(),
            events: Arc::new(NoopEventHandler),
        }
    }

    /// Replace the override table (e.g. an externally curated set, or
    /// [`OverrideTable::empty`] in tests).
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_event_handler(mut self, events: Arc<dyn MatchEventHandler>) -> Self {
        self.events = events;
        self
    }

    /// Classification facts for a pair, without scoring.
    pub fn facts(&self, a: Combo, b: Combo) -> PairFacts {
        PairFacts {
            west_relation: element_relation(a.west, b.west),
            aspect: aspect(a.west, b.west),
            pairing: chinese_relation(a.east, b.east),
            element_a: taxonomy::element(a.west),
            element_b: taxonomy::element(b.west),
            same_trine: taxonomy::trine_group(a.east) == taxonomy::trine_group(b.east),
            identical_combo: a == b,
        }
    }

    /// Score a pair from raw string tokens.
    ///
    /// This is the validation boundary: an unrecognized token fails here
    /// with a [`ValidationError`] before any computation runs.
    pub fn score_tokens(
        &self,
        west_a: &str,
        east_a: &str,
        west_b: &str,
        east_b: &str,
    ) -> Result<CompatibilityResult, ValidationError> {
        let a = Combo::new(west_a.parse()?, east_a.parse()?);
        let b = Combo::new(west_b.parse()?, east_b.parse()?);
        Ok(self.score(a, b))
    }

    /// Score a pair of validated combos. Total; cannot fail.
    pub fn score(&self, a: Combo, b: Combo) -> CompatibilityResult {
        self.score_pair(a, b, None)
    }

    /// Score a pair with birth years, adding the Wu Xing year-element
    /// nudge on top of the blend.
    pub fn score_with_years(
        &self,
        a: Combo,
        b: Combo,
        year_a: i32,
        year_b: i32,
    ) -> CompatibilityResult {
        self.score_pair(a, b, Some((year_a, year_b)))
    }

    fn score_pair(&self, a: Combo, b: Combo, years: Option<(i32, i32)>) -> CompatibilityResult {
        let facts = self.facts(a, b);

        // Curated overrides replace the computed result entirely.
        if let Some(entry) = self.overrides.get(a, b) {
            self.events.on_override_applied(&OverrideAppliedEvent {
                a,
                b,
                note: entry.note.clone(),
            });
            tracing::debug!(pair = %format_pair(a, b), score = entry.score, "override applied");
            return CompatibilityResult {
                score: entry.score.min(100),
                tier: tier_for(entry.score, facts.pairing.relation(), false),
                themes: entry.themes.iter().cloned().collect(),
                warnings: entry.warnings.iter().cloned().collect(),
                source: ResultSource::Override,
            };
        }

        let mut themes: SmallVec4<String> = SmallVec4::new();
        let mut warnings: SmallVec4<String> = SmallVec4::new();
        collect_west_tags(&facts, &mut themes, &mut warnings);

        let score = match facts.pairing {
            PairClass::SameAnimal => {
                themes.push("mirror-pair".to_string());
                if taxonomy::is_self_punishing(a.east) {
                    warnings.push("self-punishment".to_string());
                }
                // Fixed band keyed by the element relation; aspect and
                // Wu Xing nudges deliberately do not move it.
                bases::same_animal_band(facts.west_relation)
            }
            PairClass::Relation(tag) => {
                collect_east_tags(tag, &mut themes, &mut warnings);
                self.blended_score(&facts, tag, years)
            }
        };

        let promote = facts.identical_combo && self.config.effective_promote_identical_combo();
        if promote {
            themes.push("identical-combo".to_string());
        }
        let tier = tier_for(score, facts.pairing.relation(), promote);

        CompatibilityResult {
            score,
            tier,
            themes,
            warnings,
            source: ResultSource::Computed,
        }
    }

    /// Weighted blend plus nudges for a pair of distinct animals.
    fn blended_score(
        &self,
        facts: &PairFacts,
        east_tag: ChineseRelation,
        years: Option<(i32, i32)>,
    ) -> u8 {
        let blend = self.config.effective_west_weight() * bases::west_base(facts.west_relation)
            + self.config.effective_east_weight() * bases::east_base(east_tag);

        let mut score = blend.round() as i32;
        score += bases::aspect_delta(facts.aspect);

        if let Some((year_a, year_b)) = years {
            let relation =
                wuxing_relation(taxonomy::year_element(year_a), taxonomy::year_element(year_b));
            score += bases::wuxing_delta(relation);
        }

        let west_favorable = matches!(
            facts.west_relation,
            ElementRelation::Same | ElementRelation::Compatible
        );
        if west_favorable && east_tag.is_favorable() {
            score += self.config.effective_synergy_bonus();
        }
        if facts.west_relation == ElementRelation::Opposite && east_tag.is_conflict() {
            score -= self.config.effective_conflict_penalty();
        }

        // Conflict patterns never score past the ceiling, no matter how
        // favorable the Western layer is.
        if east_tag.is_conflict() {
            score = score.min(self.config.effective_conflict_ceiling() as i32);
        }

        score.clamp(0, 100) as u8
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn collect_west_tags(
    facts: &PairFacts,
    themes: &mut SmallVec4<String>,
    warnings: &mut SmallVec4<String>,
) {
    match facts.west_relation {
        ElementRelation::Same => themes.push("same-element".to_string()),
        ElementRelation::Compatible => themes.push("complementary-elements".to_string()),
        ElementRelation::Semi => {}
        ElementRelation::Opposite => warnings.push("element-clash".to_string()),
    }
    match facts.aspect {
        Aspect::Trine => themes.push("flowing-aspect".to_string()),
        Aspect::Sextile => themes.push("supportive-aspect".to_string()),
        Aspect::Square => warnings.push("friction-aspect".to_string()),
        Aspect::Opposition => warnings.push("polarity".to_string()),
        Aspect::Other => {}
    }
}

fn collect_east_tags(
    tag: ChineseRelation,
    themes: &mut SmallVec4<String>,
    warnings: &mut SmallVec4<String>,
) {
    match tag {
        ChineseRelation::SanHe => themes.push("triple-harmony".to_string()),
        ChineseRelation::LiuHe => themes.push("secret-friends".to_string()),
        ChineseRelation::LiuChong => warnings.push("six-conflicts".to_string()),
        ChineseRelation::LiuHai => warnings.push("six-harms".to_string()),
        ChineseRelation::Xing => warnings.push("punishment-pattern".to_string()),
        ChineseRelation::Neutral => {}
    }
}

fn format_pair(a: Combo, b: Combo) -> String {
    format!("{a} x {b}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use synastry_core::types::{ChineseAnimal, Tier, WesternSign};

    fn combo(west: WesternSign, east: ChineseAnimal) -> Combo {
        Combo::new(west, east)
    }

    fn engine() -> ScoreEngine {
        ScoreEngine::default().with_overrides(OverrideTable::empty())
    }

    #[test]
    fn same_animal_band_ignores_nudges() {
        let e = engine();
        let leo_rat = combo(WesternSign::Leo, ChineseAnimal::Rat);
        let aries_rat = combo(WesternSign::Aries, ChineseAnimal::Rat);
        // Wu Xing years must not move the band.
        let without_years = e.score(leo_rat, aries_rat);
        let with_years = e.score_with_years(leo_rat, aries_rat, 1984, 1996);
        assert_eq!(without_years.score, 68);
        assert_eq!(with_years.score, 68);
    }

    #[test]
    fn self_punishing_animals_carry_warning() {
        let e = engine();
        let a = combo(WesternSign::Leo, ChineseAnimal::Dragon);
        let b = combo(WesternSign::Aries, ChineseAnimal::Dragon);
        let result = e.score(a, b);
        assert!(result.warnings.iter().any(|w| w == "self-punishment"));

        let a = combo(WesternSign::Leo, ChineseAnimal::Rat);
        let b = combo(WesternSign::Aries, ChineseAnimal::Rat);
        let result = e.score(a, b);
        assert!(!result.warnings.iter().any(|w| w == "self-punishment"));
    }

    #[test]
    fn conflict_ceiling_caps_favorable_west() {
        let e = engine();
        // Same element + trine aspect, but a clash pair underneath.
        let a = combo(WesternSign::Aries, ChineseAnimal::Rat);
        let b = combo(WesternSign::Leo, ChineseAnimal::Horse);
        let result = e.score_with_years(a, b, 1984, 1985);
        assert!(result.score <= e.config().effective_conflict_ceiling());
    }

    #[test]
    fn promotion_can_be_disabled() {
        let config = EngineConfig {
            promote_identical_combo: Some(false),
            ..EngineConfig::default()
        };
        let e = ScoreEngine::new(config).with_overrides(OverrideTable::empty());
        let leo_dragon = combo(WesternSign::Leo, ChineseAnimal::Dragon);
        let result = e.score(leo_dragon, leo_dragon);
        assert_ne!(result.tier, Tier::Soulmate);
        assert_eq!(result.score, 68);
    }
}
