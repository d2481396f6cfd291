//! Result types produced by the scoring engine and the match matrix.

use serde::{Deserialize, Serialize};

use crate::constants::NEUTRAL_FALLBACK_SCORE;

use super::collections::SmallVec4;

/// Compatibility tier, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Soulmate,
    Excellent,
    Harmonious,
    Neutral,
    OppositesAttract,
    Difficult,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Soulmate => "Soulmate",
            Self::Excellent => "Excellent",
            Self::Harmonious => "Harmonious",
            Self::Neutral => "Neutral",
            Self::OppositesAttract => "Opposites Attract",
            Self::Difficult => "Difficult",
        }
    }
}

/// Whether a result came from the computed pipeline or a curated override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Computed,
    Override,
}

/// Final result for one combo pair. Created fresh per query, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Overall score, always clamped to [0, 100].
    pub score: u8,
    pub tier: Tier,
    /// Positive theme tags gathered during classification.
    pub themes: SmallVec4<String>,
    /// Friction warning tags gathered during classification.
    pub warnings: SmallVec4<String>,
    pub source: ResultSource,
}

/// Display color for a match record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchColor {
    Green,
    Yellow,
    Red,
    Grey,
}

/// The six named sub-scores carried by every matrix record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub core_vibe: u8,
    pub chemistry: u8,
    pub communication: u8,
    pub lifestyle: u8,
    pub long_term: u8,
    pub growth: u8,
}

impl SubScores {
    /// All six sub-scores set to the same value.
    pub fn uniform(score: u8) -> Self {
        Self {
            core_vibe: score,
            chemistry: score,
            communication: score,
            lifestyle: score,
            long_term: score,
            growth: score,
        }
    }
}

/// One precomputed entry of the 144x144 match matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub overall: u8,
    pub summary: String,
    pub insight: Vec<String>,
    pub scores: SubScores,
    pub color: MatchColor,
}

impl MatchRecord {
    /// Neutral record answered for a matrix gap. The engine is advisory,
    /// so a missing entry degrades instead of failing the lookup.
    pub fn neutral_fallback() -> Self {
        Self {
            overall: NEUTRAL_FALLBACK_SCORE,
            summary: "Compatibility data not available for this combination.".to_string(),
            insight: Vec::new(),
            scores: SubScores::uniform(NEUTRAL_FALLBACK_SCORE),
            color: MatchColor::Grey,
        }
    }
}
