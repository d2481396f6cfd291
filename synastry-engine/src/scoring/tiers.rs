//! Score-to-tier mapping.

use synastry_core::constants::{
    TIER_EXCELLENT_MIN, TIER_HARMONIOUS_MIN, TIER_NEUTRAL_MIN, TIER_OPPOSITES_MIN,
    TIER_SOULMATE_MIN,
};
use synastry_core::types::{ChineseRelation, Tier};

/// Map a final score plus the accumulated relation tags to a tier.
///
/// `promote_identical` is true only for a fully identical combo pair
/// with the identical-combo promotion enabled; it wins over every
/// threshold, but never over a curated override (callers pass false on
/// the override path).
pub fn tier_for(
    score: u8,
    east_tag: Option<ChineseRelation>,
    promote_identical: bool,
) -> Tier {
    if promote_identical {
        return Tier::Soulmate;
    }
    if score >= TIER_SOULMATE_MIN {
        return Tier::Soulmate;
    }
    if score >= TIER_EXCELLENT_MIN {
        return Tier::Excellent;
    }
    if score >= TIER_HARMONIOUS_MIN {
        return Tier::Harmonious;
    }
    // A clash pair that still scores decently reads as magnetic
    // opposites rather than plain neutral.
    if east_tag == Some(ChineseRelation::LiuChong) && score >= TIER_OPPOSITES_MIN {
        return Tier::OppositesAttract;
    }
    if score >= TIER_NEUTRAL_MIN {
        return Tier::Neutral;
    }
    Tier::Difficult
}
