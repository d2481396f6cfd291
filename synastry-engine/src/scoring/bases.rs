//! Base score tables and small adjustment deltas.
//!
//! The Chinese pattern does most of the work; Western element relation,
//! aspect, and Wu Xing only nudge the blend.

use synastry_core::constants::SAME_ANIMAL_BANDS;
use synastry_core::types::{
    Aspect, ChineseRelation, ElementRelation, WuXingRelation,
};

/// Base value for a Western element relation (0-100).
pub fn west_base(relation: ElementRelation) -> f64 {
    match relation {
        ElementRelation::Same => 80.0,
        ElementRelation::Compatible => 74.0,
        ElementRelation::Semi => 60.0,
        ElementRelation::Opposite => 42.0,
    }
}

/// Base value for a Chinese relation tag (0-100).
pub fn east_base(relation: ChineseRelation) -> f64 {
    match relation {
        ChineseRelation::SanHe => 82.0,
        ChineseRelation::LiuHe => 78.0,
        ChineseRelation::Neutral => 52.0,
        ChineseRelation::Xing => 36.0,
        ChineseRelation::LiuHai => 34.0,
        ChineseRelation::LiuChong => 30.0,
    }
}

/// Aspect nudge applied on top of the blend.
pub fn aspect_delta(aspect: Aspect) -> i32 {
    match aspect {
        Aspect::Trine => 4,
        Aspect::Sextile => 3,
        Aspect::Square => -4,
        Aspect::Opposition => -2,
        Aspect::Other => 0,
    }
}

/// Wu Xing nudge, applied only when both birth years are known.
pub fn wuxing_delta(relation: WuXingRelation) -> i32 {
    match relation {
        WuXingRelation::Generating => 4,
        WuXingRelation::Same => 2,
        WuXingRelation::Controlling => -4,
        WuXingRelation::Other => 0,
    }
}

/// Fixed same-animal score band keyed by the Western element relation.
///
/// This band replaces the blended score for a same-animal pair; it never
/// fires for a pair carrying a harmony or conflict tag, because a
/// same-animal pair classifies to the marker before any tag is consulted.
pub fn same_animal_band(relation: ElementRelation) -> u8 {
    match relation {
        ElementRelation::Same => SAME_ANIMAL_BANDS[0],
        ElementRelation::Compatible => SAME_ANIMAL_BANDS[1],
        ElementRelation::Semi => SAME_ANIMAL_BANDS[2],
        ElementRelation::Opposite => SAME_ANIMAL_BANDS[3],
    }
}
