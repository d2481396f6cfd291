//! Wu Xing year element relation.

use synastry_core::types::{WuXing, WuXingRelation};

use crate::taxonomy::{wuxing_controls, wuxing_generates};

/// Classify the relation between two Wu Xing year elements.
///
/// Either direction of the generating or controlling cycle counts, which
/// keeps the relation symmetric.
pub fn wuxing_relation(a: WuXing, b: WuXing) -> WuXingRelation {
    if a == b {
        return WuXingRelation::Same;
    }
    if wuxing_generates(a) == b || wuxing_generates(b) == a {
        return WuXingRelation::Generating;
    }
    if wuxing_controls(a) == b || wuxing_controls(b) == a {
        return WuXingRelation::Controlling;
    }
    WuXingRelation::Other
}
