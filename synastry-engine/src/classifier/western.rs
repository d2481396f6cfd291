//! Western element relation and aspect classification.

use synastry_core::constants::ASPECT_STEP_DEGREES;
use synastry_core::types::{Aspect, Element, ElementRelation, WesternSign};

use crate::taxonomy;

/// Classify the relation between the elements of two Western signs.
///
/// Fixed 4x4 table: same element pairs, the two classical compatible
/// pairings (Fire-Air, Earth-Water), the two semi pairings (Fire-Earth,
/// Air-Water), and the two opposite pairings (Fire-Water, Air-Earth).
pub fn element_relation(a: WesternSign, b: WesternSign) -> ElementRelation {
    use Element::*;
    match (taxonomy::element(a), taxonomy::element(b)) {
        (x, y) if x == y => ElementRelation::Same,
        (Fire, Air) | (Air, Fire) | (Earth, Water) | (Water, Earth) => ElementRelation::Compatible,
        (Fire, Earth) | (Earth, Fire) | (Air, Water) | (Water, Air) => ElementRelation::Semi,
        (Fire, Water) | (Water, Fire) | (Air, Earth) | (Earth, Air) => ElementRelation::Opposite,
        // All sixteen cells are covered above; the compiler just can't see it.
        _ => unreachable!("element relation table is total"),
    }
}

/// Classify the aspect between two Western signs.
///
/// Angular distance is `|ordinal(a) - ordinal(b)| * 30` degrees,
/// normalized to [0, 180].
pub fn aspect(a: WesternSign, b: WesternSign) -> Aspect {
    let steps = (a.ordinal() as i16 - b.ordinal() as i16).unsigned_abs();
    let mut angle = steps * ASPECT_STEP_DEGREES;
    if angle > 180 {
        angle = 360 - angle;
    }
    match angle {
        120 => Aspect::Trine,
        60 => Aspect::Sextile,
        90 => Aspect::Square,
        180 => Aspect::Opposition,
        _ => Aspect::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use WesternSign::*;

    #[test]
    fn element_relation_matches_classical_table() {
        assert_eq!(element_relation(Aries, Leo), ElementRelation::Same);
        assert_eq!(element_relation(Aries, Gemini), ElementRelation::Compatible);
        assert_eq!(element_relation(Taurus, Cancer), ElementRelation::Compatible);
        assert_eq!(element_relation(Aries, Taurus), ElementRelation::Semi);
        assert_eq!(element_relation(Gemini, Cancer), ElementRelation::Semi);
        assert_eq!(element_relation(Aries, Cancer), ElementRelation::Opposite);
        assert_eq!(element_relation(Gemini, Taurus), ElementRelation::Opposite);
    }

    #[test]
    fn element_relation_symmetric_over_all_pairs() {
        for a in WesternSign::ALL {
            for b in WesternSign::ALL {
                assert_eq!(element_relation(a, b), element_relation(b, a));
            }
        }
    }

    #[test]
    fn aspect_angles() {
        assert_eq!(aspect(Aries, Leo), Aspect::Trine); // 120
        assert_eq!(aspect(Aries, Gemini), Aspect::Sextile); // 60
        assert_eq!(aspect(Aries, Cancer), Aspect::Square); // 90
        assert_eq!(aspect(Aries, Libra), Aspect::Opposition); // 180
        assert_eq!(aspect(Aries, Aries), Aspect::Other); // conjunction
        assert_eq!(aspect(Aries, Taurus), Aspect::Other); // 30
        // Wraps past 180: Aries..Aquarius is 10 steps -> 300 -> 60.
        assert_eq!(aspect(Aries, Aquarius), Aspect::Sextile);
    }

    #[test]
    fn aspect_symmetric_over_all_pairs() {
        for a in WesternSign::ALL {
            for b in WesternSign::ALL {
                assert_eq!(aspect(a, b), aspect(b, a));
            }
        }
    }
}
