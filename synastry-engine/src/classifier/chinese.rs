//! Chinese animal pair classification.
//!
//! The traditional pair sets overlap (Tiger-Snake is both a harm and a
//! punishment pair, Snake-Monkey is both an ally and a punishment pair),
//! so classification runs one ordered rule list: first match wins.
//! Naive set membership would silently double-classify those pairs.

use synastry_core::types::{ChineseAnimal, ChineseRelation, PairClass};

use crate::taxonomy;

/// The six Liu He secret-ally pairs.
const LIU_HE_PAIRS: [(ChineseAnimal, ChineseAnimal); 6] = {
    use ChineseAnimal::*;
    [
        (Rat, Ox),
        (Tiger, Pig),
        (Rabbit, Dog),
        (Dragon, Rooster),
        (Snake, Monkey),
        (Horse, Goat),
    ]
};

/// The six Liu Chong opposing-branch pairs.
const LIU_CHONG_PAIRS: [(ChineseAnimal, ChineseAnimal); 6] = {
    use ChineseAnimal::*;
    [
        (Rat, Horse),
        (Ox, Goat),
        (Tiger, Monkey),
        (Rabbit, Rooster),
        (Dragon, Dog),
        (Snake, Pig),
    ]
};

/// The six Liu Hai harm pairs.
const LIU_HAI_PAIRS: [(ChineseAnimal, ChineseAnimal); 6] = {
    use ChineseAnimal::*;
    [
        (Rat, Goat),
        (Ox, Horse),
        (Tiger, Snake),
        (Rabbit, Dragon),
        (Monkey, Pig),
        (Rooster, Dog),
    ]
};

/// Xing punishment pairs: the Rat-Rabbit pair plus the two classical
/// triads expanded into pairs. Overlaps with the ally/clash/harm sets
/// are resolved by rule order, not removed from the table.
const XING_PAIRS: [(ChineseAnimal, ChineseAnimal); 7] = {
    use ChineseAnimal::*;
    [
        (Rat, Rabbit),
        (Tiger, Snake),
        (Tiger, Monkey),
        (Snake, Monkey),
        (Ox, Goat),
        (Goat, Dog),
        (Ox, Dog),
    ]
};

fn in_pair_set(
    a: ChineseAnimal,
    b: ChineseAnimal,
    set: &[(ChineseAnimal, ChineseAnimal)],
) -> bool {
    set.iter().any(|&(x, y)| (a, b) == (x, y) || (a, b) == (y, x))
}

/// Classify a Chinese animal pair.
///
/// A same-animal pair returns the distinct [`PairClass::SameAnimal`]
/// marker; it is never a relation tag, and no harmony or conflict set
/// is consulted for it. Distinct animals are checked in fixed priority
/// order:
///
/// 1. San He (same trine group)
/// 2. Liu He (six secret-ally pairs)
/// 3. Liu Chong (six opposing pairs)
/// 4. Liu Hai (six harm pairs)
/// 5. Xing (punishment pairs)
/// 6. Neutral
pub fn chinese_relation(a: ChineseAnimal, b: ChineseAnimal) -> PairClass {
    if a == b {
        return PairClass::SameAnimal;
    }

    // Ordered (predicate, tag) rules, evaluated top to bottom.
    let rules: [(&dyn Fn() -> bool, ChineseRelation); 5] = [
        (
            &|| taxonomy::trine_group(a) == taxonomy::trine_group(b),
            ChineseRelation::SanHe,
        ),
        (&|| in_pair_set(a, b, &LIU_HE_PAIRS), ChineseRelation::LiuHe),
        (
            &|| in_pair_set(a, b, &LIU_CHONG_PAIRS),
            ChineseRelation::LiuChong,
        ),
        (
            &|| in_pair_set(a, b, &LIU_HAI_PAIRS),
            ChineseRelation::LiuHai,
        ),
        (&|| in_pair_set(a, b, &XING_PAIRS), ChineseRelation::Xing),
    ];

    for (applies, tag) in rules {
        if applies() {
            return PairClass::Relation(tag);
        }
    }
    PairClass::Relation(ChineseRelation::Neutral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ChineseAnimal::*;

    #[test]
    fn same_animal_is_a_marker_not_a_tag() {
        for animal in ChineseAnimal::ALL {
            assert_eq!(chinese_relation(animal, animal), PairClass::SameAnimal);
        }
    }

    #[test]
    fn trine_pairs_classify_as_san_he() {
        assert_eq!(
            chinese_relation(Rat, Dragon),
            PairClass::Relation(ChineseRelation::SanHe)
        );
        assert_eq!(
            chinese_relation(Ox, Rooster),
            PairClass::Relation(ChineseRelation::SanHe)
        );
        assert_eq!(
            chinese_relation(Rabbit, Pig),
            PairClass::Relation(ChineseRelation::SanHe)
        );
    }

    #[test]
    fn overlapping_pairs_resolve_by_priority() {
        // Snake-Monkey is both an ally pair and a punishment pair;
        // liu_he outranks xing.
        assert_eq!(
            chinese_relation(Snake, Monkey),
            PairClass::Relation(ChineseRelation::LiuHe)
        );
        // Tiger-Monkey is both a clash pair and a punishment pair;
        // liu_chong outranks xing.
        assert_eq!(
            chinese_relation(Tiger, Monkey),
            PairClass::Relation(ChineseRelation::LiuChong)
        );
        // Tiger-Snake is both a harm pair and a punishment pair;
        // liu_hai outranks xing.
        assert_eq!(
            chinese_relation(Tiger, Snake),
            PairClass::Relation(ChineseRelation::LiuHai)
        );
        // Ox-Goat is both a clash pair and a punishment pair.
        assert_eq!(
            chinese_relation(Ox, Goat),
            PairClass::Relation(ChineseRelation::LiuChong)
        );
    }

    #[test]
    fn pure_punishment_pairs_classify_as_xing() {
        assert_eq!(
            chinese_relation(Rat, Rabbit),
            PairClass::Relation(ChineseRelation::Xing)
        );
        assert_eq!(
            chinese_relation(Goat, Dog),
            PairClass::Relation(ChineseRelation::Xing)
        );
        assert_eq!(
            chinese_relation(Ox, Dog),
            PairClass::Relation(ChineseRelation::Xing)
        );
    }

    #[test]
    fn unrelated_pairs_classify_as_neutral() {
        assert_eq!(
            chinese_relation(Rat, Tiger),
            PairClass::Relation(ChineseRelation::Neutral)
        );
        assert_eq!(
            chinese_relation(Dragon, Snake),
            PairClass::Relation(ChineseRelation::Neutral)
        );
    }

    #[test]
    fn classification_symmetric_over_all_pairs() {
        for a in ChineseAnimal::ALL {
            for b in ChineseAnimal::ALL {
                assert_eq!(chinese_relation(a, b), chinese_relation(b, a));
            }
        }
    }
}
