//! Static sign taxonomy tables.
//!
//! Element and modality per Western sign, trine group per Chinese animal,
//! and the Wu Xing year element cycle. All accessors are total functions
//! over the enum domain; no errors are possible here.

use synastry_core::constants::WUXING_ANCHOR_YEAR;
use synastry_core::types::{ChineseAnimal, Element, Modality, TrineGroup, WesternSign, WuXing};

/// Element ruling a Western sign.
pub fn element(sign: WesternSign) -> Element {
    use WesternSign::*;
    match sign {
        Aries | Leo | Sagittarius => Element::Fire,
        Taurus | Virgo | Capricorn => Element::Earth,
        Gemini | Libra | Aquarius => Element::Air,
        Cancer | Scorpio | Pisces => Element::Water,
    }
}

/// Modality of a Western sign.
pub fn modality(sign: WesternSign) -> Modality {
    use WesternSign::*;
    match sign {
        Aries | Cancer | Libra | Capricorn => Modality::Cardinal,
        Taurus | Leo | Scorpio | Aquarius => Modality::Fixed,
        Gemini | Virgo | Sagittarius | Pisces => Modality::Mutable,
    }
}

/// San He trine group of a Chinese animal.
pub fn trine_group(animal: ChineseAnimal) -> TrineGroup {
    use ChineseAnimal::*;
    match animal {
        Rat | Dragon | Monkey => TrineGroup::Visionaries,
        Ox | Snake | Rooster => TrineGroup::Strategists,
        Tiger | Horse | Dog => TrineGroup::Adventurers,
        Rabbit | Goat | Pig => TrineGroup::Artists,
    }
}

/// Animals whose self-pairing traditionally carries a self-punishment
/// pattern (zi xing).
pub fn is_self_punishing(animal: ChineseAnimal) -> bool {
    use ChineseAnimal::*;
    matches!(animal, Dragon | Horse | Rooster | Pig)
}

/// Wu Xing year element from a Gregorian birth year.
///
/// The element cycle repeats every ten years, each element covering two
/// consecutive years (Yang then Yin), anchored at 1984 = Wood.
pub fn year_element(year: i32) -> WuXing {
    const CYCLE: [WuXing; 10] = [
        WuXing::Wood,
        WuXing::Wood,
        WuXing::Fire,
        WuXing::Fire,
        WuXing::Earth,
        WuXing::Earth,
        WuXing::Metal,
        WuXing::Metal,
        WuXing::Water,
        WuXing::Water,
    ];
    let offset = (year - WUXING_ANCHOR_YEAR).rem_euclid(10) as usize;
    CYCLE[offset]
}

/// The element fed by `element` in the generating cycle.
pub fn wuxing_generates(element: WuXing) -> WuXing {
    match element {
        WuXing::Wood => WuXing::Fire,
        WuXing::Fire => WuXing::Earth,
        WuXing::Earth => WuXing::Metal,
        WuXing::Metal => WuXing::Water,
        WuXing::Water => WuXing::Wood,
    }
}

/// The element suppressed by `element` in the controlling cycle.
pub fn wuxing_controls(element: WuXing) -> WuXing {
    match element {
        WuXing::Wood => WuXing::Earth,
        WuXing::Earth => WuXing::Water,
        WuXing::Water => WuXing::Fire,
        WuXing::Fire => WuXing::Metal,
        WuXing::Metal => WuXing::Wood,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_element_rules_three_signs() {
        for target in [Element::Fire, Element::Earth, Element::Air, Element::Water] {
            let count = WesternSign::ALL
                .iter()
                .filter(|s| element(**s) == target)
                .count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn every_trine_group_has_three_animals() {
        for target in [
            TrineGroup::Visionaries,
            TrineGroup::Strategists,
            TrineGroup::Adventurers,
            TrineGroup::Artists,
        ] {
            let count = ChineseAnimal::ALL
                .iter()
                .filter(|a| trine_group(**a) == target)
                .count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn year_element_cycle_anchored_at_1984() {
        assert_eq!(year_element(1984), WuXing::Wood);
        assert_eq!(year_element(1985), WuXing::Wood);
        assert_eq!(year_element(1986), WuXing::Fire);
        assert_eq!(year_element(1990), WuXing::Metal);
        assert_eq!(year_element(1994), WuXing::Wood);
        // Negative offsets wrap correctly.
        assert_eq!(year_element(1983), WuXing::Water);
        assert_eq!(year_element(1974), WuXing::Wood);
    }

    #[test]
    fn generating_cycle_closes() {
        let mut e = WuXing::Wood;
        for _ in 0..5 {
            e = wuxing_generates(e);
        }
        assert_eq!(e, WuXing::Wood);
    }
}
