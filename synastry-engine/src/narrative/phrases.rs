//! The phrase bank.
//!
//! Short, fixed strings keyed by classification facts. Edits here change
//! display copy only; scoring never reads this module.

use synastry_core::types::{Element, PairClass, ChineseRelation, Tier};

/// Headline for an unordered element pairing.
pub fn element_headline(a: Element, b: Element) -> &'static str {
    use Element::*;
    match (a, b) {
        (Fire, Fire) => "Fire meets Fire: passion and drive, pace yourselves.",
        (Earth, Earth) => "Earth meets Earth: stability and follow-through.",
        (Air, Air) => "Air meets Air: fast ideas and easy flow.",
        (Water, Water) => "Water meets Water: deep feeling and easy empathy.",
        (Fire, Air) | (Air, Fire) => "Air feeds Fire: ideas turn into momentum.",
        (Earth, Water) | (Water, Earth) => "Water meets Earth: feelings find solid ground.",
        (Fire, Earth) | (Earth, Fire) => "Fire meets Earth: energy that needs pacing.",
        (Air, Water) | (Water, Air) => "Air meets Water: head and heart, mind the gap.",
        (Fire, Water) | (Water, Fire) => "Fire meets Water: steamy but volatile.",
        (Air, Earth) | (Earth, Air) => "Air meets Earth: plans and proof, align your timing.",
    }
}

/// One line describing the Chinese-layer pattern.
pub fn pairing_line(pairing: PairClass) -> &'static str {
    match pairing {
        PairClass::SameAnimal => "Same animal: like meets like, familiar but not automatic.",
        PairClass::Relation(tag) => match tag {
            ChineseRelation::SanHe => "Trine allies: kindred spirits with shared rhythm.",
            ChineseRelation::LiuHe => "Secret friends: a quiet, loyal affinity.",
            ChineseRelation::LiuChong => "Classic clash: strong pull that needs careful handling.",
            ChineseRelation::LiuHai => "Subtle harm pattern: small misreads can snowball.",
            ChineseRelation::Xing => "Punishment pattern: friction that demands patience.",
            ChineseRelation::Neutral => "No classical pattern: the rest of the chart decides.",
        },
    }
}

/// Tier summary, refined by whether the pair shares a trine and how the
/// Western elements relate.
pub fn tier_summary(tier: Tier, same_trine: bool, same_element: bool) -> &'static str {
    match tier {
        Tier::Soulmate if same_trine => {
            "A rare double alignment; both traditions point the same way."
        }
        Tier::Soulmate => "Top-shelf compatibility across both charts.",
        Tier::Excellent if same_element => {
            "An easy, energizing match with a shared native language."
        }
        Tier::Excellent => "Strong natural fit with room to grow into.",
        Tier::Harmonious => "A steady connection that mostly just works.",
        Tier::Neutral => "A workable mix; effort decides what this becomes.",
        Tier::OppositesAttract => "Magnetic opposites; sparks with sharp edges.",
        Tier::Difficult => "A demanding pairing that asks for real patience.",
    }
}
