//! Shared vocabulary for the Synastry engine.
//! Signs, animals, combos, relation tags, and result types.

pub mod collections;
pub mod combo;
pub mod result;
pub mod signs;

pub use collections::{FxHashMap, FxHashSet, SmallVec4};
pub use combo::Combo;
pub use result::{
    CompatibilityResult, MatchColor, MatchRecord, ResultSource, SubScores, Tier,
};
pub use signs::{
    Aspect, ChineseAnimal, ChineseRelation, Element, ElementRelation, Modality, PairClass,
    TrineGroup, WesternSign, WuXing, WuXingRelation,
};
