//! Western signs, Chinese animals, and the relation tags derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The twelve Western zodiac signs, in ecliptic order starting at Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl WesternSign {
    /// All signs in ecliptic order.
    pub const ALL: [WesternSign; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Position in the ecliptic order (0-11), used for aspect-angle math.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for WesternSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WesternSign {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownSign {
                token: s.to_string(),
            })
    }
}

/// The twelve Chinese zodiac animals, in branch order starting at Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl ChineseAnimal {
    /// All animals in branch order.
    pub const ALL: [ChineseAnimal; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Position in the twelve-year cycle (0-11).
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChineseAnimal {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|animal| animal.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownAnimal {
                token: s.to_string(),
            })
    }
}

/// The four classical Western elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// Western sign modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

/// The four San He trine groups of three animals each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrineGroup {
    /// Rat, Dragon, Monkey.
    Visionaries,
    /// Ox, Snake, Rooster.
    Strategists,
    /// Tiger, Horse, Dog.
    Adventurers,
    /// Rabbit, Goat, Pig.
    Artists,
}

impl TrineGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visionaries => "Visionaries",
            Self::Strategists => "Strategists",
            Self::Adventurers => "Adventurers",
            Self::Artists => "Artists",
        }
    }
}

/// The five Wu Xing year elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WuXing {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// Relation between two Western elements. Always symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// Same element (Fire-Fire, ...).
    Same,
    /// Fire-Air or Earth-Water.
    Compatible,
    /// Fire-Earth or Air-Water.
    Semi,
    /// Fire-Water or Air-Earth.
    Opposite,
}

impl ElementRelation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Compatible => "compatible",
            Self::Semi => "semi",
            Self::Opposite => "opposite",
        }
    }
}

/// Western aspect from the angular distance between two signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    /// 120 degrees.
    Trine,
    /// 60 degrees.
    Sextile,
    /// 90 degrees.
    Square,
    /// 180 degrees.
    Opposition,
    /// Conjunction or any other angle.
    Other,
}

/// Relation between two distinct Chinese animals.
///
/// Tags are mutually exclusive by the classifier's fixed priority order,
/// not by construction; several traditional pair sets overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChineseRelation {
    /// Same trine group (three harmonies).
    SanHe,
    /// Secret-ally pair (six harmonies).
    LiuHe,
    /// Opposing-branch pair (six conflicts).
    LiuChong,
    /// Undermining pair (six harms).
    LiuHai,
    /// Punishment pair.
    Xing,
    /// No classical pattern.
    Neutral,
}

impl ChineseRelation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SanHe => "san_he",
            Self::LiuHe => "liu_he",
            Self::LiuChong => "liu_chong",
            Self::LiuHai => "liu_hai",
            Self::Xing => "xing",
            Self::Neutral => "neutral",
        }
    }

    /// Whether this tag marks a harmonious pattern.
    pub fn is_favorable(self) -> bool {
        matches!(self, Self::SanHe | Self::LiuHe)
    }

    /// Whether this tag marks a conflict pattern.
    pub fn is_conflict(self) -> bool {
        matches!(self, Self::LiuChong | Self::LiuHai | Self::Xing)
    }
}

/// Classification of a Chinese animal pair.
///
/// A same-animal pair is a distinct marker, never a relation tag: the
/// scoring engine bands it separately and no harmony or conflict set
/// is ever consulted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairClass {
    /// Both animals are the same sign.
    SameAnimal,
    /// Two distinct animals with a relation tag.
    Relation(ChineseRelation),
}

impl PairClass {
    /// The relation tag, if this is not a same-animal pair.
    pub fn relation(self) -> Option<ChineseRelation> {
        match self {
            Self::SameAnimal => None,
            Self::Relation(tag) => Some(tag),
        }
    }
}

/// Relation between two Wu Xing year elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WuXingRelation {
    Same,
    /// One element feeds the other in the generating cycle.
    Generating,
    /// One element suppresses the other in the controlling cycle.
    Controlling,
    Other,
}
