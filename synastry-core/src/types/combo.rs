//! Combo identity: one Western sign paired with one Chinese animal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{CHINESE_ANIMAL_COUNT, COMBO_COUNT};
use crate::errors::ValidationError;

use super::signs::{ChineseAnimal, WesternSign};

/// A (Western sign, Chinese animal) identity. 144 possible values.
///
/// The canonical string key is `"Leo-Dragon"`. Parsing the key is the
/// validation boundary for the whole engine: every unknown token fails
/// here, before any scoring happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Combo {
    pub west: WesternSign,
    pub east: ChineseAnimal,
}

impl Combo {
    pub fn new(west: WesternSign, east: ChineseAnimal) -> Self {
        Self { west, east }
    }

    /// Canonical string key, e.g. `"Leo-Dragon"`.
    pub fn key(self) -> String {
        format!("{}-{}", self.west.as_str(), self.east.as_str())
    }

    /// Dense index in the 144-combo enumeration (sign-major order).
    pub fn index(self) -> usize {
        self.west.ordinal() as usize * CHINESE_ANIMAL_COUNT + self.east.ordinal() as usize
    }

    /// Inverse of [`Combo::index`]. Panics only on an out-of-range index,
    /// which callers guarantee by construction.
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < COMBO_COUNT);
        Self {
            west: WesternSign::ALL[index / CHINESE_ANIMAL_COUNT],
            east: ChineseAnimal::ALL[index % CHINESE_ANIMAL_COUNT],
        }
    }

    /// Iterate all 144 combos in enumeration order.
    pub fn all() -> impl Iterator<Item = Combo> {
        (0..COMBO_COUNT).map(Combo::from_index)
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.west, self.east)
    }
}

impl FromStr for Combo {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (west, east) = s
            .split_once('-')
            .ok_or_else(|| ValidationError::MalformedComboKey {
                key: s.to_string(),
            })?;
        Ok(Self {
            west: west.trim().parse()?,
            east: east.trim().parse()?,
        })
    }
}
