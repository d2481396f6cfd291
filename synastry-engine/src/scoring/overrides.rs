//! Curated override table.
//!
//! Overrides are hand-maintained exceptions with absolute precedence
//! over the computed pipeline. Each entry is stored once per unordered
//! pair, keyed by one side; lookup must try both orderings.

use serde::Deserialize;

use synastry_core::errors::ConfigError;
use synastry_core::types::{ChineseAnimal, Combo, FxHashMap, WesternSign};

/// One curated override for an unordered combo pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideEntry {
    pub combo: Combo,
    pub partner: Combo,
    /// Replacement overall score (0-100).
    pub score: u8,
    /// Replacement theme tags.
    pub themes: Vec<String>,
    /// Replacement warning tags.
    pub warnings: Vec<String>,
    /// Curator note explaining why the pair is special-cased.
    pub note: Option<String>,
}

/// Wire format for externally curated override sets.
#[derive(Debug, Deserialize)]
struct OverrideEntryDoc {
    combo: String,
    partner: String,
    score: u8,
    #[serde(default)]
    themes: Vec<String>,
    #[serde(default)]
    warnings: Vec<String>,
    #[serde(default)]
    note: Option<String>,
}

/// The override table, loaded once at startup.
#[derive(Debug, Default)]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
    index: FxHashMap<(Combo, Combo), usize>,
}

impl OverrideTable {
    /// An empty table; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in curated set shipped with the engine.
    pub fn builtin() -> Self {
        Self::from_entries(builtin_entries())
    }

    pub fn from_entries(entries: Vec<OverrideEntry>) -> Self {
        let mut index = FxHashMap::default();
        for (i, entry) in entries.iter().enumerate() {
            // Stored once per unordered pair; later duplicates win so a
            // user-supplied set can shadow the builtin one.
            index.insert((entry.combo, entry.partner), i);
        }
        Self { entries, index }
    }

    /// Parse a curated set from its JSON wire format.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let docs: Vec<OverrideEntryDoc> =
            serde_json::from_str(text).map_err(|e| ConfigError::ParseFailed {
                message: e.to_string(),
            })?;
        let mut entries = Vec::with_capacity(docs.len());
        for doc in docs {
            entries.push(OverrideEntry {
                combo: doc.combo.parse().map_err(bad_combo)?,
                partner: doc.partner.parse().map_err(bad_combo)?,
                score: doc.score.min(100),
                themes: doc.themes,
                warnings: doc.warnings,
                note: doc.note,
            });
        }
        Ok(Self::from_entries(entries))
    }

    /// Look up the override for a pair, trying both orderings; entries
    /// are stored once per unordered pair.
    pub fn get(&self, a: Combo, b: Combo) -> Option<&OverrideEntry> {
        self.index
            .get(&(a, b))
            .or_else(|| self.index.get(&(b, a)))
            .map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn bad_combo(err: synastry_core::errors::ValidationError) -> ConfigError {
    ConfigError::ValidationFailed {
        field: "overrides".into(),
        message: err.to_string(),
    }
}

/// Built-in curated exceptions, mirroring the product's editorial set.
fn builtin_entries() -> Vec<OverrideEntry> {
    use ChineseAnimal::*;
    use WesternSign::*;

    struct Raw(
        (WesternSign, ChineseAnimal),
        (WesternSign, ChineseAnimal),
        u8,
        &'static [&'static str],
        &'static [&'static str],
        &'static str,
    );

    const RAW: &[Raw] = &[
        Raw(
            (Leo, Dragon),
            (Aries, Tiger),
            96,
            &["double-fire", "power-couple"],
            &[],
            "editorial: flagship high-drama pairing",
        ),
        Raw(
            (Scorpio, Snake),
            (Pisces, Rabbit),
            91,
            &["deep-water", "intuitive-bond"],
            &[],
            "editorial: quiet depth pairing",
        ),
        Raw(
            (Capricorn, Ox),
            (Taurus, Rooster),
            93,
            &["builders", "steady-ground"],
            &[],
            "editorial: long-haul stability pairing",
        ),
        Raw(
            (Gemini, Monkey),
            (Aquarius, Rat),
            92,
            &["quicksilver", "idea-storm"],
            &[],
            "editorial: air-trine mischief pairing",
        ),
        Raw(
            (Virgo, Rooster),
            (Sagittarius, Horse),
            35,
            &[],
            &["critic-meets-wanderer", "timing-mismatch"],
            "editorial: support escalations skew low",
        ),
        Raw(
            (Cancer, Goat),
            (Capricorn, Ox),
            44,
            &[],
            &["duty-versus-comfort"],
            "editorial: softened from raw clash reading",
        ),
    ];

    RAW.iter()
        .map(|Raw(a, b, score, themes, warnings, note)| OverrideEntry {
            combo: Combo::new(a.0, a.1),
            partner: Combo::new(b.0, b.1),
            score: *score,
            themes: themes.iter().map(|s| s.to_string()).collect(),
            warnings: warnings.iter().map(|s| s.to_string()).collect(),
            note: Some(note.to_string()),
        })
        .collect()
}
