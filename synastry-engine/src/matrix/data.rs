//! The loaded matrix grid.

use synastry_core::constants::COMBO_COUNT;
use synastry_core::types::{Combo, FxHashMap, MatchRecord};

/// A fully loaded match grid: one row per combo, each row holding a slot
/// for all 144 partner combos in enumeration order.
///
/// Slots are optional because a document-backed source may ship with
/// gaps; the cache answers those with a neutral fallback at lookup time.
#[derive(Debug, Default)]
pub struct MatrixData {
    rows: FxHashMap<Combo, Vec<Option<MatchRecord>>>,
}

impl MatrixData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one entry, growing the row as needed.
    pub fn insert(&mut self, user: Combo, partner: Combo, record: MatchRecord) {
        let row = self
            .rows
            .entry(user)
            .or_insert_with(|| vec![None; COMBO_COUNT]);
        row[partner.index()] = Some(record);
    }

    /// Direct lookup of one entry.
    pub fn get(&self, user: Combo, partner: Combo) -> Option<&MatchRecord> {
        self.rows.get(&user)?.get(partner.index())?.as_ref()
    }

    /// All present entries for one combo, in partner enumeration order.
    /// This order is the stable tie-break for match ranking.
    pub fn row(&self, user: Combo) -> Vec<(Combo, &MatchRecord)> {
        let Some(row) = self.rows.get(&user) else {
            return Vec::new();
        };
        row.iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|r| (Combo::from_index(i), r)))
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of present entries.
    pub fn entry_count(&self) -> usize {
        self.rows
            .values()
            .map(|row| row.iter().flatten().count())
            .sum()
    }

    /// Whether every combo has a full row.
    pub fn is_complete(&self) -> bool {
        self.row_count() == COMBO_COUNT && self.entry_count() == COMBO_COUNT * COMBO_COUNT
    }
}
