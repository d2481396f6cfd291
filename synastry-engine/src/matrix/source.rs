//! Matrix sources: where a grid comes from.

use rayon::prelude::*;

use synastry_core::constants::COMBO_COUNT;
use synastry_core::errors::LoadError;
use synastry_core::types::{Combo, FxHashMap, MatchRecord};

use crate::scoring::ScoreEngine;

use super::data::MatrixData;
use super::record::build_record;

/// A source of the precomputed match grid.
///
/// Behind a trait so the cache's load lifecycle can be exercised with
/// fake sources in tests (coalescing, failure reset, gaps).
pub trait MatrixSource: Send + Sync {
    /// Human-readable name, used in load events and logs.
    fn name(&self) -> &'static str;

    /// Produce the full grid. Called at most once per load attempt.
    fn load(&self) -> Result<MatrixData, LoadError>;
}

/// Generates the grid in-process from the score engine.
///
/// The dataset is small (144x144) and fully determined by the engine, so
/// generating it at load time needs no file or network I/O at all.
pub struct GeneratedMatrixSource {
    engine: ScoreEngine,
}

impl GeneratedMatrixSource {
    pub fn new(engine: ScoreEngine) -> Self {
        Self { engine }
    }
}

impl MatrixSource for GeneratedMatrixSource {
    fn name(&self) -> &'static str {
        "generated"
    }

    fn load(&self) -> Result<MatrixData, LoadError> {
        let combos: Vec<Combo> = Combo::all().collect();
        let rows: Vec<(Combo, Vec<MatchRecord>)> = combos
            .par_iter()
            .map(|&user| {
                let row = combos
                    .iter()
                    .map(|&partner| build_record(&self.engine, user, partner))
                    .collect();
                (user, row)
            })
            .collect();

        let mut data = MatrixData::new();
        for (user, row) in rows {
            for (partner, record) in Combo::all().zip(row) {
                data.insert(user, partner, record);
            }
        }
        debug_assert!(data.is_complete());
        Ok(data)
    }
}

/// Parses the legacy persisted format: twelve documents, one per
/// Western sign, each a map from combo key to a map of combo keys to
/// match records.
pub struct DocumentMatrixSource {
    documents: Vec<String>,
}

type SignDocument = FxHashMap<String, FxHashMap<String, MatchRecord>>;

impl DocumentMatrixSource {
    pub fn new(documents: Vec<String>) -> Self {
        Self { documents }
    }

    fn parse_into(&self, data: &mut MatrixData) -> Result<(), LoadError> {
        for text in &self.documents {
            let doc: SignDocument =
                serde_json::from_str(text).map_err(|e| LoadError::MalformedDocument {
                    message: e.to_string(),
                })?;
            for (user_key, partners) in doc {
                let user: Combo =
                    user_key
                        .parse()
                        .map_err(|e| LoadError::MalformedDocument {
                            message: format!("bad combo key {user_key:?}: {e}"),
                        })?;
                for (partner_key, record) in partners {
                    let partner: Combo =
                        partner_key
                            .parse()
                            .map_err(|e| LoadError::MalformedDocument {
                                message: format!("bad combo key {partner_key:?}: {e}"),
                            })?;
                    data.insert(user, partner, record);
                }
            }
        }
        Ok(())
    }
}

impl MatrixSource for DocumentMatrixSource {
    fn name(&self) -> &'static str {
        "documents"
    }

    fn load(&self) -> Result<MatrixData, LoadError> {
        let mut data = MatrixData::new();
        self.parse_into(&mut data)?;

        if data.row_count() < COMBO_COUNT {
            // Partial document sets are a packaging mistake, not a gap.
            return Err(LoadError::IncompleteGrid {
                expected: COMBO_COUNT,
                actual: data.row_count(),
            });
        }
        // Individual missing entries are tolerated here and answered
        // with a neutral fallback at lookup time.
        let expected = COMBO_COUNT * COMBO_COUNT;
        let actual = data.entry_count();
        if actual < expected {
            tracing::warn!(expected, actual, "matrix documents loaded with gaps");
        }
        Ok(data)
    }
}
