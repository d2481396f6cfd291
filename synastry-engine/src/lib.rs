//! Synastry scoring engine.
//!
//! Pure classification and scoring over (Western sign, Chinese animal)
//! combos, a curated override table, a deterministic narrative composer,
//! and the lazily loaded precomputed match matrix.
//!
//! Everything outside the matrix loader is synchronous and pure: no
//! shared mutable state, no hidden time or randomness, so identical
//! inputs always produce identical results.

pub mod classifier;
pub mod matrix;
pub mod narrative;
pub mod scoring;
pub mod taxonomy;

pub use matrix::{DocumentMatrixSource, GeneratedMatrixSource, MatrixCache, MatrixSource};
pub use narrative::{compose, Narrative};
pub use scoring::{OverrideEntry, OverrideTable, PairFacts, ScoreEngine};
