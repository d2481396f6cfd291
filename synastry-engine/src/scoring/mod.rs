//! Score engine: base tables, tier mapping, curated overrides, and the
//! blending pipeline.

pub mod bases;
pub mod engine;
pub mod overrides;
pub mod tiers;

pub use engine::{PairFacts, ScoreEngine};
pub use overrides::{OverrideEntry, OverrideTable};
pub use tiers::tier_for;
