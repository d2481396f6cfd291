//! The precomputed 144x144 match matrix and its caching layer.
//!
//! The grid is loaded lazily through a [`MatrixSource`], memoized by
//! [`MatrixCache`] behind an explicit Unloaded/Loading/Loaded state
//! machine, and queried with a neutral fallback for gaps.

pub mod cache;
pub mod data;
pub mod record;
pub mod source;

pub use cache::MatrixCache;
pub use data::MatrixData;
pub use record::build_record;
pub use source::{DocumentMatrixSource, GeneratedMatrixSource, MatrixSource};
