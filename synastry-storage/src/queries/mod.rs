//! Query modules for each cache table.

pub mod match_cache;
