//! SQLite-backed persistence for the client result cache.
//!
//! The cache itself is an in-memory, bounded, TTL'd list; this crate
//! adds write-through persistence so results survive restarts. Every
//! storage failure is caught, logged at warn, and swallowed; the cache
//! degrades to "no cache", it never fails a compatibility lookup.

pub mod connection;
pub mod migrations;
pub mod queries;
pub mod result_cache;

pub use result_cache::{CachedMatch, ResultCache};
