//! Core types, errors, config, events, tracing, and constants for the
//! Synastry compatibility engine.
//!
//! This crate carries no scoring logic. It defines the shared vocabulary
//! (signs, animals, combos, results), the error taxonomy, configuration
//! with defaults, the event handler trait, and tracing setup. The engine
//! and storage crates build on top of it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
