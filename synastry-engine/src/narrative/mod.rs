//! Deterministic narrative composition.
//!
//! Pure phrase-bank lookup; no randomness, no generation. Identical
//! inputs always produce identical text, which is what makes display
//! output testable.

pub mod composer;
pub mod phrases;

pub use composer::{compose, Narrative};
