//! Engine lifecycle events and the handler trait.

pub mod handler;
pub mod types;

pub use handler::{MatchEventHandler, NoopEventHandler};
pub use types::*;
