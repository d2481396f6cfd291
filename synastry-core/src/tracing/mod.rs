//! Tracing setup and structured span field names.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
