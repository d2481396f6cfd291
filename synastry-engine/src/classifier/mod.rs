//! Pure relation classifiers.
//!
//! Every function here is symmetric (`f(a, b) == f(b, a)`) and total
//! over the enum domain.

pub mod chinese;
pub mod western;
pub mod wuxing;

pub use chinese::chinese_relation;
pub use western::{aspect, element_relation};
pub use wuxing::wuxing_relation;
