//! HTTP handlers for framework records.

pub mod framework;
pub use framework::*;
