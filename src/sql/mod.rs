//! Safe SQL builder: identifiers are fixed or quoted, values are parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
