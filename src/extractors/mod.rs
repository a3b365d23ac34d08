//! Request extractors that reject with `AppError` (400) instead of axum's defaults.

pub mod json;
pub mod search;
pub use json::JsonBody;
pub use search::{parse_search_params, SearchQuery};
