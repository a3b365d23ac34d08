//! FrameworkService: CRUD and search over an injected record store.

mod framework;
mod validation;
pub use framework::FrameworkService;
pub use validation::RequestValidator;
