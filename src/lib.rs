//! JavaScript framework registry: CRUD and search over framework records, served over HTTP.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod search;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, StoreBackend};
pub use error::{AppError, ConfigError};
pub use migration::{ensure_database_exists, ensure_frameworks_table};
pub use model::{Framework, FrameworkDto, FrameworkFields};
pub use routes::{app, common_routes, framework_routes, FRAMEWORKS_PATH};
pub use search::{Clause, Predicate, SearchFilter};
pub use service::FrameworkService;
pub use state::AppState;
pub use store::{FrameworkStore, InMemoryFrameworkStore, PgFrameworkStore};
