//! Record store seam. The service talks to `dyn FrameworkStore`; PostgreSQL backs
//! production and the in-memory store backs tests and local runs.

mod memory;
mod postgres;

pub use memory::InMemoryFrameworkStore;
pub use postgres::PgFrameworkStore;

use crate::error::AppError;
use crate::model::{Framework, FrameworkFields};
use crate::search::Predicate;
use async_trait::async_trait;

#[async_trait]
pub trait FrameworkStore: Send + Sync {
    /// Every record, in id order.
    async fn list_all(&self) -> Result<Vec<Framework>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Framework>, AppError>;

    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, fields: FrameworkFields) -> Result<Framework, AppError>;

    /// Replace the mutable fields of `id`. `None` when no such record exists.
    async fn update(&self, id: i64, fields: FrameworkFields) -> Result<Option<Framework>, AppError>;

    /// Remove `id` and return the removed record, or `None`.
    async fn delete(&self, id: i64) -> Result<Option<Framework>, AppError>;

    /// Records matching `predicate`, sorted by name then id.
    async fn search(&self, predicate: &Predicate) -> Result<Vec<Framework>, AppError>;

    /// Cheap liveness probe used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;
}
