//! FrameworkService: validation, persistence and entity/DTO mapping for framework records.

use crate::error::AppError;
use crate::model::FrameworkDto;
use crate::search::SearchFilter;
use crate::service::RequestValidator;
use crate::store::FrameworkStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct FrameworkService {
    store: Arc<dyn FrameworkStore>,
}

impl FrameworkService {
    pub fn new(store: Arc<dyn FrameworkStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn FrameworkStore> {
        &self.store
    }

    /// All records. Order is not part of the contract.
    pub async fn list_all(&self) -> Result<Vec<FrameworkDto>, AppError> {
        let rows = self.store.list_all().await?;
        Ok(rows.into_iter().map(FrameworkDto::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<Option<FrameworkDto>, AppError> {
        Ok(self.store.find_by_id(id).await?.map(FrameworkDto::from))
    }

    /// Validate and persist a new record. A body carrying an id is rejected before
    /// the store is touched.
    pub async fn create(&self, dto: FrameworkDto) -> Result<FrameworkDto, AppError> {
        let fields = RequestValidator::validate(dto)?;
        let created = self.store.insert(fields).await?;
        tracing::info!(id = created.id, name = %created.name, "framework created");
        Ok(created.into())
    }

    /// Replace every mutable field of `id`. Validation runs before the existence check.
    pub async fn edit(&self, id: i64, dto: FrameworkDto) -> Result<Option<FrameworkDto>, AppError> {
        let fields = RequestValidator::validate(dto)?;
        let updated = self.store.update(id, fields).await?;
        match &updated {
            Some(f) => tracing::info!(id, name = %f.name, "framework updated"),
            None => tracing::debug!(id, "edit of missing framework"),
        }
        Ok(updated.map(FrameworkDto::from))
    }

    pub async fn delete(&self, id: i64) -> Result<Option<FrameworkDto>, AppError> {
        let deleted = self.store.delete(id).await?;
        if deleted.is_some() {
            tracing::info!(id, "framework deleted");
        }
        Ok(deleted.map(FrameworkDto::from))
    }

    /// Records matching every supplied criterion, sorted by name.
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<FrameworkDto>, AppError> {
        let predicate = filter.predicate();
        tracing::debug!(clauses = predicate.clauses.len(), "search");
        let rows = self.store.search(&predicate).await?;
        Ok(rows.into_iter().map(FrameworkDto::from).collect())
    }
}
