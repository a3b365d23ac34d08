//! InMemoryFrameworkStore - BTreeMap-backed store for tests and development.

use super::FrameworkStore;
use crate::error::AppError;
use crate::model::{Framework, FrameworkFields};
use crate::search::{sort_by_name, Predicate};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Rows {
    last_id: i64,
    by_id: BTreeMap<i64, Framework>,
}

/// In-memory store. Ids are assigned sequentially from 1 and never reused.
/// Clone-friendly via Arc.
#[derive(Clone, Default)]
pub struct InMemoryFrameworkStore {
    rows: Arc<RwLock<Rows>>,
}

impl InMemoryFrameworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Rows>, AppError> {
        self.rows
            .read()
            .map_err(|_| AppError::Storage("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Rows>, AppError> {
        self.rows
            .write()
            .map_err(|_| AppError::Storage("lock poisoned".into()))
    }
}

#[async_trait]
impl FrameworkStore for InMemoryFrameworkStore {
    async fn list_all(&self) -> Result<Vec<Framework>, AppError> {
        Ok(self.read()?.by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Framework>, AppError> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    async fn insert(&self, fields: FrameworkFields) -> Result<Framework, AppError> {
        let mut rows = self.write()?;
        rows.last_id += 1;
        let record = fields.with_id(rows.last_id);
        rows.by_id.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, fields: FrameworkFields) -> Result<Option<Framework>, AppError> {
        let mut rows = self.write()?;
        Ok(rows.by_id.get_mut(&id).map(|slot| {
            *slot = fields.with_id(id);
            slot.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Framework>, AppError> {
        Ok(self.write()?.by_id.remove(&id))
    }

    async fn search(&self, predicate: &Predicate) -> Result<Vec<Framework>, AppError> {
        let mut hits: Vec<Framework> = self
            .read()?
            .by_id
            .values()
            .filter(|f| predicate.matches(f))
            .cloned()
            .collect();
        sort_by_name(&mut hits);
        Ok(hits)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
