use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRecord, ResumeUpdate};
use crate::storage::ResumeStore;

/// Process-local store, used when no database is configured and in tests.
/// Records are lost on restart.
///
/// There is no size limit or eviction: every upload's full text and analysis
/// stay in memory until deleted or the process exits. Not meant for a
/// long-running deployment; configure `DATABASE_URL` there.
#[derive(Default)]
pub struct MemoryResumeStore {
    records: RwLock<HashMap<Uuid, ResumeRecord>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn create_resume(&self, resume: NewResume) -> Result<ResumeRecord, AppError> {
        let record = ResumeRecord::from_new(Uuid::new_v4(), resume);
        self.records
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update_resume(
        &self,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRecord>, AppError> {
        let mut records = self.records.write().await;
        Ok(records.get_mut(&id).map(|record| {
            record.apply(update);
            record.clone()
        }))
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}
