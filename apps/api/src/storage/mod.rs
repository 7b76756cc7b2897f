//! Resume persistence.
//!
//! The analysis flow only ever calls `create_resume`; the remaining methods
//! make up the general storage interface.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRecord, ResumeUpdate};

pub use memory::MemoryResumeStore;
pub use postgres::PgResumeStore;

/// Carried in `AppState` as `Arc<dyn ResumeStore>`.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create_resume(&self, resume: NewResume) -> Result<ResumeRecord, AppError>;

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;

    /// Returns `None` when no record has this id.
    async fn update_resume(
        &self,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRecord>, AppError>;

    /// Returns whether a record was removed.
    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError>;
}
