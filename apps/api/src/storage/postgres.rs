use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeRecord, ResumeUpdate};
use crate::storage::ResumeStore;

/// PostgreSQL-backed store over the `resumes` table.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create_resume(&self, resume: NewResume) -> Result<ResumeRecord, AppError> {
        let record = sqlx::query_as::<_, ResumeRecord>(
            r#"
            INSERT INTO resumes (id, job_role, file_name, original_text, analysis, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&resume.job_role)
        .bind(&resume.file_name)
        .bind(&resume.original_text)
        .bind(&resume.analysis)
        .bind(resume.created_at)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted resume {} ({})", record.id, record.file_name);
        Ok(record)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        let record = sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn update_resume(
        &self,
        id: Uuid,
        update: ResumeUpdate,
    ) -> Result<Option<ResumeRecord>, AppError> {
        let record = sqlx::query_as::<_, ResumeRecord>(
            r#"
            UPDATE resumes SET
                job_role      = COALESCE($2, job_role),
                file_name     = COALESCE($3, file_name),
                original_text = COALESCE($4, original_text),
                analysis      = COALESCE($5, analysis)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.job_role)
        .bind(&update.file_name)
        .bind(&update.original_text)
        .bind(&update.analysis)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
