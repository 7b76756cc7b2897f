use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted analysis. `analysis` holds the serialized `ResumeAnalysis` JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub job_role: Option<String>,
    pub file_name: String,
    pub original_text: String,
    pub analysis: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for `ResumeStore::create_resume`.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub job_role: Option<String>,
    pub file_name: String,
    pub original_text: String,
    pub analysis: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct ResumeUpdate {
    pub job_role: Option<String>,
    pub file_name: Option<String>,
    pub original_text: Option<String>,
    pub analysis: Option<String>,
}

impl ResumeRecord {
    pub fn from_new(id: Uuid, new: NewResume) -> Self {
        Self {
            id,
            job_role: new.job_role,
            file_name: new.file_name,
            original_text: new.original_text,
            analysis: new.analysis,
            created_at: new.created_at,
        }
    }

    pub fn apply(&mut self, update: ResumeUpdate) {
        if let Some(job_role) = update.job_role {
            self.job_role = Some(job_role);
        }
        if let Some(file_name) = update.file_name {
            self.file_name = file_name;
        }
        if let Some(original_text) = update.original_text {
            self.original_text = original_text;
        }
        if let Some(analysis) = update.analysis {
            self.analysis = analysis;
        }
    }
}
