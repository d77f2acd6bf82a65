use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{WorkInformation, WorkInformationId};
use crate::outcome::DomainError;

/// Repository record: the validated work information plus catalog metadata.
#[derive(Debug, Clone, Serialize)]
pub struct WorkInformationRecord {
    pub career_code: String,
    pub record: WorkInformation,
    pub submitted_on: NaiveDate,
}

impl WorkInformationRecord {
    pub fn view(&self) -> WorkInformationView {
        WorkInformationView {
            record_id: self.record.id.clone(),
            career_code: self.career_code.clone(),
            kind: self.record.kind().label(),
            description: self
                .record
                .description
                .as_ref()
                .map(|description| description.value().to_string()),
            submitted_on: self.submitted_on,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait CareerCatalogRepository: Send + Sync {
    fn insert(&self, record: WorkInformationRecord)
        -> Result<WorkInformationRecord, RepositoryError>;
    fn update(&self, record: WorkInformationRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &WorkInformationId)
        -> Result<Option<WorkInformationRecord>, RepositoryError>;
    /// Records for one career, in the order they were cataloged.
    fn for_career(&self, career_code: &str) -> Result<Vec<WorkInformationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already cataloged")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("record was changed by another writer")]
    Stale,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

impl RepositoryError {
    /// Maps storage failures onto the stable error-kind contract.
    pub fn to_domain(&self) -> DomainError {
        match self {
            RepositoryError::Conflict => {
                DomainError::duplicated("work information record already cataloged")
            }
            RepositoryError::NotFound => DomainError::not_found("work information record"),
            RepositoryError::Stale => {
                DomainError::concurrency("work information record was changed by another writer")
            }
            RepositoryError::Unavailable(detail) => {
                DomainError::failure(format!("repository unavailable: {detail}"))
            }
        }
    }
}

/// Sanitized representation of a cataloged record for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct WorkInformationView {
    pub record_id: WorkInformationId,
    pub career_code: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub submitted_on: NaiveDate,
}
