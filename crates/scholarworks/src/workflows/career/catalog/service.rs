use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;

use super::domain::{
    CareerSnapshot, CatalogTally, WorkInformation, WorkInformationId, WorkInformationSubmission,
};
use super::evaluation::{ScholarshipAward, ScholarshipEvaluator, ScoringConfig};
use super::import::{self, CsvImportReport, RejectedRow};
use super::intake::CatalogIntake;
use super::repository::{CareerCatalogRepository, RepositoryError, WorkInformationRecord};
use crate::outcome::Errors;

/// Service composing the intake guard, repository, and scoring rules.
pub struct CareerCatalogService<R> {
    intake: CatalogIntake,
    repository: Arc<R>,
    scoring: ScoringConfig,
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_record_id() -> WorkInformationId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    WorkInformationId(format!("work-{id:06}"))
}

impl<R> CareerCatalogService<R>
where
    R: CareerCatalogRepository + 'static,
{
    pub fn new(repository: Arc<R>, scoring: ScoringConfig) -> Self {
        Self::with_intake(CatalogIntake::default(), repository, scoring)
    }

    pub fn with_intake(intake: CatalogIntake, repository: Arc<R>, scoring: ScoringConfig) -> Self {
        Self {
            intake,
            repository,
            scoring,
        }
    }

    /// Validate and catalog a submission for the given career.
    pub fn submit(
        &self,
        career_code: &str,
        submission: WorkInformationSubmission,
    ) -> Result<WorkInformationRecord, CatalogServiceError> {
        let record = self
            .intake
            .record_from_submission(next_record_id(), submission)?;

        let stored = self.repository.insert(WorkInformationRecord {
            career_code: career_code.to_string(),
            record,
            submitted_on: Local::now().date_naive(),
        })?;
        Ok(stored)
    }

    /// Fetch one cataloged record for API responses.
    pub fn get(
        &self,
        id: &WorkInformationId,
    ) -> Result<WorkInformationRecord, CatalogServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// A career's records in catalog order, with their kind tally.
    pub fn records(
        &self,
        career_code: &str,
    ) -> Result<(Vec<WorkInformationRecord>, CatalogTally), CatalogServiceError> {
        let records = self.repository.for_career(career_code)?;
        let tally = CatalogTally::collect(records.iter().map(|stored| &stored.record));
        Ok((records, tally))
    }

    /// Derive the scholarship award for a career from its cataloged records.
    pub fn award(&self, career: &CareerSnapshot) -> Result<ScholarshipAward, CatalogServiceError> {
        let records: Vec<WorkInformation> = self
            .repository
            .for_career(&career.code)?
            .into_iter()
            .map(|stored| stored.record)
            .collect();

        Ok(ScholarshipEvaluator::evaluate(
            self.scoring.clone(),
            career.steam_equivalent,
            &records,
        ))
    }

    /// Bulk-catalog records from a CSV export. Rows that fail validation are
    /// reported, not silently dropped; storage failures abort the import.
    pub fn import<Source: Read>(
        &self,
        career_code: &str,
        reader: Source,
    ) -> Result<CsvImportReport, CatalogServiceError> {
        let rows = import::rows_from_reader(reader)?;
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for row in rows {
            let submission = match row.submission {
                Ok(submission) => submission,
                Err(errors) => {
                    rejected.push(RejectedRow {
                        line: row.line,
                        errors: errors.iter().cloned().collect(),
                    });
                    continue;
                }
            };
            match self.submit(career_code, submission) {
                Ok(record) => accepted.push(record.view()),
                Err(CatalogServiceError::Validation(errors)) => rejected.push(RejectedRow {
                    line: row.line,
                    errors: errors.iter().cloned().collect(),
                }),
                Err(other) => return Err(other),
            }
        }

        Ok(CsvImportReport { accepted, rejected })
    }
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error(transparent)]
    Validation(#[from] Errors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("csv import failed: {0}")]
    Import(#[from] csv::Error),
}
