use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::career::catalog::domain::{
    CareerSnapshot, WorkInformation, WorkInformationId, WorkInformationSubmission,
};
use crate::workflows::career::catalog::evaluation::{ScholarshipEvaluator, ScoringConfig};
use crate::workflows::career::catalog::intake::CatalogIntake;
use crate::workflows::career::catalog::repository::{
    CareerCatalogRepository, RepositoryError, WorkInformationRecord,
};
use crate::workflows::career::catalog::router::catalog_router;
use crate::workflows::career::catalog::service::CareerCatalogService;
use crate::workflows::career::catalog::values::DegreeTitle;

pub(super) fn scoring_config() -> ScoringConfig {
    ScoringConfig {
        steam_seed_percentage: 0.50,
        standard_seed_percentage: 0.20,
        base_scholarship: 2000.0,
        boosted_scholarship: 2500.0,
        boosted_country: "Costa Rica".to_string(),
        female_majority_bonus: 0.10,
        steam_work_life_bonus: 0.08,
        foreign_opportunity_bonus: 0.10,
        cs_industry_bonus: 0.05,
        prioritized_language: "English".to_string(),
        prioritized_language_bonus: 0.10,
        multilingual_bonus: 0.05,
    }
}

pub(super) fn evaluator(steam_equivalent: bool) -> ScholarshipEvaluator {
    ScholarshipEvaluator::new(scoring_config(), steam_equivalent)
}

pub(super) fn intake() -> CatalogIntake {
    CatalogIntake::default()
}

/// Runs a fixture submission through intake; fixtures are expected valid.
pub(super) fn validated(sequence: u32, submission: WorkInformationSubmission) -> WorkInformation {
    intake()
        .record_from_submission(WorkInformationId(format!("test-{sequence:03}")), submission)
        .expect("fixture submission is valid")
}

pub(super) fn enterprise(name: &str, country: &str) -> WorkInformationSubmission {
    WorkInformationSubmission::Enterprise {
        name: Some(name.to_string()),
        country: Some(country.to_string()),
        description: None,
    }
}

pub(super) fn opportunity(country: Option<&str>) -> WorkInformationSubmission {
    WorkInformationSubmission::Opportunity {
        country: country.map(str::to_string),
        description: None,
    }
}

pub(super) fn work_life(
    female_workers: Option<i64>,
    male_workers: Option<i64>,
) -> WorkInformationSubmission {
    WorkInformationSubmission::WorkLife {
        female_workers,
        male_workers,
        description: None,
    }
}

pub(super) fn industry(name: &str, cs_related: bool) -> WorkInformationSubmission {
    WorkInformationSubmission::Industry {
        name: Some(name.to_string()),
        cs_related,
        description: None,
    }
}

pub(super) fn recruitment(languages: &[&str]) -> WorkInformationSubmission {
    WorkInformationSubmission::Recruitment {
        steps: Some("Apply online, then a technical interview".to_string()),
        requisites: Some("Resume and portfolio".to_string()),
        languages_requested: languages.iter().map(|entry| entry.to_string()).collect(),
        description: None,
    }
}

pub(super) fn career(code: &str, steam_equivalent: bool) -> CareerSnapshot {
    CareerSnapshot {
        code: code.to_string(),
        steam_equivalent,
        degree_title: DegreeTitle::from_trusted("Bachelor"),
    }
}

pub(super) fn build_service() -> (
    CareerCatalogService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = CareerCatalogService::new(repository.clone(), scoring_config());
    (service, repository)
}

pub(super) fn catalog_router_with_service(
    service: CareerCatalogService<MemoryRepository>,
) -> axum::Router {
    catalog_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// In-memory adapter preserving catalog order, so scoring sees records in
/// the order they were submitted.
#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<WorkInformationRecord>>>,
}

impl CareerCatalogRepository for MemoryRepository {
    fn insert(
        &self,
        record: WorkInformationRecord,
    ) -> Result<WorkInformationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|stored| stored.record.id == record.record.id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: WorkInformationRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard
            .iter_mut()
            .find(|stored| stored.record.id == record.record.id)
        {
            Some(stored) => {
                *stored = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(
        &self,
        id: &WorkInformationId,
    ) -> Result<Option<WorkInformationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|stored| &stored.record.id == id).cloned())
    }

    fn for_career(&self, career_code: &str) -> Result<Vec<WorkInformationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|stored| stored.career_code == career_code)
            .cloned()
            .collect())
    }
}

pub(super) struct ConflictRepository;

impl CareerCatalogRepository for ConflictRepository {
    fn insert(
        &self,
        _record: WorkInformationRecord,
    ) -> Result<WorkInformationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: WorkInformationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Stale)
    }

    fn fetch(
        &self,
        _id: &WorkInformationId,
    ) -> Result<Option<WorkInformationRecord>, RepositoryError> {
        Ok(None)
    }

    fn for_career(
        &self,
        _career_code: &str,
    ) -> Result<Vec<WorkInformationRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl CareerCatalogRepository for UnavailableRepository {
    fn insert(
        &self,
        _record: WorkInformationRecord,
    ) -> Result<WorkInformationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: WorkInformationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _id: &WorkInformationId,
    ) -> Result<Option<WorkInformationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_career(
        &self,
        _career_code: &str,
    ) -> Result<Vec<WorkInformationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
