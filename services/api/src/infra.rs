use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use scholarworks::workflows::career::catalog::{
    CareerCatalogRepository, RepositoryError, ScoringConfig, WorkInformationId,
    WorkInformationRecord,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory adapter that preserves catalog order per career, so scoring
/// sees records in the order they were submitted.
#[derive(Default, Clone)]
pub(crate) struct InMemoryCatalogRepository {
    records: Arc<Mutex<Vec<WorkInformationRecord>>>,
}

impl CareerCatalogRepository for InMemoryCatalogRepository {
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

pub(crate) fn default_scoring_config() -> ScoringConfig {
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
