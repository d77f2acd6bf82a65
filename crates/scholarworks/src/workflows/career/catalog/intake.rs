//! Intake guard producing validated [`WorkInformation`] records.
//!
//! The recoverable path takes a raw submission and aggregates every field
//! error into one failure outcome, so a single round trip reports every
//! problem. The trusted path maps stored rows and panics on violations,
//! since persisted input was validated before it was written.

use serde::{Deserialize, Serialize};

use super::domain::{
    Enterprise, Industry, Opportunity, Recruitment, WorkDetail, WorkInformation,
    WorkInformationId, WorkInformationKind, WorkInformationSubmission, WorkLife,
};
use super::values::{Country, Description, Language, Name, TextPolicy, WorkerCount};
use crate::outcome::{ErrorCollector, Outcome};

/// Guard responsible for producing validated records.
#[derive(Debug, Clone, Default)]
pub struct CatalogIntake {
    policy: TextPolicy,
}

impl CatalogIntake {
    pub fn with_policy(policy: TextPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &TextPolicy {
        &self.policy
    }

    /// Convert an inbound submission into a validated record. Field errors
    /// are aggregated, not reported first-failure-only.
    pub fn record_from_submission(
        &self,
        id: WorkInformationId,
        submission: WorkInformationSubmission,
    ) -> Outcome<WorkInformation> {
        match submission {
            WorkInformationSubmission::Enterprise {
                name,
                country,
                description,
            } => {
                let mut errors = ErrorCollector::new();
                let name = errors.absorb(Name::create(name.as_deref()));
                let country = errors.absorb(Country::create_bounded(
                    country.as_deref(),
                    self.policy.country_max(),
                ));
                let description = errors.absorb(self.optional_description(description.as_deref()));
                if let (Some(name), Some(country), Some(description)) = (name, country, description)
                {
                    return Ok(WorkInformation {
                        id,
                        description,
                        detail: WorkDetail::Enterprise(Enterprise { name, country }),
                    });
                }
                errors.into_failure()
            }
            WorkInformationSubmission::Opportunity {
                country,
                description,
            } => {
                let mut errors = ErrorCollector::new();
                let country = errors.absorb(self.optional_country(country.as_deref()));
                let description = errors.absorb(self.optional_description(description.as_deref()));
                if let (Some(country), Some(description)) = (country, description) {
                    return Ok(WorkInformation {
                        id,
                        description,
                        detail: WorkDetail::Opportunity(Opportunity { country }),
                    });
                }
                errors.into_failure()
            }
            WorkInformationSubmission::WorkLife {
                female_workers,
                male_workers,
                description,
            } => {
                let mut errors = ErrorCollector::new();
                let female_workers = errors.absorb(optional_count(female_workers));
                let male_workers = errors.absorb(optional_count(male_workers));
                let description = errors.absorb(self.optional_description(description.as_deref()));
                if let (Some(female_workers), Some(male_workers), Some(description)) =
                    (female_workers, male_workers, description)
                {
                    return Ok(WorkInformation {
                        id,
                        description,
                        detail: WorkDetail::WorkLife(WorkLife {
                            female_workers,
                            male_workers,
                        }),
                    });
                }
                errors.into_failure()
            }
            WorkInformationSubmission::Industry {
                name,
                cs_related,
                description,
            } => {
                let mut errors = ErrorCollector::new();
                let name = errors.absorb(Name::create(name.as_deref()));
                let description = errors.absorb(self.optional_description(description.as_deref()));
                if let (Some(name), Some(description)) = (name, description) {
                    return Ok(WorkInformation {
                        id,
                        description,
                        detail: WorkDetail::Industry(Industry { name, cs_related }),
                    });
                }
                errors.into_failure()
            }
            WorkInformationSubmission::Recruitment {
                steps,
                requisites,
                languages_requested,
                description,
            } => {
                let mut errors = ErrorCollector::new();
                let steps = errors.absorb(Description::create_bounded(
                    steps.as_deref(),
                    self.policy.description_max(),
                ));
                let requisites = errors.absorb(Description::create_bounded(
                    requisites.as_deref(),
                    self.policy.description_max(),
                ));
                let mut languages = Vec::with_capacity(languages_requested.len());
                for raw in &languages_requested {
                    if let Some(language) = errors.absorb(Language::create(Some(raw))) {
                        languages.push(language);
                    }
                }
                let description = errors.absorb(self.optional_description(description.as_deref()));
                if let (Some(steps), Some(requisites), Some(description), true) =
                    (steps, requisites, description, errors.is_clean())
                {
                    return Ok(WorkInformation {
                        id,
                        description,
                        detail: WorkDetail::Recruitment(Recruitment {
                            steps,
                            requisites,
                            languages_requested: languages,
                        }),
                    });
                }
                errors.into_failure()
            }
        }
    }

    /// Trusted mapping for rows the persistence adapter hands back. A rule
    /// violation here is a data-integrity bug, so it aborts instead of
    /// returning a recoverable outcome. Never feed this untrusted input.
    pub fn record_from_stored(&self, row: StoredWorkInformation) -> WorkInformation {
        let id = WorkInformationId(row.record_id.clone());
        let description = row.description.as_deref().map(Description::from_trusted);
        let detail = match row.kind {
            WorkInformationKind::Enterprise => WorkDetail::Enterprise(Enterprise {
                name: Name::from_trusted(&required_column(&row, row.name.as_deref(), "name")),
                country: Country::from_trusted(&required_column(
                    &row,
                    row.country.as_deref(),
                    "country",
                )),
            }),
            WorkInformationKind::Opportunity => WorkDetail::Opportunity(Opportunity {
                country: row.country.as_deref().map(Country::from_trusted),
            }),
            WorkInformationKind::WorkLife => WorkDetail::WorkLife(WorkLife {
                female_workers: row.female_workers.map(WorkerCount::from_trusted),
                male_workers: row.male_workers.map(WorkerCount::from_trusted),
            }),
            WorkInformationKind::Industry => WorkDetail::Industry(Industry {
                name: Name::from_trusted(&required_column(&row, row.name.as_deref(), "name")),
                cs_related: row.cs_related.unwrap_or(false),
            }),
            WorkInformationKind::Recruitment => WorkDetail::Recruitment(Recruitment {
                steps: Description::from_trusted(&required_column(
                    &row,
                    row.steps.as_deref(),
                    "steps",
                )),
                requisites: Description::from_trusted(&required_column(
                    &row,
                    row.requisites.as_deref(),
                    "requisites",
                )),
                languages_requested: row
                    .languages_requested
                    .iter()
                    .map(|raw| Language::from_trusted(raw))
                    .collect(),
            }),
        };

        WorkInformation {
            id,
            description,
            detail,
        }
    }

    fn optional_description(&self, raw: Option<&str>) -> Outcome<Option<Description>> {
        match raw {
            None => Ok(None),
            Some(value) => {
                Description::create_bounded(Some(value), self.policy.description_max()).map(Some)
            }
        }
    }

    fn optional_country(&self, raw: Option<&str>) -> Outcome<Option<Country>> {
        match raw {
            None => Ok(None),
            Some(value) => {
                Country::create_bounded(Some(value), self.policy.country_max()).map(Some)
            }
        }
    }
}

fn optional_count(raw: Option<i64>) -> Outcome<Option<WorkerCount>> {
    match raw {
        None => Ok(None),
        Some(value) => WorkerCount::create(Some(value)).map(Some),
    }
}

fn required_column(row: &StoredWorkInformation, value: Option<&str>, column: &str) -> String {
    match value {
        Some(value) => value.to_string(),
        None => panic!(
            "stored {} row '{}' is missing required column '{}'",
            row.kind.label(),
            row.record_id,
            column
        ),
    }
}

/// Row shape the persistence adapter stores and returns. Columns are raw;
/// only the trusted mapping above may turn one into a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredWorkInformation {
    pub record_id: String,
    pub kind: WorkInformationKind,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub female_workers: Option<i64>,
    #[serde(default)]
    pub male_workers: Option<i64>,
    #[serde(default)]
    pub cs_related: Option<bool>,
    #[serde(default)]
    pub steps: Option<String>,
    #[serde(default)]
    pub requisites: Option<String>,
    #[serde(default)]
    pub languages_requested: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}
