//! CSV bulk intake for work-information records.
//!
//! Rows are parsed into raw submissions only; every row still goes through
//! the intake guard, so the importer can never smuggle an unvalidated record
//! into the catalog. Rejected rows are reported with their full error list.

use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::WorkInformationSubmission;
use super::repository::WorkInformationView;
use crate::outcome::{DomainError, Outcome};

/// One parsed CSV line: the submission it maps to, or why it cannot map.
#[derive(Debug)]
pub struct CsvRow {
    pub line: u64,
    pub submission: Outcome<WorkInformationSubmission>,
}

/// Import summary: cataloged records and the rows that failed validation.
#[derive(Debug, Serialize)]
pub struct CsvImportReport {
    pub accepted: Vec<WorkInformationView>,
    pub rejected: Vec<RejectedRow>,
}

#[derive(Debug, Serialize)]
pub struct RejectedRow {
    pub line: u64,
    pub errors: Vec<DomainError>,
}

/// Parses submissions out of a CSV export. Structural CSV problems fail the
/// whole import; per-row content problems land in that row's outcome.
pub fn rows_from_reader<R: Read>(reader: R) -> Result<Vec<CsvRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for (index, record) in csv_reader.deserialize::<CatalogCsvRow>().enumerate() {
        // Header occupies the first line of the file.
        let line = (index + 2) as u64;
        let row = record?;
        rows.push(CsvRow {
            line,
            submission: row.into_submission(),
        });
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct CatalogCsvRow {
    kind: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    country: Option<String>,
    #[serde(default)]
    female_workers: Option<i64>,
    #[serde(default)]
    male_workers: Option<i64>,
    #[serde(default)]
    cs_related: Option<bool>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    steps: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    requisites: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    languages_requested: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl CatalogCsvRow {
    fn into_submission(self) -> Outcome<WorkInformationSubmission> {
        let languages_requested = self
            .languages_requested
            .as_deref()
            .map(split_languages)
            .unwrap_or_default();

        match self.kind.to_ascii_lowercase().as_str() {
            "enterprise" => Ok(WorkInformationSubmission::Enterprise {
                name: self.name,
                country: self.country,
                description: self.description,
            }),
            "opportunity" => Ok(WorkInformationSubmission::Opportunity {
                country: self.country,
                description: self.description,
            }),
            "work_life" => Ok(WorkInformationSubmission::WorkLife {
                female_workers: self.female_workers,
                male_workers: self.male_workers,
                description: self.description,
            }),
            "industry" => Ok(WorkInformationSubmission::Industry {
                name: self.name,
                cs_related: self.cs_related.unwrap_or(false),
                description: self.description,
            }),
            "recruitment" => Ok(WorkInformationSubmission::Recruitment {
                steps: self.steps,
                requisites: self.requisites,
                languages_requested,
                description: self.description,
            }),
            other => Err(DomainError::invalid_information(format!(
                "'{other}' is not a work information kind"
            ))
            .into()),
        }
    }
}

fn split_languages(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
