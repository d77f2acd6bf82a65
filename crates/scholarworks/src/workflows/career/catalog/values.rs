//! Validated value objects for work-information records.
//!
//! Each wrapper enforces its own invariant at construction, so a value that
//! exists is valid. `create` is the recoverable path for untrusted input;
//! `from_trusted` re-runs the same rule but treats a violation as a
//! data-integrity panic, and is reserved for the persistence mapping.

use serde::Serialize;

use crate::outcome::{DomainError, Outcome};

pub const NAME_MAX: usize = 100;

const DEFAULT_DESCRIPTION_MAX: usize = 500;
const DEFAULT_COUNTRY_MAX: usize = 100;

/// Languages a recruitment process may request. Matching is
/// case-insensitive; the canonical spelling below is what gets stored.
pub const RECOGNIZED_LANGUAGES: [&str; 31] = [
    "English",
    "Spanish",
    "French",
    "German",
    "Portuguese",
    "Italian",
    "Dutch",
    "Mandarin",
    "Cantonese",
    "Japanese",
    "Korean",
    "Russian",
    "Arabic",
    "Hindi",
    "Bengali",
    "Punjabi",
    "Turkish",
    "Vietnamese",
    "Thai",
    "Indonesian",
    "Malay",
    "Swahili",
    "Polish",
    "Ukrainian",
    "Czech",
    "Swedish",
    "Norwegian",
    "Danish",
    "Finnish",
    "Greek",
    "Hebrew",
];

/// Academic titles a career program can confer.
pub const DEGREE_TITLES: [&str; 7] = [
    "Diploma",
    "Technician",
    "Associate",
    "Bachelor",
    "Licentiate",
    "Master",
    "Doctorate",
];

/// Length bounds for free-form text, carried as policy rather than
/// hard-coded at call sites.
#[derive(Debug, Clone)]
pub struct TextPolicy {
    description_max: usize,
    country_max: usize,
}

impl TextPolicy {
    pub fn new(description_max: usize, country_max: usize) -> Self {
        Self {
            description_max: if description_max == 0 {
                DEFAULT_DESCRIPTION_MAX
            } else {
                description_max
            },
            country_max: if country_max == 0 {
                DEFAULT_COUNTRY_MAX
            } else {
                country_max
            },
        }
    }

    pub fn description_max(&self) -> usize {
        self.description_max
    }

    pub fn country_max(&self) -> usize {
        self.country_max
    }
}

impl Default for TextPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DESCRIPTION_MAX, DEFAULT_COUNTRY_MAX)
    }
}

fn validated_text(field: &str, raw: Option<&str>, max: usize) -> Outcome<String> {
    let value = raw.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(DomainError::required(field).into());
    }
    if value.chars().count() > max {
        return Err(DomainError::max_length(field, max).into());
    }
    Ok(value.to_string())
}

fn trusted<T>(outcome: Outcome<T>) -> T {
    outcome.unwrap_or_else(|errors| panic!("trusted value violates catalog invariants: {errors}"))
}

/// Display name of an enterprise or industry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn create(raw: Option<&str>) -> Outcome<Self> {
        validated_text("name", raw, NAME_MAX).map(Self)
    }

    pub fn from_trusted(raw: &str) -> Self {
        trusted(Self::create(Some(raw)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Free-form descriptive text with a policy-supplied bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn create(raw: Option<&str>) -> Outcome<Self> {
        Self::create_bounded(raw, DEFAULT_DESCRIPTION_MAX)
    }

    pub fn create_bounded(raw: Option<&str>, max: usize) -> Outcome<Self> {
        validated_text("description", raw, max).map(Self)
    }

    pub fn from_trusted(raw: &str) -> Self {
        trusted(Self::create(Some(raw)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Country a record points at. Non-empty bounded text; the catalog does not
/// hold a country allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Country(String);

impl Country {
    pub fn create(raw: Option<&str>) -> Outcome<Self> {
        Self::create_bounded(raw, DEFAULT_COUNTRY_MAX)
    }

    pub fn create_bounded(raw: Option<&str>, max: usize) -> Outcome<Self> {
        validated_text("country", raw, max).map(Self)
    }

    pub fn from_trusted(raw: &str) -> Self {
        trusted(Self::create(Some(raw)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Non-negative head count for workplace demographics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WorkerCount(u32);

impl WorkerCount {
    pub fn create(raw: Option<i64>) -> Outcome<Self> {
        let Some(value) = raw else {
            return Err(DomainError::required("worker count").into());
        };
        if value < 0 {
            return Err(DomainError::invalid_number(format!(
                "worker count cannot be negative (got {value})"
            ))
            .into());
        }
        u32::try_from(value).map(Self).map_err(|_| {
            DomainError::invalid_number(format!("worker count {value} is out of range")).into()
        })
    }

    pub fn from_trusted(raw: i64) -> Self {
        trusted(Self::create(Some(raw)))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

/// Language drawn from the fixed allow-list, stored in canonical spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub fn create(raw: Option<&str>) -> Outcome<Self> {
        let value = validated_text("language", raw, NAME_MAX)?;
        match RECOGNIZED_LANGUAGES
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(&value))
        {
            Some(canonical) => Ok(Self((*canonical).to_string())),
            None => Err(DomainError::invalid_information(format!(
                "'{value}' is not a recognized language"
            ))
            .into()),
        }
    }

    pub fn from_trusted(raw: &str) -> Self {
        trusted(Self::create(Some(raw)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Academic title drawn from the fixed allow-list, stored in canonical
/// spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DegreeTitle(String);

impl DegreeTitle {
    pub fn create(raw: Option<&str>) -> Outcome<Self> {
        let value = validated_text("degree title", raw, NAME_MAX)?;
        match DEGREE_TITLES
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(&value))
        {
            Some(canonical) => Ok(Self((*canonical).to_string())),
            None => Err(DomainError::invalid_information(format!(
                "'{value}' is not a recognized degree title"
            ))
            .into()),
        }
    }

    pub fn from_trusted(raw: &str) -> Self {
        trusted(Self::create(Some(raw)))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
