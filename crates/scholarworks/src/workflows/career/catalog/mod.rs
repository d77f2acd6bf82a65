//! Work-information cataloging and scholarship scoring for careers.
//!
//! Records enter through the intake guard (or the trusted stored-row
//! mapping), live behind the repository seam, and are folded into a
//! scholarship award by the evaluation module.

pub mod domain;
pub mod evaluation;
pub mod import;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;
pub mod values;

#[cfg(test)]
mod tests;

pub use domain::{
    CareerSnapshot, CatalogTally, Enterprise, Industry, Opportunity, Recruitment, WorkDetail,
    WorkInformation, WorkInformationId, WorkInformationKind, WorkInformationSubmission,
    WorkInformationVisitor, WorkLife,
};
pub use evaluation::{ScholarshipAward, ScholarshipEvaluator, ScoreComponent, ScoringConfig};
pub use import::{CsvImportReport, RejectedRow};
pub use intake::{CatalogIntake, StoredWorkInformation};
pub use repository::{
    CareerCatalogRepository, RepositoryError, WorkInformationRecord, WorkInformationView,
};
pub use router::catalog_router;
pub use service::{CareerCatalogService, CatalogServiceError};
pub use values::{
    Country, DegreeTitle, Description, Language, Name, TextPolicy, WorkerCount,
    DEGREE_TITLES, RECOGNIZED_LANGUAGES,
};
