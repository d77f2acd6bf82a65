use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use clap::Args;

use crate::infra::{default_scoring_config, InMemoryCatalogRepository};
use scholarworks::error::AppError;
use scholarworks::outcome::Errors;
use scholarworks::workflows::career::catalog::{
    CareerCatalogRepository, CareerCatalogService, CareerSnapshot, CatalogIntake, DegreeTitle,
    RepositoryError, ScholarshipAward, StoredWorkInformation, WorkInformationKind,
    WorkInformationRecord,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the per-record component trail behind each award
    #[arg(long)]
    pub(crate) list_components: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Work-information CSV export to score
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Treat the career as STEAM-equivalent
    #[arg(long)]
    pub(crate) steam: bool,
    /// Degree title of the career program
    #[arg(long, default_value = "Bachelor")]
    pub(crate) degree_title: String,
}

fn storage_error(error: RepositoryError) -> AppError {
    AppError::Catalog(Errors::of(error.to_domain()))
}

/// Seeds the catalog the way the persistence adapter would: stored rows
/// rehydrated through the trusted mapping, not through intake.
fn seed_catalog(repository: &InMemoryCatalogRepository) -> Result<(), AppError> {
    let intake = CatalogIntake::default();
    let today = Local::now().date_naive();

    let rows = vec![
        (
            "informatics",
            StoredWorkInformation {
                record_id: "work-000001".to_string(),
                kind: WorkInformationKind::Enterprise,
                name: Some("Tropical Software".to_string()),
                country: Some("Costa Rica".to_string()),
                female_workers: None,
                male_workers: None,
                cs_related: None,
                steps: None,
                requisites: None,
                languages_requested: Vec::new(),
                description: Some("Main regional employer for graduates".to_string()),
            },
        ),
        (
            "informatics",
            StoredWorkInformation {
                record_id: "work-000002".to_string(),
                kind: WorkInformationKind::Opportunity,
                name: None,
                country: Some("Germany".to_string()),
                female_workers: None,
                male_workers: None,
                cs_related: None,
                steps: None,
                requisites: None,
                languages_requested: Vec::new(),
                description: None,
            },
        ),
        (
            "informatics",
            StoredWorkInformation {
                record_id: "work-000003".to_string(),
                kind: WorkInformationKind::WorkLife,
                name: None,
                country: None,
                female_workers: Some(60),
                male_workers: Some(40),
                cs_related: None,
                steps: None,
                requisites: None,
                languages_requested: Vec::new(),
                description: None,
            },
        ),
        (
            "informatics",
            StoredWorkInformation {
                record_id: "work-000004".to_string(),
                kind: WorkInformationKind::Recruitment,
                name: None,
                country: None,
                female_workers: None,
                male_workers: None,
                cs_related: None,
                steps: Some("Apply online, then a technical interview".to_string()),
                requisites: Some("Resume and portfolio".to_string()),
                languages_requested: vec!["English".to_string(), "German".to_string()],
                description: None,
            },
        ),
        (
            "agronomy",
            StoredWorkInformation {
                record_id: "work-000005".to_string(),
                kind: WorkInformationKind::Industry,
                name: Some("Precision Agriculture".to_string()),
                country: None,
                female_workers: None,
                male_workers: None,
                cs_related: Some(true),
                steps: None,
                requisites: None,
                languages_requested: Vec::new(),
                description: None,
            },
        ),
    ];

    for (career_code, row) in rows {
        let record = intake.record_from_stored(row);
        repository
            .insert(WorkInformationRecord {
                career_code: career_code.to_string(),
                record,
                submitted_on: today,
            })
            .map_err(storage_error)?;
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryCatalogRepository::default());
    seed_catalog(&repository)?;
    let service = CareerCatalogService::new(repository, default_scoring_config());

    println!("Career scholarship catalog demo");

    for (code, steam_equivalent) in [("informatics", true), ("agronomy", false)] {
        let career = CareerSnapshot {
            code: code.to_string(),
            steam_equivalent,
            degree_title: DegreeTitle::from_trusted("Bachelor"),
        };

        let (records, tally) = service.records(code).map_err(service_error)?;
        let award = service.award(&career).map_err(service_error)?;

        println!("\nCareer: {code} (STEAM-equivalent: {steam_equivalent})");
        println!(
            "Cataloged records: {} ({} enterprises, {} opportunities, {} demographics, {} industries, {} recruitments)",
            records.len(),
            tally.enterprises,
            tally.opportunities,
            tally.work_life_reports,
            tally.industries,
            tally.recruitments
        );
        render_award(&award, args.list_components);
    }

    Ok(())
}

pub(crate) fn run_scholarship_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let degree_title = DegreeTitle::create(Some(&args.degree_title))?;

    let repository = Arc::new(InMemoryCatalogRepository::default());
    let service = CareerCatalogService::new(repository, default_scoring_config());

    let file = File::open(&args.csv)?;
    let report = service.import("estimate", file).map_err(service_error)?;

    println!("Scholarship estimate from {}", args.csv.display());
    println!(
        "Imported rows: {} accepted, {} rejected",
        report.accepted.len(),
        report.rejected.len()
    );
    for rejected in &report.rejected {
        for error in &rejected.errors {
            println!("- line {}: {}", rejected.line, error);
        }
    }

    let career = CareerSnapshot {
        code: "estimate".to_string(),
        steam_equivalent: args.steam,
        degree_title,
    };
    let award = service.award(&career).map_err(service_error)?;

    println!(
        "\nCareer: {} degree, STEAM-equivalent: {}",
        career.degree_title.value(),
        career.steam_equivalent
    );
    render_award(&award, true);

    Ok(())
}

fn render_award(award: &ScholarshipAward, list_components: bool) {
    println!(
        "Award: {:.2} (base {:.2}, percentage {:.0}%)",
        award.total_award,
        award.base_scholarship,
        award.percentage * 100.0
    );

    if list_components {
        if award.components.is_empty() {
            println!("Components: none");
        } else {
            println!("Components:");
            for component in &award.components {
                println!(
                    "- {} | +{:.0}% | {}",
                    component.factor.label(),
                    component.delta * 100.0,
                    component.note
                );
            }
        }
    }
}

fn service_error(
    error: scholarworks::workflows::career::catalog::CatalogServiceError,
) -> AppError {
    use scholarworks::workflows::career::catalog::CatalogServiceError;

    match error {
        CatalogServiceError::Validation(errors) => AppError::Catalog(errors),
        CatalogServiceError::Repository(repository_error) => storage_error(repository_error),
        CatalogServiceError::Import(csv_error) => AppError::Catalog(Errors::of(
            scholarworks::outcome::DomainError::failure(format!("csv import failed: {csv_error}")),
        )),
    }
}
