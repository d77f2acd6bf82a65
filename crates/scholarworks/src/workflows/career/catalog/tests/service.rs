use std::io::Cursor;
use std::sync::Arc;

use super::common::*;
use crate::workflows::career::catalog::domain::{WorkInformationId, WorkInformationKind};
use crate::workflows::career::catalog::repository::CareerCatalogRepository;
use crate::workflows::career::catalog::service::{CareerCatalogService, CatalogServiceError};

#[test]
fn submit_catalogs_a_validated_record() {
    let (service, repository) = build_service();

    let record = service
        .submit("informatics", enterprise("Tropical Software", "Costa Rica"))
        .expect("submission should succeed");

    assert!(record.record.id.0.starts_with("work-"));
    assert_eq!(record.career_code, "informatics");
    assert_eq!(record.record.kind(), WorkInformationKind::Enterprise);

    let stored = repository
        .fetch(&record.record.id)
        .expect("repo fetch")
        .expect("record present");
    assert_eq!(stored.record, record.record);
}

#[test]
fn submit_surfaces_validation_errors() {
    let (service, _) = build_service();

    match service.submit("informatics", work_life(Some(-1), Some(3))) {
        Err(CatalogServiceError::Validation(errors)) => {
            assert_eq!(errors.primary().code, "Validation.InvalidNumber");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn submit_surfaces_repository_conflicts() {
    let service = CareerCatalogService::new(Arc::new(ConflictRepository), scoring_config());

    match service.submit("informatics", industry("Software Consulting", true)) {
        Err(CatalogServiceError::Repository(error)) => {
            assert_eq!(error.to_domain().code, "Conflict.Duplicated");
        }
        other => panic!("expected repository conflict, got {other:?}"),
    }
}

#[test]
fn get_reports_missing_records_as_not_found() {
    let (service, _) = build_service();

    match service.get(&WorkInformationId("work-999999".to_string())) {
        Err(CatalogServiceError::Repository(error)) => {
            assert_eq!(error.to_domain().code, "General.NotFound");
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn records_include_a_kind_tally() {
    let (service, _) = build_service();
    service
        .submit("informatics", enterprise("Fernwerk", "Germany"))
        .expect("enterprise stored");
    service
        .submit("informatics", recruitment(&["English", "Spanish"]))
        .expect("recruitment stored");
    service
        .submit("agronomy", industry("Agriculture", false))
        .expect("other career stored");

    let (records, tally) = service.records("informatics").expect("records listed");

    assert_eq!(records.len(), 2);
    assert_eq!(tally.enterprises, 1);
    assert_eq!(tally.recruitments, 1);
    assert_eq!(tally.languages_requested, 2);
    assert_eq!(tally.industries, 0);
}

#[test]
fn award_folds_the_cataloged_records() {
    let (service, _) = build_service();
    service
        .submit("informatics", enterprise("Fernwerk", "Germany"))
        .expect("enterprise stored");
    service
        .submit("informatics", opportunity(Some("France")))
        .expect("opportunity stored");

    let award = service
        .award(&career("informatics", true))
        .expect("award computed");

    assert!((award.percentage - 0.60).abs() < 1e-9);
    assert!((award.base_scholarship - 2000.0).abs() < 1e-9);
    assert!((award.total_award - 3200.0).abs() < 1e-9);
}

#[test]
fn award_propagates_repository_failures() {
    let service = CareerCatalogService::new(Arc::new(UnavailableRepository), scoring_config());

    match service.award(&career("informatics", true)) {
        Err(CatalogServiceError::Repository(error)) => {
            assert_eq!(error.to_domain().code, "General.Failure");
        }
        other => panic!("expected repository failure, got {other:?}"),
    }
}

#[test]
fn repository_failures_map_onto_stable_kinds() {
    use crate::outcome::ErrorKind;
    use crate::workflows::career::catalog::repository::RepositoryError;

    assert_eq!(
        RepositoryError::Conflict.to_domain().kind,
        ErrorKind::DuplicatedConflict
    );
    assert_eq!(
        RepositoryError::NotFound.to_domain().kind,
        ErrorKind::NotFound
    );
    assert_eq!(
        RepositoryError::Stale.to_domain().kind,
        ErrorKind::ConcurrencyConflict
    );
    assert_eq!(
        RepositoryError::Unavailable("offline".to_string())
            .to_domain()
            .kind,
        ErrorKind::Failure
    );
}

#[test]
fn import_reports_accepted_and_rejected_rows() {
    let (service, repository) = build_service();
    let csv = "kind,name,country,female_workers,male_workers,cs_related,steps,requisites,languages_requested,description\n\
               enterprise,Tropical Software,Costa Rica,,,,,,,Main regional employer\n\
               work_life,,,-4,10,,,,,\n";

    let report = service
        .import("informatics", Cursor::new(csv.as_bytes()))
        .expect("import runs");

    assert_eq!(report.accepted.len(), 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].line, 3);
    assert_eq!(report.rejected[0].errors[0].code, "Validation.InvalidNumber");

    let stored = repository.for_career("informatics").expect("repo listing");
    assert_eq!(stored.len(), 1);
}
