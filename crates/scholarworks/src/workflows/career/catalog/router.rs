use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    CareerSnapshot, CatalogTally, WorkInformationId, WorkInformationSubmission,
};
use super::evaluation::ScholarshipAward;
use super::repository::{CareerCatalogRepository, WorkInformationView};
use super::service::{CareerCatalogService, CatalogServiceError};
use super::values::DegreeTitle;
use crate::error::status_for;
use crate::outcome::Errors;

/// Router builder exposing HTTP endpoints for catalog intake and scoring.
pub fn catalog_router<R>(service: Arc<CareerCatalogService<R>>) -> Router
where
    R: CareerCatalogRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/careers/:career_code/work-information",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/careers/:career_code/work-information/import",
            post(import_handler::<R>),
        )
        .route(
            "/api/v1/careers/:career_code/scholarship",
            post(scholarship_handler::<R>),
        )
        .route(
            "/api/v1/work-information/:record_id",
            get(record_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScholarshipRequest {
    pub(crate) steam_equivalent: bool,
    pub(crate) degree_title: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScholarshipResponse {
    pub(crate) career_code: String,
    pub(crate) degree_title: DegreeTitle,
    pub(crate) steam_equivalent: bool,
    #[serde(flatten)]
    pub(crate) award: ScholarshipAward,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CsvImportRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CareerRecordsResponse {
    pub(crate) career_code: String,
    pub(crate) records: Vec<WorkInformationView>,
    pub(crate) tally: CatalogTally,
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<CareerCatalogService<R>>>,
    Path(career_code): Path<String>,
    axum::Json(submission): axum::Json<WorkInformationSubmission>,
) -> Response
where
    R: CareerCatalogRepository + 'static,
{
    match service.submit(&career_code, submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<CareerCatalogService<R>>>,
    Path(career_code): Path<String>,
) -> Response
where
    R: CareerCatalogRepository + 'static,
{
    match service.records(&career_code) {
        Ok((records, tally)) => {
            let response = CareerRecordsResponse {
                career_code,
                records: records.iter().map(|record| record.view()).collect(),
                tally,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn import_handler<R>(
    State(service): State<Arc<CareerCatalogService<R>>>,
    Path(career_code): Path<String>,
    axum::Json(request): axum::Json<CsvImportRequest>,
) -> Response
where
    R: CareerCatalogRepository + 'static,
{
    let reader = Cursor::new(request.csv.into_bytes());
    match service.import(&career_code, reader) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn scholarship_handler<R>(
    State(service): State<Arc<CareerCatalogService<R>>>,
    Path(career_code): Path<String>,
    axum::Json(request): axum::Json<ScholarshipRequest>,
) -> Response
where
    R: CareerCatalogRepository + 'static,
{
    let degree_title = match DegreeTitle::create(request.degree_title.as_deref()) {
        Ok(degree_title) => degree_title,
        Err(errors) => return validation_response(&errors),
    };

    let career = CareerSnapshot {
        code: career_code,
        steam_equivalent: request.steam_equivalent,
        degree_title,
    };

    match service.award(&career) {
        Ok(award) => {
            let response = ScholarshipResponse {
                career_code: career.code,
                degree_title: career.degree_title,
                steam_equivalent: career.steam_equivalent,
                award,
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn record_handler<R>(
    State(service): State<Arc<CareerCatalogService<R>>>,
    Path(record_id): Path<String>,
) -> Response
where
    R: CareerCatalogRepository + 'static,
{
    let id = WorkInformationId(record_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn validation_response(errors: &Errors) -> Response {
    let payload = json!({
        "errors": errors.iter().collect::<Vec<_>>(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}

fn error_response(error: CatalogServiceError) -> Response {
    match error {
        CatalogServiceError::Validation(errors) => validation_response(&errors),
        CatalogServiceError::Repository(repository_error) => {
            let domain = repository_error.to_domain();
            let status = status_for(domain.kind);
            let payload = json!({
                "errors": [domain],
            });
            (status, axum::Json(payload)).into_response()
        }
        CatalogServiceError::Import(csv_error) => {
            let payload = json!({
                "error": format!("csv import failed: {csv_error}"),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
