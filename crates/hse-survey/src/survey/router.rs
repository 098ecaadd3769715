use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::attention::in_display_order;
use super::catalog::{AnswerOption, Dimension, Question, QUESTIONS, SECTORS};
use super::report::{DimensionCard, SubmissionListing};
use super::service::{SurveyService, SurveyServiceError};
use super::submission::{NewSubmission, RepositoryError, SubmissionId, SubmissionRepository};
use super::summary::{summarize, AnswerSet, Completion, DimensionSummary};

/// Router builder exposing the questionnaire, submission, and dashboard endpoints.
pub fn survey_router<R>(service: Arc<SurveyService<R>>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/survey/catalog", get(catalog_handler))
        .route("/api/v1/survey/score", post(score_handler))
        .route(
            "/api/v1/survey/submissions",
            post(submit_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/survey/submissions/delete",
            post(bulk_delete_handler::<R>),
        )
        .route(
            "/api/v1/survey/submissions/:submission_id",
            get(fetch_handler::<R>).delete(delete_handler::<R>),
        )
        .route(
            "/api/v1/survey/submissions/:submission_id/results",
            get(results_handler::<R>),
        )
        .route("/api/v1/survey/dashboard", get(dashboard_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct DimensionEntry {
    id: Dimension,
    label: &'static str,
    short_label: &'static str,
    is_inverted: bool,
    cardinality: usize,
}

#[derive(Debug, Serialize)]
struct OptionEntry {
    key: AnswerOption,
    label: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogView {
    dimensions: Vec<DimensionEntry>,
    options: Vec<OptionEntry>,
    questions: &'static [Question],
    sectors: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreView {
    pub(crate) completion: Completion,
    pub(crate) summaries: Vec<DimensionSummary>,
    pub(crate) cards: Vec<DimensionCard>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: AnswerSet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkDeleteRequest {
    pub(crate) ids: Vec<SubmissionId>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    #[serde(default)]
    pub(crate) sector: Option<String>,
}

pub(crate) async fn catalog_handler() -> Json<CatalogView> {
    let dimensions = Dimension::ordered()
        .into_iter()
        .map(|dimension| DimensionEntry {
            id: dimension,
            label: dimension.label(),
            short_label: dimension.short_label(),
            is_inverted: dimension.is_inverted(),
            cardinality: dimension.cardinality(),
        })
        .collect();
    let options = AnswerOption::ordered()
        .into_iter()
        .map(|option| OptionEntry {
            key: option,
            label: option.label(),
        })
        .collect();

    Json(CatalogView {
        dimensions,
        options,
        questions: &QUESTIONS,
        sectors: &SECTORS,
    })
}

/// Scores an answer set without storing it.
pub(crate) async fn score_handler(Json(request): Json<ScoreRequest>) -> Json<ScoreView> {
    let summaries = summarize(&request.answers);
    let cards = in_display_order(&summaries)
        .iter()
        .map(DimensionCard::from)
        .collect();
    Json(ScoreView {
        completion: request.answers.completion(),
        summaries,
        cards,
    })
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<SurveyService<R>>>,
    Json(submission): Json<NewSubmission>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.submit(submission) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<SurveyService<R>>>) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.list() {
        Ok(submissions) => {
            let listing: Vec<SubmissionListing> = submissions
                .into_iter()
                .map(|submission| SubmissionListing {
                    id: submission.id,
                    sector: submission.sector,
                    role: submission.role,
                    submitted_at: submission.submitted_at,
                })
                .collect();
            (StatusCode::OK, Json(listing)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<SurveyService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.get(&SubmissionId(submission_id)) {
        Ok(submission) => (StatusCode::OK, Json(submission)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<SurveyService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.delete(&SubmissionId(submission_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn bulk_delete_handler<R>(
    State(service): State<Arc<SurveyService<R>>>,
    Json(request): Json<BulkDeleteRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.delete_many(&request.ids) {
        Ok(removed) => (StatusCode::OK, Json(json!({ "removed": removed }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn results_handler<R>(
    State(service): State<Arc<SurveyService<R>>>,
    Path(submission_id): Path<String>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.results(&SubmissionId(submission_id)) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<SurveyService<R>>>,
    Query(query): Query<DashboardQuery>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    match service.dashboard(query.sector.as_deref()) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SurveyServiceError) -> Response {
    let status = match &error {
        SurveyServiceError::MissingSector | SurveyServiceError::IncompleteSubmission { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SurveyServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SurveyServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SurveyServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
