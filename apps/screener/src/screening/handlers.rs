//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogJob, WeightPreset};
use crate::errors::AppError;
use crate::ingest::decode_resume;
use crate::models::candidate::CandidateProfile;
use crate::models::job::{JobProfile, WeightConfig};
use crate::models::report::ScreeningReport;
use crate::scoring::{score_candidate, Recommendation, ScoringResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Which job and weights to screen against. An inline profile wins over a key;
/// missing keys fall back to the configured defaults.
#[derive(Debug, Default, Deserialize)]
pub struct JobSelection {
    pub job_key: Option<String>,
    pub job: Option<JobProfile>,
    pub weights_key: Option<String>,
    pub weights: Option<WeightConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub resume_text: String,
    #[serde(flatten)]
    pub selection: JobSelection,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateProfile,
    #[serde(flatten)]
    pub selection: JobSelection,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub scoring: ScoringResult,
    pub recommendation: Recommendation,
}

fn resolve(
    state: &AppState,
    selection: JobSelection,
) -> Result<(JobProfile, WeightConfig), AppError> {
    let job = match selection.job {
        Some(job) => job,
        None => {
            let key = selection
                .job_key
                .unwrap_or_else(|| state.config.default_job.clone());
            state
                .catalog
                .job(&key)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Job profile '{key}' not found")))?
        }
    };

    let weights = match selection.weights {
        Some(weights) => weights,
        None => {
            let key = selection
                .weights_key
                .unwrap_or_else(|| state.config.default_weights.clone());
            *state
                .catalog
                .weights(&key)
                .ok_or_else(|| AppError::NotFound(format!("Weight preset '{key}' not found")))?
        }
    };

    Ok((job, weights))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<CatalogJob>> {
    Json(state.catalog.jobs().to_vec())
}

/// GET /api/v1/weights
pub async fn handle_list_weights(State(state): State<AppState>) -> Json<Vec<WeightPreset>> {
    Json(state.catalog.weight_presets().to_vec())
}

/// POST /api/v1/screenings
///
/// Full pipeline on raw resume text: extract → score → recommend → questions.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreeningReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let (job, weights) = resolve(&state, request.selection)?;
    let report = state
        .screener
        .screen(&request.resume_text, &job, &weights)
        .await?;

    Ok(Json(report))
}

/// POST /api/v1/screenings/upload
///
/// Multipart form: a `resume` file (PDF or text) plus optional `job_key` / `weights_key`.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    let mut resume: Option<(Bytes, Option<String>)> = None;
    let mut selection = JobSelection::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume: {e}")))?;
                resume = Some((data, filename));
            }
            Some("job_key") => selection.job_key = Some(text_field(field).await?),
            Some("weights_key") => selection.weights_key = Some(text_field(field).await?),
            _ => {}
        }
    }

    let (data, filename) =
        resume.ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;

    let (job, weights) = resolve(&state, selection)?;
    let resume_text = decode_resume(data, filename).await?;
    let report = state.screener.screen(&resume_text, &job, &weights).await?;

    Ok(Json(report))
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map(|t| t.trim().to_string())
        .map_err(|e| AppError::Validation(format!("Malformed form field: {e}")))
}

/// POST /api/v1/screenings/score
///
/// Scores an already-extracted candidate. No extraction, no questions.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let (job, weights) = resolve(&state, request.selection)?;
    let scoring = score_candidate(&request.candidate, &job, &weights);
    let recommendation = scoring.recommendation();

    Ok(Json(ScoreResponse {
        scoring,
        recommendation,
    }))
}
