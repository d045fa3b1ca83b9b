//! Axum route handlers for the Matching API.
//!
//! Callers send fully assembled records; nothing here reads storage or checks
//! who is asking. That happens upstream before the request reaches this service.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::models::check_embedding;
use crate::matching::similarity::semantic_match;
use crate::matching::{CandidateProfile, JobRequirements, MatchScore, MatchWeights};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Job as posted by the upstream service. Required experience may be unknown.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPayload {
    pub title: String,
    #[serde(default)]
    pub requirements_text: String,
    #[serde(default)]
    pub required_experience_years: Option<f64>,
}

impl JobPayload {
    fn into_requirements(self, default_years: f64) -> JobRequirements {
        JobRequirements {
            title: self.title,
            requirements_text: self.requirements_text,
            required_experience_years: self.required_experience_years.unwrap_or(default_years),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchScoreRequest {
    pub job: JobPayload,
    pub profile: CandidateProfile,
    #[serde(default)]
    pub job_embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct MatchScoreResponse {
    pub score: MatchScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_match: Option<u32>,
}

/// One application in the pool. `resume` is absent until the resume has been parsed.
#[derive(Debug, Deserialize)]
pub struct CandidateEntry {
    pub application_id: Uuid,
    pub applicant_id: Uuid,
    #[serde(default)]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub applicant_email: Option<String>,
    #[serde(default)]
    pub resume: Option<CandidateProfile>,
}

#[derive(Debug, Deserialize)]
pub struct RankCandidatesRequest {
    pub job: JobPayload,
    #[serde(default)]
    pub candidates: Vec<CandidateEntry>,
    #[serde(default)]
    pub job_embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct RankedCandidateView {
    pub rank: usize,
    pub application_id: Uuid,
    pub applicant_id: Uuid,
    pub applicant_name: Option<String>,
    pub applicant_email: Option<String>,
    pub score: MatchScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_match: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct RankCandidatesResponse {
    pub candidates: Vec<RankedCandidateView>,
}

#[derive(Debug, Serialize)]
pub struct WeightsResponse {
    pub weights: MatchWeights,
    pub matcher: &'static str,
}

/// Applicant details carried alongside a profile through the ranking.
struct Applicant {
    application_id: Uuid,
    applicant_id: Uuid,
    applicant_name: Option<String>,
    applicant_email: Option<String>,
    semantic_match: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match-score
///
/// Scores a single candidate profile against a job.
pub async fn handle_match_score(
    State(state): State<AppState>,
    Json(request): Json<MatchScoreRequest>,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let job = checked_job(request.job, state.config.default_required_experience_years)?;
    check_embedding("job_embedding", &request.job_embedding)?;
    request.profile.validate()?;

    let semantic_match = semantic_match(&request.job_embedding, &request.profile)?;
    let score = state.engine.match_score(&job, &request.profile);

    Ok(Json(MatchScoreResponse {
        score,
        semantic_match,
    }))
}

/// POST /api/v1/rank-candidates
///
/// Ranks a job's applications by total match score, highest first.
/// Applications without a parsed resume are left out.
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<RankCandidatesRequest>,
) -> Result<Json<RankCandidatesResponse>, AppError> {
    let job = checked_job(request.job, state.config.default_required_experience_years)?;
    check_embedding("job_embedding", &request.job_embedding)?;

    let submitted = request.candidates.len();
    let mut pool = Vec::with_capacity(submitted);
    for entry in request.candidates {
        let Some(resume) = entry.resume else {
            continue;
        };
        resume.validate()?;
        let applicant = Applicant {
            application_id: entry.application_id,
            applicant_id: entry.applicant_id,
            applicant_name: entry.applicant_name,
            applicant_email: entry.applicant_email,
            semantic_match: semantic_match(&request.job_embedding, &resume)?,
        };
        pool.push((applicant, resume));
    }

    let ranked = state.engine.rank(&job, pool);

    info!(
        job_title = %job.title,
        submitted,
        ranked = ranked.len(),
        "ranked candidates"
    );

    let candidates = ranked
        .into_iter()
        .enumerate()
        .map(|(index, row)| RankedCandidateView {
            rank: index + 1,
            application_id: row.id.application_id,
            applicant_id: row.id.applicant_id,
            applicant_name: row.id.applicant_name,
            applicant_email: row.id.applicant_email,
            score: row.score,
            semantic_match: row.id.semantic_match,
        })
        .collect();

    Ok(Json(RankCandidatesResponse { candidates }))
}

/// GET /api/v1/weights
pub async fn handle_get_weights(State(state): State<AppState>) -> Json<WeightsResponse> {
    Json(WeightsResponse {
        weights: *state.engine.weights(),
        matcher: state.engine.matcher_name(),
    })
}

fn checked_job(payload: JobPayload, default_years: f64) -> Result<JobRequirements, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("job.title cannot be empty".to_string()));
    }
    let job = payload.into_requirements(default_years);
    job.validate()?;
    Ok(job)
}
