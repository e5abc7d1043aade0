//! Axum route handlers for the candidate pool.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::ranking::{rank_candidates, MatchResult};
use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::skills::SkillSet;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FindCandidatesRequest {
    pub job_description: String,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FindCandidatesResponse {
    pub status: String,
    pub job_description: String,
    pub job_skills: SkillSet,
    pub total_candidates: usize,
    pub matched_candidates: usize,
    pub candidates: Vec<MatchResult>,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub status: String,
    pub total_candidates: usize,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Serialize)]
pub struct CandidateDetailResponse {
    pub status: String,
    pub candidate: Candidate,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates/find
///
/// Ranks the candidate pool against a job description. A description shorter
/// than 10 characters is rejected with 400.
pub async fn handle_find_candidates(
    State(state): State<AppState>,
    Json(request): Json<FindCandidatesRequest>,
) -> Result<Json<FindCandidatesResponse>, AppError> {
    let limit = request.limit.unwrap_or(state.config.default_rank_limit);
    let pool = state.candidates.list().await;
    let vocabulary = Arc::clone(&state.vocabulary);
    let description = request.job_description.clone();

    // Text similarity is quadratic in input length; keep it off the async workers.
    let ranking = tokio::task::spawn_blocking(move || {
        rank_candidates(&description, &pool, limit, &vocabulary)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("ranking task failed: {e}")))?
    .map_err(|e| {
        warn!("Candidate search rejected: {e}");
        AppError::Validation(e.to_string())
    })?;

    info!(
        total = ranking.total_candidates,
        matched = ranking.candidates.len(),
        limit,
        "candidate search complete"
    );

    Ok(Json(FindCandidatesResponse {
        status: "success".to_string(),
        job_description: request.job_description,
        job_skills: ranking.job_skills,
        total_candidates: ranking.total_candidates,
        matched_candidates: ranking.candidates.len(),
        candidates: ranking.candidates,
    }))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<CandidateListResponse> {
    let candidates = state.candidates.list().await;
    Json(CandidateListResponse {
        status: "success".to_string(),
        total_candidates: candidates.len(),
        candidates,
    })
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<CandidateDetailResponse>, AppError> {
    let candidate = state
        .candidates
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    Ok(Json(CandidateDetailResponse {
        status: "success".to_string(),
        candidate,
    }))
}
