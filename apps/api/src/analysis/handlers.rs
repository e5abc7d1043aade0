//! Axum route handler for resume analysis.
//!
//! This endpoint never fails at the HTTP level: short input, a malformed
//! reference list and internal faults all come back as 200 with
//! `status: "error"` and an empty `analysis` object.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::analysis::resume::analyze_resume;
use crate::skills::SkillVocabulary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub target_job_title: Option<String>,
    /// Overrides the in-demand reference list when present.
    #[serde(default)]
    pub reference_skills: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub status: String,
    pub message: String,
    pub analysis: Value,
}

impl AnalyzeResumeResponse {
    fn success(analysis: Value) -> Self {
        Self {
            status: "success".to_string(),
            message: "Resume analyzed successfully".to_string(),
            analysis,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message,
            analysis: json!({}),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Json<AnalyzeResumeResponse> {
    info!(
        chars = request.resume_text.chars().count(),
        target_job_title = request.target_job_title.as_deref().unwrap_or("-"),
        "analyze-resume request"
    );
    Json(build_analysis_response(&request, &state.vocabulary))
}

fn build_analysis_response(
    request: &AnalyzeResumeRequest,
    vocabulary: &SkillVocabulary,
) -> AnalyzeResumeResponse {
    let outcome = analyze_resume(
        &request.resume_text,
        request.reference_skills.as_deref(),
        vocabulary,
    );

    match outcome {
        Ok(analysis) => match serde_json::to_value(&analysis) {
            Ok(value) => AnalyzeResumeResponse::success(value),
            Err(e) => {
                error!("Failed to serialize resume analysis: {e}");
                AnalyzeResumeResponse::failure(format!("Analysis failed: {e}"))
            }
        },
        Err(e) => {
            warn!("Resume analysis rejected: {e}");
            AnalyzeResumeResponse::failure(e.to_string())
        }
    }
}
