use std::sync::Arc;

use crate::candidates::CandidateStore;
use crate::config::Config;
use crate::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; never mutated afterwards.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable candidate pool. Default: the in-memory sample pool.
    pub candidates: Arc<dyn CandidateStore>,
}
