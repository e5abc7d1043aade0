mod analysis;
mod candidates;
mod config;
mod errors;
mod models;
mod routes;
mod skills;
mod state;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::candidates::{CandidateStore, InMemoryCandidateStore};
use crate::config::Config;
use crate::routes::build_router;
use crate::skills::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary is immutable for the life of the process
    let vocabulary = Arc::new(SkillVocabulary::standard());
    info!(
        "Skill vocabulary loaded ({} tokens)",
        vocabulary.tokens().len()
    );

    // Candidate pool: JSON file if configured, sample pool otherwise
    let store = match &config.candidates_file {
        Some(path) => InMemoryCandidateStore::from_json_file(path).await?,
        None => InMemoryCandidateStore::sample(),
    };
    info!("Candidate store initialized ({} candidates)", store.len());
    let candidates: Arc<dyn CandidateStore> = Arc::new(store);

    let cors = build_cors_layer(&config.cors_origins)?;

    let state = AppState {
        config: config.clone(),
        vocabulary,
        candidates,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the configured origins; no origins means permissive.
fn build_cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
