//! Candidate store — the pool of resumes the ranking endpoint scores against.
//!
//! `AppState` holds an `Arc<dyn CandidateStore>`, chosen at startup via config:
//! the built-in sample pool, or a JSON file given by `CANDIDATES_FILE`.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::candidate::Candidate;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read candidates file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse candidates file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only access to candidate profiles.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// All candidates, in store order. Ranking ties are broken by this order.
    async fn list(&self) -> Vec<Candidate>;

    async fn get(&self, id: u32) -> Option<Candidate>;
}

/// Candidates held in memory, fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCandidateStore {
    candidates: Vec<Candidate>,
}

impl InMemoryCandidateStore {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// The platform's sample candidate pool.
    pub fn sample() -> Self {
        Self::new(vec![
            Candidate {
                id: 1,
                name: "Alice Johnson".to_string(),
                resume: "Senior Python developer with 5 years experience. Expertise in FastAPI, Django, PostgreSQL, Docker, Kubernetes, AWS. Strong in microservices architecture and CI/CD pipelines.".to_string(),
                email: "alice@example.com".to_string(),
            },
            Candidate {
                id: 2,
                name: "Bob Smith".to_string(),
                resume: "Full-stack developer proficient in React, Node.js, JavaScript. Experience with MongoDB, MySQL, REST APIs. 3 years in web development and UX optimization.".to_string(),
                email: "bob@example.com".to_string(),
            },
            Candidate {
                id: 3,
                name: "Carol Davis".to_string(),
                resume: "DevOps engineer with Docker, Kubernetes, Terraform, CI/CD expertise. AWS and Azure cloud platforms. 4 years infrastructure and deployment automation.".to_string(),
                email: "carol@example.com".to_string(),
            },
            Candidate {
                id: 4,
                name: "David Wilson".to_string(),
                resume: "Junior Python developer with Django experience. Learning FastAPI and PostgreSQL. Git and basic Docker knowledge. 1 year professional experience.".to_string(),
                email: "david@example.com".to_string(),
            },
        ])
    }

    /// Loads a JSON array of candidates.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Read {
                path: display.clone(),
                source,
            })?;
        let candidates: Vec<Candidate> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: display,
                source,
            })?;

        Ok(Self::new(candidates))
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn list(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }

    async fn get(&self, id: u32) -> Option<Candidate> {
        self.candidates.iter().find(|c| c.id == id).cloned()
    }
}
