use serde::{Deserialize, Serialize};

/// A candidate profile as held by the candidate store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub resume: String,
    pub email: String,
}
