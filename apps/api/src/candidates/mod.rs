// Candidate pool: read-only store plus the list/get/find endpoints.

pub mod handlers;
pub mod store;

pub use store::{CandidateStore, InMemoryCandidateStore};
