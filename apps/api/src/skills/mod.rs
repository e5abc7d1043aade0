// Skill engine: vocabulary, extraction, similarity scoring, strength classification.
// Everything here is synchronous and pure; the vocabulary is read-only once built.

pub mod classifier;
pub mod extractor;
pub mod similarity;
pub mod vocabulary;

// Re-export the public API consumed by the analysis and candidate modules.
pub use classifier::classify_strengths;
pub use extractor::extract_skills;
pub use similarity::{skill_overlap, text_similarity};
pub use vocabulary::{Skill, SkillError, SkillSet, SkillVocabulary};
