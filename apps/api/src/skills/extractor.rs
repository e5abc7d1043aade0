//! Skill extraction — maps free text to the set of vocabulary skills it mentions.

use crate::skills::vocabulary::{SkillSet, SkillVocabulary};

/// Returns every vocabulary skill whose token occurs in `text`.
///
/// Matching is case-insensitive substring containment, not word-boundary
/// tokenization: "go" matches inside "google", "java" inside "javascript".
/// Empty or whitespace-only text yields an empty set.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    if text.trim().is_empty() {
        return SkillSet::new();
    }

    let normalized = text.to_lowercase();
    vocabulary
        .tokens()
        .iter()
        .filter(|token| normalized.contains(token.key()))
        .cloned()
        .collect()
}
