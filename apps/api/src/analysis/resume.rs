//! Resume analysis — single resume text against a reference skill list.
//!
//! Pipeline: length check → extract → classify → missing skills → match score
//! → experience level → improvement suggestions. No LLM, no I/O.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::skills::{
    classify_strengths, extract_skills, skill_overlap, Skill, SkillError, SkillSet,
    SkillVocabulary,
};

/// Minimum trimmed length (in chars) for a resume worth analyzing.
pub const MIN_RESUME_CHARS: usize = 10;
/// Display cap on the reported missing skills.
pub const MISSING_SKILLS_CAP: usize = 10;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Resume text too short")]
    TooShort,

    #[error("Invalid reference skill list: {0}")]
    MalformedReference(#[from] SkillError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Beginner")]
    Beginner,
    #[serde(rename = "Entry-level")]
    EntryLevel,
    #[serde(rename = "Mid-level")]
    MidLevel,
}

impl ExperienceLevel {
    pub fn from_skill_count(count: usize) -> Self {
        match count {
            n if n >= 5 => ExperienceLevel::MidLevel,
            n if n >= 2 => ExperienceLevel::EntryLevel,
            _ => ExperienceLevel::Beginner,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub extracted_skills: SkillSet,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_skills: Vec<Skill>,
    pub job_match_score: f64,
    pub improvement_suggestions: Vec<String>,
    pub experience_level: ExperienceLevel,
}

/// A suggestion fires unless every skill in its group is present.
const SUGGESTION_RULES: &[(&[&str], &str)] = &[
    (
        &["aws", "azure", "gcp"],
        "Learn cloud platforms like AWS, Azure, or GCP",
    ),
    (
        &["docker", "kubernetes"],
        "Gain experience with containerization (Docker, Kubernetes)",
    ),
    (&["ci/cd"], "Improve your understanding of CI/CD pipelines"),
    (&["microservices"], "Learn about microservices architecture"),
];

const FALLBACK_SUGGESTION: &str = "Continue expanding your technical skill set";

/// Analyzes a resume against `reference_labels`, or the vocabulary's
/// in-demand list when none are given.
pub fn analyze_resume(
    text: &str,
    reference_labels: Option<&[String]>,
    vocabulary: &SkillVocabulary,
) -> Result<ResumeAnalysis, AnalysisError> {
    if text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AnalysisError::TooShort);
    }

    let reference = match reference_labels {
        Some(labels) => resolve_reference(
            labels
                .iter()
                .map(|l| Skill::parse(l))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        None => resolve_reference(vocabulary.in_demand().to_vec()),
    };
    let reference_set: SkillSet = reference.iter().cloned().collect();

    let extracted_skills = extract_skills(text, vocabulary);
    let report = classify_strengths(&extracted_skills, vocabulary);

    let missing_skills: Vec<Skill> = reference
        .into_iter()
        .filter(|s| !extracted_skills.contains(s))
        .take(MISSING_SKILLS_CAP)
        .collect();

    let job_match_score = skill_overlap(&extracted_skills, &reference_set);
    let experience_level = ExperienceLevel::from_skill_count(extracted_skills.len());
    let improvement_suggestions = build_suggestions(&extracted_skills);

    debug!(
        skills = extracted_skills.len(),
        missing = missing_skills.len(),
        job_match_score,
        "resume analyzed"
    );

    Ok(ResumeAnalysis {
        extracted_skills,
        strengths: report.strengths,
        weaknesses: report.weaknesses,
        missing_skills,
        job_match_score,
        improvement_suggestions,
        experience_level,
    })
}

/// Drops repeated skills, keeping the first occurrence.
fn resolve_reference(skills: Vec<Skill>) -> Vec<Skill> {
    let mut seen = SkillSet::new();
    skills
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

fn build_suggestions(skills: &SkillSet) -> Vec<String> {
    let mut suggestions: Vec<String> = SUGGESTION_RULES
        .iter()
        .filter(|(group, _)| !group.iter().all(|s| skills.contains_label(s)))
        .map(|(_, text)| text.to_string())
        .collect();

    if suggestions.is_empty() {
        suggestions.push(FALLBACK_SUGGESTION.to_string());
    }
    suggestions
}
