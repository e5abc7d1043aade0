//! Candidate ranking — one job description scored against many resumes.
//!
//! Algorithm:
//! 1. Extract job skills once
//! 2. Per candidate: skill coverage of the job skills (70%) + text similarity (30%)
//! 3. Stable sort by combined score, descending (ties keep input order)
//! 4. Truncate to `limit`; `limit <= 0` yields an empty list

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::candidate::Candidate;
use crate::skills::similarity::round2;
use crate::skills::{extract_skills, skill_overlap, text_similarity, SkillSet, SkillVocabulary};

/// Minimum trimmed length (in chars) of a job description.
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const SKILL_WEIGHT: f64 = 0.7;
pub const TEXT_WEIGHT: f64 = 0.3;

#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("Job description must be at least 10 characters long")]
    DescriptionTooShort,
}

/// One candidate's score breakdown against the job.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_score: f64,
    pub skill_match: f64,
    pub text_similarity: f64,
    pub matching_skills: SkillSet,
    pub missing_skills: SkillSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateRanking {
    pub job_skills: SkillSet,
    pub total_candidates: usize,
    pub candidates: Vec<MatchResult>,
}

pub fn rank_candidates(
    job_description: &str,
    candidates: &[Candidate],
    limit: i64,
    vocabulary: &SkillVocabulary,
) -> Result<CandidateRanking, RankingError> {
    if job_description.trim().chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(RankingError::DescriptionTooShort);
    }

    let job_skills = extract_skills(job_description, vocabulary);

    let mut results: Vec<MatchResult> = candidates
        .iter()
        .map(|c| score_candidate(job_description, &job_skills, c, vocabulary))
        .collect();

    // sort_by is stable: equal scores keep candidate input order
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    if limit <= 0 {
        results.clear();
    } else {
        results.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    }

    debug!(
        job_skills = job_skills.len(),
        total = candidates.len(),
        returned = results.len(),
        "candidates ranked"
    );

    Ok(CandidateRanking {
        job_skills,
        total_candidates: candidates.len(),
        candidates: results,
    })
}

pub fn score_candidate(
    job_description: &str,
    job_skills: &SkillSet,
    candidate: &Candidate,
    vocabulary: &SkillVocabulary,
) -> MatchResult {
    let candidate_skills = extract_skills(&candidate.resume, vocabulary);

    let skill_match = skill_overlap(&candidate_skills, job_skills);
    let text_score = text_similarity(job_description, &candidate.resume);
    let match_score = round2(SKILL_WEIGHT * skill_match + TEXT_WEIGHT * text_score);

    MatchResult {
        candidate: candidate.clone(),
        match_score,
        skill_match,
        text_similarity: text_score,
        matching_skills: job_skills.intersection(&candidate_skills),
        missing_skills: job_skills.difference(&candidate_skills),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB: &str = "Need a Python Docker Kubernetes AWS engineer";

    fn candidate(id: u32, resume: &str) -> Candidate {
        Candidate {
            id,
            name: format!("Candidate {id}"),
            resume: resume.to_string(),
            email: format!("c{id}@example.com"),
        }
    }

    fn rank(job: &str, candidates: &[Candidate], limit: i64) -> CandidateRanking {
        rank_candidates(job, candidates, limit, &SkillVocabulary::standard()).unwrap()
    }

    #[test]
    fn test_full_coverage_outranks_no_coverage() {
        let candidates = vec![
            candidate(1, "React and Node frontend work"),
            candidate(2, "Python, Docker, Kubernetes, AWS and PostgreSQL"),
        ];
        let ranking = rank(JOB, &candidates, 10);

        assert_eq!(ranking.candidates[0].candidate.id, 2);
        assert_eq!(ranking.candidates[0].skill_match, 100.0);
        assert_eq!(ranking.candidates[1].candidate.id, 1);
        assert_eq!(ranking.candidates[1].skill_match, 0.0);
    }

    #[test]
    fn test_short_description_is_rejected() {
        let err = rank_candidates("  dev  ", &[], 10, &SkillVocabulary::standard()).unwrap_err();
        assert_eq!(err, RankingError::DescriptionTooShort);
        assert_eq!(
            err.to_string(),
            "Job description must be at least 10 characters long"
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates: Vec<Candidate> = (1..=5).map(|id| candidate(id, "zzzz")).collect();
        let ranking = rank(JOB, &candidates, 10);
        let ids: Vec<u32> = ranking.candidates.iter().map(|m| m.candidate.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ties_after_higher_scores_keep_input_order() {
        let candidates = vec![
            candidate(1, "zzzz"),
            candidate(2, "Python Docker Kubernetes AWS"),
            candidate(3, "zzzz"),
            candidate(4, "zzzz"),
        ];
        let ranking = rank(JOB, &candidates, 10);
        let ids: Vec<u32> = ranking.candidates.iter().map(|m| m.candidate.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_sorted_non_increasing() {
        let candidates = vec![
            candidate(1, "Junior Python developer with Django. Git and basic Docker."),
            candidate(2, "React, Node.js, JavaScript. MongoDB, MySQL, REST APIs."),
            candidate(3, "Docker, Kubernetes, Terraform, CI/CD. AWS and Azure."),
            candidate(4, "Python, FastAPI, PostgreSQL, Docker, Kubernetes, AWS."),
        ];
        let ranking = rank(JOB, &candidates, 10);
        for pair in ranking.candidates.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_limit_truncates() {
        let candidates: Vec<Candidate> = (1..=4).map(|id| candidate(id, "python")).collect();
        assert_eq!(rank(JOB, &candidates, 2).candidates.len(), 2);
        assert_eq!(rank(JOB, &candidates, 10).candidates.len(), 4);
    }

    #[test]
    fn test_non_positive_limit_yields_empty_list() {
        let candidates: Vec<Candidate> = (1..=3).map(|id| candidate(id, "python")).collect();
        let ranking = rank(JOB, &candidates, 0);
        assert!(ranking.candidates.is_empty());
        assert_eq!(ranking.total_candidates, 3);
        assert!(rank(JOB, &candidates, -5).candidates.is_empty());
    }

    #[test]
    fn test_matching_and_missing_partition_job_skills() {
        let candidates = vec![candidate(1, "Python and Kubernetes, plus React")];
        let ranking = rank(JOB, &candidates, 10);
        let result = &ranking.candidates[0];

        assert!(!result.matching_skills.overlaps(&result.missing_skills));
        assert_eq!(
            result.matching_skills.len() + result.missing_skills.len(),
            ranking.job_skills.len()
        );
        assert!(result.matching_skills.contains_label("python"));
        assert!(result.missing_skills.contains_label("aws"));
        // React is not a job skill, so it is neither matching nor missing
        assert!(!result.matching_skills.contains_label("react"));
        assert_eq!(result.skill_match, 50.0);
    }

    #[test]
    fn test_combined_score_weights() {
        let vocab = SkillVocabulary::standard();
        let job_skills = extract_skills(JOB, &vocab);
        let result = score_candidate(JOB, &job_skills, &candidate(1, JOB), &vocab);
        assert_eq!(result.skill_match, 100.0);
        assert_eq!(result.text_similarity, 100.0);
        assert_eq!(result.match_score, 100.0);

        // no shared skills or characters
        let unrelated = score_candidate(JOB, &job_skills, &candidate(2, "zzzz"), &vocab);
        assert_eq!(unrelated.text_similarity, 0.0);
        assert_eq!(unrelated.match_score, 0.0);

        let partial = score_candidate(JOB, &job_skills, &candidate(3, "python docker"), &vocab);
        assert_eq!(partial.skill_match, 50.0);
        assert_eq!(
            partial.match_score,
            round2(SKILL_WEIGHT * 50.0 + TEXT_WEIGHT * partial.text_similarity)
        );
    }

    #[test]
    fn test_job_without_vocabulary_skills_scores_on_text_only() {
        let candidates = vec![candidate(1, "Friendly barista")];
        let ranking = rank("Looking for a friendly barista", &candidates, 10);
        assert!(ranking.job_skills.is_empty());
        let result = &ranking.candidates[0];
        assert_eq!(result.skill_match, 0.0);
        assert_eq!(result.match_score, round2(TEXT_WEIGHT * result.text_similarity));
    }

    #[test]
    fn test_match_result_serializes_flat() {
        let ranking = rank(JOB, &[candidate(7, "Python")], 10);
        let value = serde_json::to_value(&ranking.candidates[0]).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Candidate 7");
        assert!(value["matching_skills"].is_array());
        assert!(value["match_score"].is_number());
    }
}
