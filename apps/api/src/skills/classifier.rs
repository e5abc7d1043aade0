//! Strength classifier — turns an extracted skill set into qualitative statements.

use serde::{Deserialize, Serialize};

use crate::skills::vocabulary::{SkillDomain, SkillSet, SkillVocabulary};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Evaluated in order; each fires when the skill set touches the domain.
const STRENGTH_RULES: &[(SkillDomain, &str)] = &[
    (SkillDomain::Backend, "Strong backend development skills"),
    (SkillDomain::Frontend, "Frontend development experience"),
    (SkillDomain::DevOps, "DevOps and cloud platform knowledge"),
    (
        SkillDomain::Database,
        "Database design and management experience",
    ),
];

/// Evaluated in order; each fires when the skill set misses every listed domain.
const WEAKNESS_RULES: &[(&[SkillDomain], &str)] = &[
    (
        &[SkillDomain::Backend, SkillDomain::Frontend],
        "Limited programming language experience",
    ),
    (
        &[SkillDomain::DevOps],
        "Limited cloud and deployment experience",
    ),
];

pub fn classify_strengths(skills: &SkillSet, vocabulary: &SkillVocabulary) -> StrengthReport {
    let strengths = STRENGTH_RULES
        .iter()
        .filter(|(domain, _)| skills.overlaps(vocabulary.domain(*domain)))
        .map(|(_, statement)| statement.to_string())
        .collect();

    let weaknesses = WEAKNESS_RULES
        .iter()
        .filter(|(domains, _)| {
            domains
                .iter()
                .all(|d| !skills.overlaps(vocabulary.domain(*d)))
        })
        .map(|(_, statement)| statement.to_string())
        .collect();

    StrengthReport {
        strengths,
        weaknesses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(labels: &[&str]) -> StrengthReport {
        let skills = SkillSet::from_labels(labels).unwrap();
        classify_strengths(&skills, &SkillVocabulary::standard())
    }

    #[test]
    fn test_empty_set_has_only_weaknesses() {
        let report = classify(&[]);
        assert!(report.strengths.is_empty());
        assert_eq!(
            report.weaknesses,
            vec![
                "Limited programming language experience",
                "Limited cloud and deployment experience"
            ]
        );
    }

    #[test]
    fn test_all_domains_covered_has_no_weaknesses() {
        let report = classify(&["Python", "React", "Docker", "PostgreSQL"]);
        assert_eq!(
            report.strengths,
            vec![
                "Strong backend development skills",
                "Frontend development experience",
                "DevOps and cloud platform knowledge",
                "Database design and management experience"
            ]
        );
        assert!(report.weaknesses.is_empty());
    }

    #[test]
    fn test_frontend_only_still_counts_as_programming() {
        let report = classify(&["React"]);
        assert_eq!(report.strengths, vec!["Frontend development experience"]);
        assert_eq!(
            report.weaknesses,
            vec!["Limited cloud and deployment experience"]
        );
    }

    #[test]
    fn test_devops_matched_case_insensitively() {
        // extracted skills are title-cased ("Aws", "Ci/Cd"); domains list "AWS", "CI/CD"
        let report = classify(&["Aws"]);
        assert_eq!(report.strengths, vec!["DevOps and cloud platform knowledge"]);
        let report = classify(&["Ci/Cd"]);
        assert_eq!(report.strengths, vec!["DevOps and cloud platform knowledge"]);
    }

    #[test]
    fn test_unclassified_skills_add_nothing() {
        let report = classify(&["Git", "Graphql", "Ux"]);
        assert!(report.strengths.is_empty());
        assert_eq!(report.weaknesses.len(), 2);
    }
}
