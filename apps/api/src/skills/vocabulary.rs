#![allow(dead_code)]

//! Skill vocabulary — the fixed reference data every other skill component reads.
//!
//! Built once at startup and shared as `Arc<SkillVocabulary>`. There are no
//! mutation operations: two readers always observe identical content.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SkillError {
    #[error("skill label cannot be blank")]
    Blank,
}

// ────────────────────────────────────────────────────────────────────────────
// Skill
// ────────────────────────────────────────────────────────────────────────────

/// A canonical skill label.
///
/// Equality, ordering and hashing use the lower-case key, so "AWS", "aws" and
/// "Aws" are the same skill. Display and serialization use the title-cased label.
#[derive(Debug, Clone)]
pub struct Skill {
    key: String,
    label: String,
}

impl Skill {
    pub fn parse(raw: &str) -> Result<Self, SkillError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SkillError::Blank);
        }
        Ok(Self::from_key(trimmed.to_lowercase()))
    }

    fn from_key(key: String) -> Self {
        let label = title_case(&key);
        Self { key, label }
    }

    /// Lower-case canonical form, as matched against text.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Upper-cases a letter when it starts the string or follows a non-letter,
/// lower-cases it otherwise: "ci/cd" → "Ci/Cd", "c++" → "C++".
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Skill {}

impl Hash for Skill {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Skill {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Skill {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

// Lets sets be queried with a lower-case key without building a Skill.
impl Borrow<str> for Skill {
    fn borrow(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl Serialize for Skill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

impl<'de> Deserialize<'de> for Skill {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Skill::parse(&raw).map_err(de::Error::custom)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SkillSet
// ────────────────────────────────────────────────────────────────────────────

/// An unordered collection of unique skills, iterated in key order so every
/// list derived from it is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<Skill>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses labels into a set; duplicates collapse case-insensitively.
    pub fn from_labels<I, S>(labels: I) -> Result<Self, SkillError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|l| Skill::parse(l.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, skill: Skill) -> bool {
        self.0.insert(skill)
    }

    pub fn contains(&self, skill: &Skill) -> bool {
        self.0.contains(skill)
    }

    /// Case-insensitive membership test by label.
    pub fn contains_label(&self, label: &str) -> bool {
        self.0.contains(label.trim().to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.0.iter()
    }

    pub fn intersection(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn difference(&self, other: &SkillSet) -> SkillSet {
        SkillSet(self.0.difference(&other.0).cloned().collect())
    }

    /// True when the two sets share at least one skill.
    pub fn overlaps(&self, other: &SkillSet) -> bool {
        !self.0.is_disjoint(&other.0)
    }
}

impl FromIterator<Skill> for SkillSet {
    fn from_iter<I: IntoIterator<Item = Skill>>(iter: I) -> Self {
        SkillSet(iter.into_iter().collect())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Domains and the vocabulary itself
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillDomain {
    Backend,
    Frontend,
    DevOps,
    Database,
}

impl SkillDomain {
    pub const ALL: [SkillDomain; 4] = [
        SkillDomain::Backend,
        SkillDomain::Frontend,
        SkillDomain::DevOps,
        SkillDomain::Database,
    ];
}

/// Recognized tokens, lower-case, in match order.
const SKILL_TOKENS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "go",
    "rust",
    "php",
    "ruby",
    "typescript",
    "react",
    "angular",
    "vue",
    "django",
    "flask",
    "fastapi",
    "node",
    "express",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "sql",
    "nosql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "jenkins",
    "ci/cd",
    "rest",
    "graphql",
    "api",
    "microservices",
    "ux",
];

const BACKEND_SKILLS: &[&str] = &[
    "Python", "Java", "Go", "Node", "Django", "Flask", "FastAPI", "Express", "Ruby", "Php",
];
const FRONTEND_SKILLS: &[&str] = &["React", "Angular", "Vue", "Javascript", "Typescript"];
const DEVOPS_SKILLS: &[&str] = &[
    "Docker", "Kubernetes", "AWS", "Azure", "GCP", "Terraform", "Jenkins", "CI/CD",
];
const DATABASE_SKILLS: &[&str] = &["MySQL", "PostgreSQL", "MongoDB", "Redis", "SQL", "Nosql"];

/// Default reference list for resume analysis. Repeats collapse when resolved.
const IN_DEMAND_SKILLS: &[&str] = &[
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "React",
    "Angular",
    "Vue",
    "Node",
    "Python",
    "Java",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Microservices",
];

#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    tokens: Vec<Skill>,
    backend: SkillSet,
    frontend: SkillSet,
    devops: SkillSet,
    database: SkillSet,
    in_demand: Vec<Skill>,
}

impl SkillVocabulary {
    /// The platform's built-in vocabulary.
    pub fn standard() -> Self {
        Self {
            tokens: static_skills(SKILL_TOKENS),
            backend: static_skills(BACKEND_SKILLS).into_iter().collect(),
            frontend: static_skills(FRONTEND_SKILLS).into_iter().collect(),
            devops: static_skills(DEVOPS_SKILLS).into_iter().collect(),
            database: static_skills(DATABASE_SKILLS).into_iter().collect(),
            in_demand: static_skills(IN_DEMAND_SKILLS),
        }
    }

    pub fn tokens(&self) -> &[Skill] {
        &self.tokens
    }

    pub fn domain(&self, domain: SkillDomain) -> &SkillSet {
        match domain {
            SkillDomain::Backend => &self.backend,
            SkillDomain::Frontend => &self.frontend,
            SkillDomain::DevOps => &self.devops,
            SkillDomain::Database => &self.database,
        }
    }

    pub fn in_demand(&self) -> &[Skill] {
        &self.in_demand
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

fn static_skills(labels: &[&str]) -> Vec<Skill> {
    labels
        .iter()
        .map(|l| Skill::from_key(l.to_lowercase()))
        .collect()
}
