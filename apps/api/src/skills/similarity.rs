//! Similarity scoring — skill-set coverage and raw-text sequence similarity.
//!
//! Both metrics are percentages in [0, 100] rounded to two decimals.

use std::collections::HashMap;

use crate::skills::vocabulary::SkillSet;

/// Percentage of `reference` covered by `candidate`.
///
/// Asymmetric: it measures coverage of the reference set, so argument order
/// matters. An empty reference scores 0.0.
pub fn skill_overlap(candidate: &SkillSet, reference: &SkillSet) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }
    let covered = reference.intersection(candidate).len();
    round2(covered as f64 / reference.len() as f64 * 100.0)
}

/// Longest-matching-block ratio `2 * M / T` between two texts, lower-cased.
///
/// `M` is the total length of the blocks found by repeatedly taking the
/// longest common block and recursing on both sides of it. Inputs are put in
/// a canonical order first so the score is symmetric. Two empty strings are
/// identical and score 100.0.
pub fn text_similarity(a: &str, b: &str) -> f64 {
    let mut a: Vec<char> = a.to_lowercase().chars().collect();
    let mut b: Vec<char> = b.to_lowercase().chars().collect();
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }

    let matched = matched_chars(&a, &b);
    round2(2.0 * matched as f64 / total as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sums the sizes of all matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &c) in b.iter().enumerate() {
        b2j.entry(c).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest block with `a[i..i+size] == b[j..j+size]` inside the given window.
/// Ties go to the block that starts earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

    // run length of the match ending at (i - 1, j), keyed by j
    let mut run_at: HashMap<usize, usize> = HashMap::new();
    for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_run = HashMap::new();
        if let Some(positions) = b2j.get(c) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let size = if j > 0 {
                    run_at.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_run.insert(j, size);
                if size > best_size {
                    best_i = i + 1 - size;
                    best_j = j + 1 - size;
                    best_size = size;
                }
            }
        }
        run_at = next_run;
    }

    (best_i, best_j, best_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(labels: &[&str]) -> SkillSet {
        SkillSet::from_labels(labels).unwrap()
    }

    #[test]
    fn test_overlap_of_set_with_itself_is_full() {
        let s = set(&["Python", "Docker", "Aws"]);
        assert_eq!(skill_overlap(&s, &s), 100.0);
    }

    #[test]
    fn test_overlap_with_empty_reference_is_zero() {
        assert_eq!(skill_overlap(&set(&["Python"]), &SkillSet::new()), 0.0);
        assert_eq!(skill_overlap(&SkillSet::new(), &SkillSet::new()), 0.0);
    }

    #[test]
    fn test_overlap_is_asymmetric() {
        let small = set(&["Python"]);
        let large = set(&["Python", "Docker", "Aws"]);
        assert_eq!(skill_overlap(&large, &small), 100.0);
        assert_eq!(skill_overlap(&small, &large), 33.33);
    }

    #[test]
    fn test_overlap_ignores_case() {
        assert_eq!(skill_overlap(&set(&["aws"]), &set(&["AWS"])), 100.0);
    }

    #[test]
    fn test_identical_texts_score_full() {
        let text = "Senior Python developer with Docker";
        assert_eq!(text_similarity(text, text), 100.0);
        assert_eq!(text_similarity("", ""), 100.0);
    }

    #[test]
    fn test_case_is_ignored() {
        assert_eq!(text_similarity("RUST", "rust"), 100.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        assert_eq!(text_similarity("abc", "xyz"), 0.0);
        assert_eq!(text_similarity("abc", ""), 0.0);
    }

    #[test]
    fn test_known_ratios() {
        // "bcd" matches: 2 * 3 / 8
        assert_eq!(text_similarity("abcd", "bcde"), 75.0);
        // "ab" + "cd": 2 * 4 / 9
        assert_eq!(text_similarity("abxcd", "abcd"), 88.89);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let pairs = [
            ("Need a Python Docker engineer", "Python developer, Docker, AWS"),
            ("qabxcd", "abycdf"),
            ("tide", "diet"),
        ];
        for (a, b) in pairs {
            assert_eq!(text_similarity(a, b), text_similarity(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn test_similarity_bounded() {
        let score = text_similarity("Kubernetes and Terraform", "React and Vue frontend");
        assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(33.333_333), 33.33);
        assert_eq!(round2(66.666_666), 66.67);
    }
}
