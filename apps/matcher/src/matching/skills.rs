//! Skill overlap scoring.
//!
//! Skills compare as exact tokens after trimming and lower-casing. There is
//! no synonym resolution: "js" and "javascript" are different skills.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Weight of the preferred-skill bonus. Fixed, not configurable per call.
pub const PREFERRED_BONUS_WEIGHT: f64 = 0.1;

/// Outcome of comparing a candidate's skills with one job's requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub score: f64, // 0.0 – 1.0
    /// Required skills the candidate has.
    pub matched: BTreeSet<String>,
    /// Required skills the candidate lacks. Preferred skills never appear here.
    pub missing: BTreeSet<String>,
}

pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Normalizes every skill and drops the ones that end up empty.
pub fn normalize_skill_set<I, S>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| normalize_skill(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Scores skill overlap:
/// 1. no required skills → 1.0, nothing matched or missing
/// 2. score = |candidate ∩ required| / |required|
/// 3. + 0.1 × |candidate ∩ preferred| / |preferred| when preferred is non-empty
/// 4. capped at 1.0
pub fn score_skills(
    candidate: &BTreeSet<String>,
    required: &BTreeSet<String>,
    preferred: &BTreeSet<String>,
) -> SkillScore {
    let candidate = normalize_skill_set(candidate);
    let required = normalize_skill_set(required);
    let preferred = normalize_skill_set(preferred);

    if required.is_empty() {
        return SkillScore {
            score: 1.0,
            matched: BTreeSet::new(),
            missing: BTreeSet::new(),
        };
    }

    let (matched, missing): (BTreeSet<String>, BTreeSet<String>) = required
        .iter()
        .cloned()
        .partition(|skill| candidate.contains(skill));

    let mut score = matched.len() as f64 / required.len() as f64;

    if !preferred.is_empty() {
        let preferred_hits = preferred.intersection(&candidate).count();
        score += (preferred_hits as f64 / preferred.len() as f64) * PREFERRED_BONUS_WEIGHT;
    }

    SkillScore {
        score: score.min(1.0),
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> BTreeSet<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap() {
        let result = score_skills(
            &set(&["python", "docker"]),
            &set(&["python", "docker", "azure"]),
            &set(&["kubernetes"]),
        );
        assert!((result.score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.matched, set(&["python", "docker"]));
        assert_eq!(result.missing, set(&["azure"]));
    }

    #[test]
    fn test_empty_required_is_neutral() {
        let result = score_skills(&set(&["rust"]), &set(&[]), &set(&["go", "rust"]));
        assert_eq!(result.score, 1.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());

        let result = score_skills(&set(&[]), &set(&[]), &set(&[]));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_preferred_bonus_added() {
        // 1/2 required + 0.1 × 1/2 preferred = 0.55
        let result = score_skills(
            &set(&["python", "redis"]),
            &set(&["python", "java"]),
            &set(&["redis", "kafka"]),
        );
        assert!((result.score - 0.55).abs() < 1e-9, "score was {}", result.score);
    }

    #[test]
    fn test_bonus_capped_at_one() {
        let result = score_skills(
            &set(&["python", "redis"]),
            &set(&["python"]),
            &set(&["redis"]),
        );
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_preferred_never_in_matched_or_missing() {
        let result = score_skills(
            &set(&["redis"]),
            &set(&["python"]),
            &set(&["redis", "kafka"]),
        );
        assert!(!result.matched.contains("redis"));
        assert!(!result.missing.contains("kafka"));
        assert_eq!(result.missing, set(&["python"]));
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let result = score_skills(&set(&[" Python "]), &set(&["PYTHON"]), &set(&[]));
        assert_eq!(result.score, 1.0);
        assert_eq!(result.matched, set(&["python"]));
    }

    #[test]
    fn test_no_synonym_resolution() {
        let result = score_skills(&set(&["js"]), &set(&["javascript"]), &set(&[]));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing, set(&["javascript"]));
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let cases = [
            (vec!["a", "b"], vec!["a", "c", "d"], vec!["b"]),
            (vec![], vec!["x"], vec![]),
            (vec!["x", "y", "z"], vec!["x", "y", "z"], vec!["q"]),
        ];
        for (candidate, required, preferred) in cases {
            let required = set(&required);
            let result = score_skills(&set(&candidate), &required, &set(&preferred));
            assert!((0.0..=1.0).contains(&result.score));
            assert!(result.matched.is_disjoint(&result.missing));
            let union: BTreeSet<String> = result.matched.union(&result.missing).cloned().collect();
            assert_eq!(union, required);
        }
    }

    #[test]
    fn test_normalize_skill_set_drops_empties() {
        let skills = normalize_skill_set(["  ", "Go", "go ", ""]);
        assert_eq!(skills, set(&["go"]));
    }
}
