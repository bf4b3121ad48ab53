//! Human-readable explanation of a match. Deterministic: identical scores
//! always produce identical text.

use crate::matching::skills::SkillScore;

/// Missing-skill lists at or below this size get a "consider learning" hint.
const LEARNING_HINT_MAX: usize = 3;

fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn similarity_label(similarity: f64) -> &'static str {
    if similarity > 0.8 {
        "Excellent semantic match!"
    } else if similarity > 0.6 {
        "Good semantic alignment."
    } else if similarity > 0.4 {
        "Moderate relevance."
    } else {
        "Limited semantic match."
    }
}

/// Builds the multi-line analysis attached to each `MatchResult`.
pub fn build_analysis(
    similarity: Option<f64>,
    skills: &SkillScore,
    experience_score: f64,
) -> String {
    let mut lines = Vec::new();

    match similarity {
        Some(sim) => lines.push(format!(
            "Embedding similarity: {} - {}",
            percent(sim),
            similarity_label(sim)
        )),
        None => lines.push(
            "Embedding similarity: unavailable - scored on skills and experience only."
                .to_string(),
        ),
    }

    lines.push(format!("Skill match: {}", percent(skills.score)));
    lines.push(format!("  - Matched: {} skills", skills.matched.len()));
    lines.push(format!("  - Missing: {} skills", skills.missing.len()));
    lines.push(format!("Experience match: {}", percent(experience_score)));

    if !skills.missing.is_empty() && skills.missing.len() <= LEARNING_HINT_MAX {
        let missing: Vec<&str> = skills.missing.iter().map(String::as_str).collect();
        lines.push(format!("Consider learning: {}", missing.join(", ")));
    }

    lines.join("\n")
}

/// Tiered advice from the overall score (0.0 – 1.0).
pub fn build_recommendation(overall_score: f64) -> String {
    let pct = overall_score * 100.0;
    if pct >= 85.0 {
        "Excellent match! Highly recommended for this position.".to_string()
    } else if pct >= 70.0 {
        "Good match. Consider applying with focus on learning missing skills.".to_string()
    } else if pct >= 50.0 {
        "Moderate match. Additional training may help for this role.".to_string()
    } else {
        "Limited match. Consider looking for related positions.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn skill_score(score: f64, matched: &[&str], missing: &[&str]) -> SkillScore {
        SkillScore {
            score,
            matched: matched.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_analysis_with_similarity() {
        let text = build_analysis(Some(0.85), &skill_score(1.0, &["rust"], &[]), 1.0);
        assert!(text.contains("85.0%"));
        assert!(text.contains("Excellent semantic match!"));
        assert!(text.contains("Matched: 1 skills"));
        assert!(!text.contains("Consider learning"));
    }

    #[test]
    fn test_analysis_without_similarity() {
        let text = build_analysis(None, &skill_score(0.5, &["go"], &["rust"]), 0.8);
        assert!(text.contains("unavailable"));
        assert!(text.contains("Consider learning: rust"));
        assert!(text.contains("Experience match: 80.0%"));
    }

    #[test]
    fn test_learning_hint_skipped_for_long_gap_lists() {
        let text = build_analysis(
            Some(0.5),
            &skill_score(0.0, &[], &["a", "b", "c", "d"]),
            0.0,
        );
        assert!(!text.contains("Consider learning"));
        assert!(text.contains("Moderate relevance."));
    }

    #[test]
    fn test_similarity_label_tiers() {
        assert_eq!(similarity_label(0.81), "Excellent semantic match!");
        assert_eq!(similarity_label(0.8), "Good semantic alignment.");
        assert_eq!(similarity_label(0.5), "Moderate relevance.");
        assert_eq!(similarity_label(0.4), "Limited semantic match.");
    }

    #[test]
    fn test_recommendation_tiers() {
        assert!(build_recommendation(0.9).starts_with("Excellent"));
        assert!(build_recommendation(0.72).starts_with("Good"));
        assert!(build_recommendation(0.5).starts_with("Moderate"));
        assert!(build_recommendation(0.2).starts_with("Limited"));
    }
}
