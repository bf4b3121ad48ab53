use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which weighted blend produced `overall_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormula {
    /// similarity + skills + experience + education placeholder
    Semantic,
    /// skills + experience only, used when no similarity is available
    Keyword,
}

/// Scored, explainable outcome of one (candidate, job) comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_similarity: Option<f64>, // 0.0 – 1.0
    pub skill_match_score: f64,      // 0.0 – 1.0
    pub experience_match_score: f64, // 0.0 – 1.0
    pub overall_score: f64,          // 0.0 – 1.0
    pub formula: ScoringFormula,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub analysis: String,
    pub recommendation: String,
}

/// Ranked results plus the time they were produced. The timestamp lives here
/// so that the results themselves stay reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<MatchResult>,
}

impl MatchReport {
    pub fn new(results: Vec<MatchResult>) -> Self {
        Self {
            generated_at: Utc::now(),
            results,
        }
    }

    pub fn best(&self) -> Option<&MatchResult> {
        self.results.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(job_id: &str, overall: f64) -> MatchResult {
        MatchResult {
            job_id: job_id.to_string(),
            job_title: "Engineer".to_string(),
            company: "Acme".to_string(),
            embedding_similarity: None,
            skill_match_score: 1.0,
            experience_match_score: 1.0,
            overall_score: overall,
            formula: ScoringFormula::Keyword,
            matched_skills: BTreeSet::new(),
            missing_skills: BTreeSet::new(),
            analysis: String::new(),
            recommendation: String::new(),
        }
    }

    #[test]
    fn test_formula_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ScoringFormula::Semantic).unwrap(),
            r#""semantic""#
        );
        assert_eq!(
            serde_json::to_string(&ScoringFormula::Keyword).unwrap(),
            r#""keyword""#
        );
    }

    #[test]
    fn test_absent_similarity_is_omitted() {
        let json = serde_json::to_value(result("job_1", 0.5)).unwrap();
        assert!(json.get("embedding_similarity").is_none());
        assert_eq!(json["formula"], "keyword");
    }

    #[test]
    fn test_report_best_is_first() {
        let report = MatchReport::new(vec![result("a", 0.9), result("b", 0.4)]);
        assert_eq!(report.best().map(|r| r.job_id.as_str()), Some("a"));
        assert!(MatchReport::new(vec![]).best().is_none());
    }
}
