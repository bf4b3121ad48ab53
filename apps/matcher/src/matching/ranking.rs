//! Scores one candidate against every job in a catalog and sorts
//! the results.
//!
//! Two phases:
//! 1. resolve (async): embed the candidate text and fill the caller's
//!    `EmbeddingCache` for the jobs. This is the only I/O.
//! 2. score (sync, pure): `rank_resolved` blends sub-scores with fixed
//!    weights and stable-sorts by overall score.
//!
//! A job that cannot get a similarity is still ranked, with the two-factor
//! keyword blend. Weights are not renormalized between the two blends.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::embedder::Embedder;
use crate::errors::MatchError;
use crate::matching::analysis::{build_analysis, build_recommendation};
use crate::matching::embedding_cache::EmbeddingCache;
use crate::matching::experience::score_experience_years;
use crate::matching::similarity::cosine_similarity;
use crate::matching::skills::score_skills;
use crate::models::{CandidateProfile, JobPosting, MatchReport, MatchResult, ScoringFormula};

/// Stand-in education score. Not computed from the candidate.
pub const EDUCATION_PLACEHOLDER: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    pub similarity: f64,
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

/// Used when embedding similarity is available.
pub const SEMANTIC_WEIGHTS: BlendWeights = BlendWeights {
    similarity: 0.40,
    skills: 0.30,
    experience: 0.15,
    education: 0.15,
};

/// Used when it is not.
pub const KEYWORD_WEIGHTS: BlendWeights = BlendWeights {
    similarity: 0.0,
    skills: 0.6,
    experience: 0.4,
    education: 0.0,
};

/// Weighted blend of the sub-scores. Returns the overall score and the
/// formula that produced it.
pub fn combine_scores(
    similarity: Option<f64>,
    skill: f64,
    experience: f64,
) -> (f64, ScoringFormula) {
    let (weights, sim, formula) = match similarity {
        Some(sim) => (SEMANTIC_WEIGHTS, sim, ScoringFormula::Semantic),
        None => (KEYWORD_WEIGHTS, 0.0, ScoringFormula::Keyword),
    };
    let overall = weights.similarity * sim
        + weights.skills * skill
        + weights.experience * experience
        + weights.education * EDUCATION_PLACEHOLDER;
    (overall.clamp(0.0, 1.0), formula)
}

/// Scores one job given an already-resolved similarity.
pub fn score_job(
    candidate: &CandidateProfile,
    job: &JobPosting,
    similarity: Option<f64>,
) -> MatchResult {
    let skills = score_skills(
        candidate.skills(),
        job.required_skills(),
        job.preferred_skills(),
    );
    let experience =
        score_experience_years(candidate.experience_years(), job.experience_years_required());
    let (overall_score, formula) = combine_scores(similarity, skills.score, experience);

    let analysis = build_analysis(similarity, &skills, experience);
    let recommendation = build_recommendation(overall_score);

    MatchResult {
        job_id: job.id().to_string(),
        job_title: job.title().to_string(),
        company: job.company().to_string(),
        embedding_similarity: similarity,
        skill_match_score: skills.score,
        experience_match_score: experience,
        overall_score,
        formula,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        analysis,
        recommendation,
    }
}

fn ensure_unique_ids(jobs: &[JobPosting]) -> Result<(), MatchError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id()) {
            return Err(MatchError::InvalidInput(format!(
                "duplicate job id in catalog: {}",
                job.id()
            )));
        }
    }
    Ok(())
}

fn job_similarity(
    candidate_embedding: Option<&[f32]>,
    job: &JobPosting,
    cache: &EmbeddingCache,
) -> Option<f64> {
    let candidate_embedding = candidate_embedding?;
    let job_embedding = cache.lookup(job)?;
    match cosine_similarity(candidate_embedding, job_embedding) {
        Ok(sim) => Some(sim),
        Err(e) => {
            warn!("Job {}: similarity dropped: {e}", job.id());
            None
        }
    }
}

/// Pure scoring pass over already-resolved embeddings.
///
/// Output is sorted by `overall_score` descending; equal scores keep catalog
/// order. Only a structurally invalid catalog (duplicate ids) fails.
pub fn rank_resolved(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    candidate_embedding: Option<&[f32]>,
    cache: &EmbeddingCache,
) -> Result<Vec<MatchResult>, MatchError> {
    ensure_unique_ids(jobs)?;

    let mut results: Vec<MatchResult> = jobs
        .iter()
        .map(|job| {
            let similarity = job_similarity(candidate_embedding, job, cache);
            score_job(candidate, job, similarity)
        })
        .collect();

    // `sort_by` is stable, so ties stay in catalog order.
    results.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));

    Ok(results)
}

/// Ranks `candidate` against `jobs`.
///
/// Embedding similarity is attempted only when the candidate has raw text and
/// an embedder is supplied. Embedder failures are soft: the affected job (or
/// every job, if the candidate text itself cannot be embedded) uses the
/// keyword blend.
pub async fn rank_candidate_against_catalog(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    embedder: Option<&dyn Embedder>,
    cache: &mut EmbeddingCache,
) -> Result<Vec<MatchResult>, MatchError> {
    ensure_unique_ids(jobs)?;

    let candidate_embedding = match (candidate.raw_text(), embedder) {
        (Some(text), Some(embedder)) => match embedder.embed(text).await {
            Ok(v) if !v.is_empty() => {
                let available = cache.warm(jobs, embedder).await;
                debug!("{available}/{} jobs have embeddings", jobs.len());
                Some(v)
            }
            Ok(_) => {
                warn!("Candidate embedding was empty; using keyword scoring");
                None
            }
            Err(e) => {
                warn!("Candidate embedding unavailable ({e}); using keyword scoring");
                None
            }
        },
        _ => None,
    };

    let results = rank_resolved(candidate, jobs, candidate_embedding.as_deref(), cache)?;

    let semantic = results
        .iter()
        .filter(|r| r.formula == ScoringFormula::Semantic)
        .count();
    info!(
        "Ranked {} jobs ({} semantic, {} keyword-only)",
        results.len(),
        semantic,
        results.len() - semantic
    );

    Ok(results)
}

/// Scorer handle carrying an optional embedder, for callers that keep one
/// around (the binary, long-lived services).
#[derive(Clone, Default)]
pub struct MatchScorer {
    embedder: Option<Arc<dyn Embedder>>,
}

impl MatchScorer {
    pub fn new(embedder: Option<Arc<dyn Embedder>>) -> Self {
        Self { embedder }
    }

    pub fn keyword_only() -> Self {
        Self { embedder: None }
    }

    pub fn has_embedder(&self) -> bool {
        self.embedder.is_some()
    }

    pub async fn rank(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
        cache: &mut EmbeddingCache,
    ) -> Result<Vec<MatchResult>, MatchError> {
        rank_candidate_against_catalog(candidate, jobs, self.embedder.as_deref(), cache).await
    }

    /// Ranks and wraps the results in a timestamped `MatchReport`.
    pub async fn report(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobPosting],
        cache: &mut EmbeddingCache,
    ) -> Result<MatchReport, MatchError> {
        Ok(MatchReport::new(self.rank(candidate, jobs, cache).await?))
    }
}
