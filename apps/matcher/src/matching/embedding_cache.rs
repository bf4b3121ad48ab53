//! Caller-owned memoization of job embeddings (`job id → vector`).
//!
//! Postings are never mutated. A job whose embedding failed is remembered as
//! unavailable so the embedder is not called again for it while the cache
//! lives. Share a warmed cache read-only across workers, or give each worker
//! its own copy.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::embedder::Embedder;
use crate::errors::MatchError;
use crate::models::JobPosting;

#[derive(Debug, Clone, PartialEq)]
enum CacheEntry {
    Ready(Vec<f32>),
    Unavailable(String),
}

#[derive(Debug, Clone, Default)]
pub struct EmbeddingCache {
    entries: HashMap<String, CacheEntry>,
}

impl EmbeddingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, job_id: impl Into<String>, embedding: Vec<f32>) {
        self.entries
            .insert(job_id.into(), CacheEntry::Ready(embedding));
    }

    pub fn get(&self, job_id: &str) -> Option<&[f32]> {
        match self.entries.get(job_id) {
            Some(CacheEntry::Ready(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn is_unavailable(&self, job_id: &str) -> bool {
        matches!(self.entries.get(job_id), Some(CacheEntry::Unavailable(_)))
    }

    pub fn mark_unavailable(&mut self, job_id: impl Into<String>, reason: impl Into<String>) {
        self.entries
            .insert(job_id.into(), CacheEntry::Unavailable(reason.into()));
    }

    /// Embedding for `job`: the posting's own precomputed vector wins over
    /// the cache.
    pub fn lookup<'a>(&'a self, job: &'a JobPosting) -> Option<&'a [f32]> {
        job.embedding().or_else(|| self.get(job.id()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves embeddings for every job, one at a time, and returns how many
    /// jobs ended up with a vector.
    pub async fn warm(&mut self, jobs: &[JobPosting], embedder: &dyn Embedder) -> usize {
        let mut available = 0;
        for job in jobs {
            if get_or_compute_embedding(job, Some(embedder), self)
                .await
                .is_ok()
            {
                available += 1;
            }
        }
        debug!("Embedding cache warmed: {available}/{} jobs", jobs.len());
        available
    }
}

/// Returns the job's embedding, computing and caching it on first use.
///
/// Order: precomputed vector on the posting, then the cache, then the
/// embedder on `job.embedding_text()`. Embedder failure marks the job
/// unavailable for the rest of the session and yields `EmbedderUnavailable`.
pub async fn get_or_compute_embedding(
    job: &JobPosting,
    embedder: Option<&dyn Embedder>,
    cache: &mut EmbeddingCache,
) -> Result<Vec<f32>, MatchError> {
    if let Some(v) = cache.lookup(job) {
        return Ok(v.to_vec());
    }
    if let Some(CacheEntry::Unavailable(reason)) = cache.entries.get(job.id()) {
        return Err(MatchError::EmbedderUnavailable(reason.clone()));
    }

    let embedder = embedder.ok_or_else(|| {
        MatchError::EmbedderUnavailable("no embedder configured".to_string())
    })?;

    match embedder.embed(&job.embedding_text()).await {
        Ok(v) if !v.is_empty() => {
            cache.insert(job.id(), v.clone());
            Ok(v)
        }
        Ok(_) => {
            let reason = "embedder returned an empty vector".to_string();
            warn!("Job {}: {reason}", job.id());
            cache.mark_unavailable(job.id(), reason.clone());
            Err(MatchError::EmbedderUnavailable(reason))
        }
        Err(e) => {
            warn!("Job {}: embedding unavailable: {e}", job.id());
            cache.mark_unavailable(job.id(), e.to_string());
            Err(e.into())
        }
    }
}
