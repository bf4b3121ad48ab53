pub mod catalog;
pub mod config;
pub mod embedder;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;

pub use errors::MatchError;
pub use matching::embedding_cache::EmbeddingCache;
pub use matching::ranking::{rank_candidate_against_catalog, rank_resolved, MatchScorer};
