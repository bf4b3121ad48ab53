//! The injected capability that turns text into a vector.
//!
//! The matching core never talks to an embeddings service directly; it only
//! sees `&dyn Embedder`. `HttpEmbedder` is the bundled implementation for
//! OpenAI-compatible endpoints (OpenAI or Azure OpenAI).

use async_trait::async_trait;
use thiserror::Error;

pub mod http;

pub use http::HttpEmbedder;

#[derive(Debug, Error)]
pub enum EmbedderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid embeddings response: {0}")]
    InvalidResponse(String),

    #[error("Embeddings service returned an empty embedding")]
    EmptyEmbedding,

    #[error("Embedding request failed after {retries} retries")]
    RetriesExhausted { retries: u32 },
}

/// Maps arbitrary text to a fixed-length numeric vector.
///
/// Implementations may be a real embeddings API, a cached lookup or a test
/// stub. Failures are soft for the matcher: a job without an embedding is
/// still ranked, on skills and experience alone.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError>;
}
