use thiserror::Error;

use crate::embedder::EmbedderError;

/// Matching-level error type.
///
/// `InvalidInput` and `DegenerateVector` are returned to the direct caller of
/// the function that produced them. Ranking absorbs `EmbedderUnavailable`
/// per job and keeps going.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate vector: zero magnitude, similarity unavailable")]
    DegenerateVector,

    #[error("Embedder unavailable: {0}")]
    EmbedderUnavailable(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl MatchError {
    /// True for errors that mean "drop this signal" rather than "caller bug".
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            MatchError::DegenerateVector | MatchError::EmbedderUnavailable(_)
        )
    }
}

impl From<EmbedderError> for MatchError {
    fn from(e: EmbedderError) -> Self {
        MatchError::EmbedderUnavailable(e.to_string())
    }
}
