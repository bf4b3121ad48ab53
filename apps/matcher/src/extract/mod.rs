//! Résumé text extraction: document bytes to plain text plus a coarse
//! skill set and experience estimate. Sits outside the scoring core: the
//! core only ever sees the resulting `CandidateProfile`.

use std::collections::BTreeSet;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::errors::MatchError;
use crate::models::CandidateProfile;

pub mod experience;
pub mod skills;

pub use experience::estimate_experience_years;
pub use skills::extract_skills;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Document contains no text")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// `.pdf` (any case) is a PDF, everything else is read as text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Plain text of a résumé plus what the keyword scan found in it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedResume {
    pub text: String,
    pub skills: BTreeSet<String>,
    pub experience_years: u32,
}

impl ExtractedResume {
    pub fn from_text(text: String) -> Self {
        let skills = extract_skills(&text);
        let experience_years = estimate_experience_years(&text);
        Self {
            text,
            skills,
            experience_years,
        }
    }

    /// Candidate profile for scoring; the full text is kept for embedding.
    pub fn into_profile(self) -> Result<CandidateProfile, MatchError> {
        CandidateProfile::new(
            self.skills,
            i64::from(self.experience_years),
            Some(self.text),
        )
    }
}

/// Turns an uploaded document into text. Implement this to plug in an OCR
/// service; `ResumeExtractor` covers text-layer PDFs and plain text.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError>;

    fn extract(&self, bytes: &[u8], kind: DocumentKind) -> Result<ExtractedResume, ExtractError> {
        let text = self.extract_text(bytes, kind)?;
        if text.trim().is_empty() {
            return Err(ExtractError::Empty);
        }
        Ok(ExtractedResume::from_text(text))
    }
}

pub struct ResumeExtractor;

impl TextExtractor for ResumeExtractor {
    fn extract_text(&self, bytes: &[u8], kind: DocumentKind) -> Result<String, ExtractError> {
        match kind {
            DocumentKind::Pdf => guard_pdf(|| pdf_extract::extract_text_from_mem(bytes)),
            DocumentKind::PlainText => Ok(std::str::from_utf8(bytes)?.to_string()),
        }
    }
}

/// Runs a PDF parse, turning both its error and any panic inside the parser
/// into `ExtractError::Pdf`. Malformed uploads can panic `pdf-extract`.
fn guard_pdf<F, E>(parse: F) -> Result<String, ExtractError>
where
    F: FnOnce() -> Result<String, E> + std::panic::UnwindSafe,
    E: std::fmt::Display,
{
    match std::panic::catch_unwind(parse) {
        Ok(result) => result.map_err(|e| ExtractError::Pdf(e.to_string())),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!("PDF parser panicked: {reason}");
            Err(ExtractError::Pdf(format!("parser panicked: {reason}")))
        }
    }
}
