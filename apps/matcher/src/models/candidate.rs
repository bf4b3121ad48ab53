use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::matching::skills::normalize_skill_set;

/// Immutable snapshot of one applicant at match time.
///
/// Skills are stored normalized (trimmed, lower-cased, empties dropped).
/// `raw_text` is only used for embedding; a blank text counts as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CandidateInput")]
pub struct CandidateProfile {
    skills: BTreeSet<String>,
    experience_years: u32,
    raw_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateInput {
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    experience_years: i64,
    #[serde(default)]
    raw_text: Option<String>,
}

impl CandidateProfile {
    pub fn new<I, S>(
        skills: I,
        experience_years: i64,
        raw_text: Option<String>,
    ) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let experience_years = u32::try_from(experience_years).map_err(|_| {
            MatchError::InvalidInput(format!(
                "experience_years must be a non-negative integer, got {experience_years}"
            ))
        })?;

        Ok(Self {
            skills: normalize_skill_set(skills),
            experience_years,
            raw_text: raw_text.filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }
}

impl TryFrom<CandidateInput> for CandidateProfile {
    type Error = MatchError;

    fn try_from(input: CandidateInput) -> Result<Self, Self::Error> {
        CandidateProfile::new(input.skills, input.experience_years, input.raw_text)
    }
}
