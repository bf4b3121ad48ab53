use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;
use crate::matching::skills::normalize_skill_set;

/// Unvalidated job posting as it arrives from a catalog source.
///
/// Convert with `JobPosting::try_from`; that is where skills get normalized
/// and ids and experience get checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPostingInput {
    #[serde(alias = "job_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default, alias = "experience_years")]
    pub experience_years_required: i64,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
    /// Precomputed embedding shipped with the posting, if any.
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

/// One open role. Descriptive fields do not affect scoring, except
/// `title` and `description` which feed the canonical embedding text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JobPostingInput")]
pub struct JobPosting {
    id: String,
    title: String,
    company: String,
    location: String,
    description: String,
    required_skills: BTreeSet<String>,
    preferred_skills: BTreeSet<String>,
    experience_years_required: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    posted_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embedding: Option<Vec<f32>>,
}

impl TryFrom<JobPostingInput> for JobPosting {
    type Error = MatchError;

    fn try_from(input: JobPostingInput) -> Result<Self, Self::Error> {
        let id = input.id.trim().to_string();
        if id.is_empty() {
            return Err(MatchError::InvalidInput(
                "job posting id cannot be empty".to_string(),
            ));
        }

        let experience_years_required =
            u32::try_from(input.experience_years_required).map_err(|_| {
                MatchError::InvalidInput(format!(
                    "job {id}: experience_years_required must be non-negative, got {}",
                    input.experience_years_required
                ))
            })?;

        if matches!(&input.embedding, Some(v) if v.is_empty()) {
            return Err(MatchError::InvalidInput(format!(
                "job {id}: precomputed embedding cannot be empty"
            )));
        }

        Ok(JobPosting {
            id,
            title: input.title,
            company: input.company,
            location: input.location,
            description: input.description,
            required_skills: normalize_skill_set(input.required_skills),
            preferred_skills: normalize_skill_set(input.preferred_skills),
            experience_years_required,
            salary_range: input.salary_range,
            posted_date: input.posted_date,
            embedding: input.embedding,
        })
    }
}

impl JobPosting {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn required_skills(&self) -> &BTreeSet<String> {
        &self.required_skills
    }

    pub fn preferred_skills(&self) -> &BTreeSet<String> {
        &self.preferred_skills
    }

    pub fn experience_years_required(&self) -> u32 {
        self.experience_years_required
    }

    pub fn salary_range(&self) -> Option<&str> {
        self.salary_range.as_deref()
    }

    pub fn posted_date(&self) -> Option<&str> {
        self.posted_date.as_deref()
    }

    pub fn embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref()
    }

    /// Text sent to the embedder: title, description and required skills,
    /// space-joined.
    pub fn embedding_text(&self) -> String {
        let skills: Vec<&str> = self.required_skills.iter().map(String::as_str).collect();
        format!("{} {} {}", self.title, self.description, skills.join(" "))
    }
}
