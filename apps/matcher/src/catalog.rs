//! Job catalog sources. The matcher only needs an ordered list of postings;
//! where they come from (a database, a JSON export, the demo set) is behind
//! the `JobCatalog` trait.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::errors::MatchError;
use crate::models::{JobPosting, JobPostingInput};

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Postings in catalog order. Ranking ties are broken by this order.
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, MatchError>;
}

/// Catalog held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    jobs: Vec<JobPosting>,
}

impl InMemoryCatalog {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    pub fn push(&mut self, job: JobPosting) {
        self.jobs.push(job);
    }

    /// Removes a posting by id. Returns whether anything was removed.
    pub fn remove(&mut self, job_id: &str) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|j| j.id() != job_id);
        self.jobs.len() != before
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl JobCatalog for InMemoryCatalog {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, MatchError> {
        Ok(self.jobs.clone())
    }
}

/// Catalog stored as a JSON array of postings on disk. Read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobCatalog for JsonFileCatalog {
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, MatchError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            MatchError::Catalog(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let jobs: Vec<JobPosting> = serde_json::from_str(&raw).map_err(|e| {
            MatchError::Catalog(format!("invalid catalog {}: {e}", self.path.display()))
        })?;
        info!("Loaded {} jobs from {}", jobs.len(), self.path.display());
        Ok(jobs)
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    title: &str,
    company: &str,
    description: &str,
    required: &[&str],
    preferred: &[&str],
    years: i64,
    location: &str,
    salary_range: &str,
) -> Result<JobPosting, MatchError> {
    JobPosting::try_from(JobPostingInput {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        preferred_skills: preferred.iter().map(|s| s.to_string()).collect(),
        experience_years_required: years,
        salary_range: Some(salary_range.to_string()),
        posted_date: None,
        embedding: None,
    })
}

/// Demo postings used when no catalog is configured.
pub fn sample_jobs() -> Result<Vec<JobPosting>, MatchError> {
    Ok(vec![
        sample(
            "job_001",
            "Senior Python Developer",
            "TechCorp",
            "Looking for experienced Python developer with strong focus on backend development, \
             API design, and cloud services. Must have experience with modern frameworks and \
             distributed systems.",
            &["Python", "FastAPI", "PostgreSQL", "Docker", "AWS"],
            &["Kubernetes", "Redis", "Elasticsearch"],
            5,
            "San Francisco, CA",
            "$150,000 - $200,000",
        )?,
        sample(
            "job_002",
            "Cloud Solutions Architect",
            "CloudSystems Inc",
            "Design and implement enterprise cloud solutions using Azure. Lead infrastructure \
             projects, mentor team members, and ensure best practices. Experience with \
             infrastructure-as-code and DevOps pipelines essential.",
            &["Azure", "Terraform", "Python", "CI/CD"],
            &["Kubernetes", "Microservices", "ARM Templates"],
            7,
            "New York, NY",
            "$160,000 - $220,000",
        )?,
        sample(
            "job_003",
            "AI/ML Engineer",
            "IntelliAI",
            "Develop and deploy machine learning models using Python and modern frameworks. \
             Work with neural networks, transformers, and large language models. Focus on \
             production ML systems and model optimization.",
            &["Python", "Machine Learning", "PyTorch", "Azure AI"],
            &["LLMs", "Semantic Kernel", "AutoGen"],
            4,
            "Remote",
            "$130,000 - $180,000",
        )?,
        sample(
            "job_004",
            "Data Science Engineer",
            "DataInsights",
            "Build ML models and data pipelines.",
            &["Python", "SQL", "Machine Learning", "Statistics"],
            &["PyTorch", "Spark", "Tableau"],
            3,
            "Remote",
            "$120,000 - $160,000",
        )?,
        sample(
            "job_005",
            "Full Stack Developer",
            "WebInnovate",
            "Build web applications with modern frameworks.",
            &["JavaScript", "React", "Node.js", "MongoDB"],
            &["TypeScript", "GraphQL", "Docker"],
            3,
            "Austin, TX",
            "$100,000 - $140,000",
        )?,
    ])
}
