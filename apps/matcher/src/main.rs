use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matcher::catalog::{sample_jobs, InMemoryCatalog, JobCatalog, JsonFileCatalog};
use matcher::config::Config;
use matcher::embedder::{Embedder, HttpEmbedder};
use matcher::extract::{DocumentKind, ResumeExtractor, TextExtractor};
use matcher::{EmbeddingCache, MatchScorer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting matcher v{}", env!("CARGO_PKG_VERSION"));

    let resume_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: matcher <resume-file>")?;

    let bytes = tokio::fs::read(&resume_path)
        .await
        .with_context(|| format!("cannot read {}", resume_path.display()))?;
    let resume = ResumeExtractor.extract(&bytes, DocumentKind::from_path(&resume_path))?;
    info!(
        "Extracted {} skills, ~{} years experience",
        resume.skills.len(),
        resume.experience_years
    );
    let candidate = resume.into_profile()?;

    let jobs = match &config.job_catalog_path {
        Some(path) => JsonFileCatalog::new(path).list_jobs().await?,
        None => InMemoryCatalog::new(sample_jobs()?).list_jobs().await?,
    };

    let embedder: Option<Arc<dyn Embedder>> = match config.embedding.clone() {
        Some(settings) => {
            let client = HttpEmbedder::new(settings)?;
            info!("Embedding client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        None => {
            info!("No embedding endpoint configured, using keyword scoring");
            None
        }
    };

    let mut cache = EmbeddingCache::new();
    let report = MatchScorer::new(embedder)
        .report(&candidate, &jobs, &mut cache)
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
