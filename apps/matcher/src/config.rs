use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::embedder::http::{AuthStyle, HttpEmbedderSettings};

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;

/// Matcher configuration loaded from environment variables.
/// Every field is optional: without an embedding endpoint the matcher runs
/// keyword-only, without a catalog path it ranks against the sample jobs.
#[derive(Debug, Clone)]
pub struct Config {
    pub embedding: Option<HttpEmbedderSettings>,
    pub job_catalog_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so parsing can be tested
    /// without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let embedding = match get("EMBEDDING_ENDPOINT") {
            Some(endpoint) => {
                let api_key = get("EMBEDDING_API_KEY")
                    .context("EMBEDDING_API_KEY must be set when EMBEDDING_ENDPOINT is set")?;
                let auth_style = match get("EMBEDDING_AUTH_STYLE").as_deref() {
                    None | Some("bearer") => AuthStyle::Bearer,
                    Some("api-key") => AuthStyle::ApiKeyHeader,
                    Some(other) => bail!(
                        "EMBEDDING_AUTH_STYLE must be 'bearer' or 'api-key', got '{other}'"
                    ),
                };
                let timeout_secs = get("EMBEDDING_TIMEOUT_SECS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("EMBEDDING_TIMEOUT_SECS must be a whole number of seconds")?
                    .unwrap_or(DEFAULT_EMBEDDING_TIMEOUT_SECS);

                Some(HttpEmbedderSettings {
                    endpoint,
                    api_key,
                    auth_style,
                    model: get("EMBEDDING_MODEL")
                        .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
                    timeout_secs,
                })
            }
            None => None,
        };

        Ok(Config {
            embedding,
            job_catalog_path: get("JOB_CATALOG_PATH").map(PathBuf::from),
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
