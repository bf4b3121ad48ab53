use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Embedder, EmbedderError};

const MAX_RETRIES: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);
/// Rough cap on input size; embedding models reject very long inputs.
const MAX_INPUT_CHARS: usize = 50_000;

/// How the API key is presented to the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStyle {
    /// `Authorization: Bearer <key>` (OpenAI)
    Bearer,
    /// `api-key: <key>` (Azure OpenAI)
    ApiKeyHeader,
}

#[derive(Clone)]
pub struct HttpEmbedderSettings {
    pub endpoint: String,
    pub api_key: String,
    pub auth_style: AuthStyle,
    pub model: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for HttpEmbedderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpEmbedderSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("auth_style", &self.auth_style)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

/// Embedder backed by an OpenAI-compatible `/embeddings` endpoint.
/// Retries on 429 and 5xx with exponential backoff; other 4xx fail at once.
#[derive(Clone)]
pub struct HttpEmbedder {
    client: Client,
    settings: HttpEmbedderSettings,
    retry_base_delay: Duration,
}

impl HttpEmbedder {
    pub fn new(settings: HttpEmbedderSettings) -> Result<Self, EmbedderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            settings,
            retry_base_delay: RETRY_BASE_DELAY,
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn request(&self, body: &EmbeddingsRequest<'_>) -> reqwest::RequestBuilder {
        let request = self
            .client
            .post(&self.settings.endpoint)
            .header("content-type", "application/json")
            .json(body);
        match self.settings.auth_style {
            AuthStyle::Bearer => request.bearer_auth(&self.settings.api_key),
            AuthStyle::ApiKeyHeader => request.header("api-key", &self.settings.api_key),
        }
    }
}

#[async_trait]
impl Embedder for HttpEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError> {
        let body = EmbeddingsRequest {
            model: &self.settings.model,
            input: truncate_chars(text, MAX_INPUT_CHARS),
        };

        let mut last_error: Option<EmbedderError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s
                let delay = self.retry_base_delay * (1 << (attempt - 1));
                warn!(
                    "Embedding attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.request(&body).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(EmbedderError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("Embeddings API returned {}: {}", status, message);
                last_error = Some(EmbedderError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(EmbedderError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let text = response.text().await?;
            let embedding = parse_embeddings_response(&text)?;
            debug!(
                "Embedding call succeeded: model={}, dims={}",
                self.settings.model,
                embedding.len()
            );
            return Ok(embedding);
        }

        Err(last_error.unwrap_or(EmbedderError::RetriesExhausted {
            retries: MAX_RETRIES,
        }))
    }
}

/// Extracts `data[0].embedding` from an embeddings API response body.
fn parse_embeddings_response(body: &str) -> Result<Vec<f32>, EmbedderError> {
    let response: EmbeddingsResponse = serde_json::from_str(body)
        .map_err(|e| EmbedderError::InvalidResponse(e.to_string()))?;

    let embedding = response
        .data
        .into_iter()
        .next()
        .map(|d| d.embedding)
        .ok_or_else(|| EmbedderError::InvalidResponse("missing data[0]".to_string()))?;

    if embedding.is_empty() {
        return Err(EmbedderError::EmptyEmbedding);
    }
    Ok(embedding)
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
