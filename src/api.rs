//! Rewrite service interaction.
//!
//! The content transformer talks to the text generation service through the
//! [`AskAsync`] trait so that the transport can be swapped (or stubbed in
//! tests) without touching the rewrite logic.
//!
//! - [`AskAsync`]: Core trait, one prompt in, one generated text blob out
//! - [`GeminiClient`]: `generateContent` client over `reqwest`
//!
//! Calls are never retried here. A failed call degrades one article and the
//! orchestrator's pacing still applies before the next call.

use crate::config::RewriteConfig;
use crate::errors::TransformError;
use crate::utils::truncate_for_log;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// Trait for async text generation.
///
/// Implementors send a prompt to a model and return the generated text.
pub trait AskAsync {
    /// Send `text` to the model and return its reply.
    async fn ask(&self, text: &str) -> Result<String, TransformError>;
}

/// Client for the `models/{model}:generateContent` endpoint.
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: &RewriteConfig, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
        }
    }

    fn url(&self) -> String {
        format!("{}/v1/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
            .filter(|t| !t.trim().is_empty())
    }
}

impl AskAsync for GeminiClient {
    #[instrument(level = "info", skip_all, fields(model = %self.model))]
    async fn ask(&self, text: &str) -> Result<String, TransformError> {
        let t0 = Instant::now();
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text }],
            }],
        };

        let resp = self
            .http
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| TransformError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis(),
                "Rewrite service rejected request"
            );
            return Err(TransformError::Http {
                status: status.as_u16(),
                body: truncate_for_log(&body, 300),
            });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| TransformError::Malformed(e.without_url().to_string()))?;
        let reply = parsed.first_text().ok_or(TransformError::EmptyResponse)?;

        info!(
            elapsed_ms = t0.elapsed().as_millis(),
            bytes = reply.len(),
            "Rewrite service replied"
        );
        Ok(reply)
    }
}
