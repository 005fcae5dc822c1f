//! The generative model client.

use std::time::Duration;

use super::schema::{decode_palette, extract_text, request_body};
use super::PaletteError;
use crate::config::PaletteConfig;
use crate::models::PaletteDraft;

/// Longest slice of an error body kept for display.
const MAX_ERROR_BODY: usize = 500;

/// Something that turns a description into a palette.
pub trait PaletteGenerator: Send + Sync {
    /// Generates a palette for `prompt`.
    fn generate(&self, prompt: &str) -> Result<PaletteDraft, PaletteError>;
}

/// Gemini `generateContent` over HTTPS.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Creates a client from configuration, reading the key from the
    /// environment variable the config names.
    pub fn from_config(config: &PaletteConfig) -> Result<Self, PaletteError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PaletteError::MissingCredential {
                var: config.api_key_env.clone(),
            })?;

        Self::new(
            &config.endpoint,
            &config.model,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Creates a client with explicit settings.
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: String,
        timeout: Duration,
    ) -> Result<Self, PaletteError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("colorspeak/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    /// URL of the generateContent call.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl PaletteGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<PaletteDraft, PaletteError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(PaletteError::EmptyPrompt);
        }

        tracing::info!(model = %self.model, "requesting palette");
        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "palette request rejected");
            return Err(PaletteError::Status {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let text = extract_text(&body)?;
        let draft = decode_palette(&text)?;
        tracing::debug!(name = %draft.name, colors = draft.colors.len(), "palette decoded");
        Ok(draft)
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((index, _)) => format!("{}…", &text[..index]),
        None => text.to_string(),
    }
}
