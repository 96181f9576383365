use std::time::Duration;

use engine_logging::engine_debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{FailureKind, GenerateError};

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3";

#[derive(Debug, Clone)]
pub struct GenerateSettings {
    pub base_url: String,
    pub model: String,
    pub connect_timeout: Duration,
    /// `None` waits for the model as long as it takes.
    pub request_timeout: Option<Duration>,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

/// Prompt in, text out.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    fn model(&self) -> &str;
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for Ollama's `/api/generate` endpoint.
///
/// Streaming is disabled, so each call resolves once the full reply is in.
#[derive(Debug, Clone)]
pub struct OllamaGenerator {
    settings: GenerateSettings,
    endpoint: Url,
    client: reqwest::Client,
}

impl OllamaGenerator {
    pub fn new(settings: GenerateSettings) -> Result<Self, GenerateError> {
        let endpoint = generate_endpoint(&settings.base_url)?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| GenerateError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn generate_endpoint(base_url: &str) -> Result<Url, GenerateError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|url| url.join("api/generate"))
        .map_err(|err| GenerateError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[async_trait::async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        engine_debug!(
            "Generating with model={} prompt_len={}",
            self.settings.model,
            prompt.len()
        );

        let request = GenerateRequest {
            model: &self.settings.model,
            prompt,
            stream: false,
        };
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("{status} {}", body.trim()),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: GenerateResponse = serde_json::from_slice(&body)
            .map_err(|err| GenerateError::new(FailureKind::InvalidResponse, err.to_string()))?;

        engine_debug!("Model replied with {} bytes", parsed.response.len());
        Ok(parsed.response)
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GenerateError {
    if err.is_timeout() {
        return GenerateError::new(FailureKind::Timeout, err.to_string());
    }
    GenerateError::new(FailureKind::Network, err.to_string())
}
