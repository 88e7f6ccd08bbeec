//! HTTP refiner for Gemini-style `generateContent` endpoints.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use super::{Refiner, RefinementError, CORRECTION_CONTRACT};

/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["FLOWNOTE_API_KEY", "GEMINI_API_KEY"];

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Connection settings for [`GeminiRefiner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinerConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for RefinerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("flownote/{}", crate::VERSION),
        }
    }
}

/// Refiner that asks a hosted model to proofread text.
pub struct GeminiRefiner {
    config: RefinerConfig,
    api_key: SecretString,
    agent: ureq::Agent,
}

impl GeminiRefiner {
    pub fn new(config: RefinerConfig, api_key: SecretString) -> Result<Self, RefinementError> {
        if config.timeout_ms == 0 {
            return Err(RefinementError::NotConfigured(
                "timeout must be > 0".to_string(),
            ));
        }
        if config.endpoint.trim().is_empty() || config.model.trim().is_empty() {
            return Err(RefinementError::NotConfigured(
                "endpoint and model must be set".to_string(),
            ));
        }
        if api_key.expose_secret().trim().is_empty() {
            return Err(RefinementError::NotConfigured("API key is empty".to_string()));
        }
        let timeout = Duration::from_millis(config.timeout_ms.max(100));
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(&config.user_agent)
            .build();
        Ok(Self {
            config,
            api_key,
            agent,
        })
    }

    /// Build a refiner with the API key taken from the environment.
    pub fn from_env(config: RefinerConfig) -> Result<Self, RefinementError> {
        let key = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                RefinementError::NotConfigured(format!(
                    "set {} to enable refinement",
                    API_KEY_ENV_VARS[0]
                ))
            })?;
        Self::new(config, SecretString::from(key))
    }

    pub fn config(&self) -> &RefinerConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl Refiner for GeminiRefiner {
    fn correct(&self, text: &str) -> Result<String, RefinementError> {
        log::info!(
            "event=refine_request module=refine status=start model={} chars={}",
            self.config.model,
            text.chars().count()
        );
        let response = self
            .agent
            .post(&self.url())
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .set("x-goog-api-key", self.api_key.expose_secret())
            .send_json(request_body(text))
            .map_err(error_from_ureq)?;
        let body: Value = response
            .into_json()
            .map_err(|e| RefinementError::MalformedResponse(e.to_string()))?;
        let corrected = keep_edges(text, extract_text(&body)?.as_str());
        log::info!(
            "event=refine_request module=refine status=ok chars={}",
            corrected.chars().count()
        );
        Ok(corrected)
    }
}

/// JSON payload for a single correction request.
pub fn request_body(text: &str) -> Value {
    serde_json::json!({
        "systemInstruction": {
            "parts": [{ "text": CORRECTION_CONTRACT }]
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": text }]
        }],
        "generationConfig": {
            "temperature": 0
        }
    })
}

/// Pull the corrected text out of a `generateContent` response.
pub fn extract_text(body: &Value) -> Result<String, RefinementError> {
    let parts = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or_else(|| {
            RefinementError::MalformedResponse("missing candidates[0].content.parts".to_string())
        })?;
    let joined: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();
    let trimmed = joined.trim();
    if trimmed.is_empty() {
        return Err(RefinementError::EmptyResponse);
    }
    Ok(trimmed.to_string())
}

/// Wrap `corrected` in the leading and trailing whitespace of `original`.
///
/// The model drops or invents edge whitespace; only the inner text is its
/// to change.
pub fn keep_edges(original: &str, corrected: &str) -> String {
    let core = original.trim();
    if core.is_empty() {
        return corrected.to_string();
    }
    let start = original.len() - original.trim_start().len();
    let end = start + core.len();
    format!("{}{}{}", &original[..start], corrected, &original[end..])
}

fn error_from_ureq(err: ureq::Error) -> RefinementError {
    match err {
        ureq::Error::Status(429, _) => RefinementError::Quota,
        ureq::Error::Status(status, _) => RefinementError::Http { status },
        ureq::Error::Transport(transport) => {
            let combined = format!("{:?} {}", transport.kind(), transport);
            RefinementError::Transport {
                kind: classify_transport_error(&combined),
            }
        }
    }
}

fn classify_transport_error(raw: &str) -> &'static str {
    let lower = raw.to_ascii_lowercase();
    if lower.contains("timeout") || lower.contains("timed out") {
        "timeout"
    } else if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
        "tls"
    } else if lower.contains("dns") {
        "dns"
    } else if lower.contains("connection") || lower.contains("connect") {
        "connection"
    } else {
        "transport"
    }
}
