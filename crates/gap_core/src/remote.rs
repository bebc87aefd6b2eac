//! Remote model stage - one blocking call to an OpenAI-compatible chat API.
//!
//! The stage only exists when the configured API key environment variable is
//! set; absence disables it without error.

use crate::config::RemoteConfig;
use crate::prompts::{self, SYSTEM_PROMPT};
use crate::provider::{AnalysisRequest, FeedbackProvider, FeedbackSource, ProviderError};
use serde_json::json;
use std::env;
use tracing::{debug, info};

/// OpenAI-compatible chat provider.
pub struct RemoteProvider {
    client: reqwest::blocking::Client,
    base_url: String,
    model: String,
    api_key: String,
    max_tokens: u32,
}

impl RemoteProvider {
    /// Build the provider if the key environment variable is present.
    pub fn from_config(config: &RemoteConfig) -> Option<Self> {
        let api_key = match env::var(&config.api_key_env) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                info!(
                    "{} not set, remote model stage disabled",
                    config.api_key_env
                );
                return None;
            }
        };

        Some(Self {
            client: reqwest::blocking::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            max_tokens: config.max_tokens,
        })
    }
}

impl FeedbackProvider for RemoteProvider {
    fn name(&self) -> &'static str {
        "remote-chat"
    }

    fn source(&self) -> FeedbackSource {
        FeedbackSource::Remote
    }

    fn try_generate(&self, request: &AnalysisRequest) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompts::build_user_message(&request.topic, &request.explanation)},
            ],
            "max_tokens": self.max_tokens,
        });

        debug!("[>]  Remote chat call [{}]", self.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ProviderError::Http(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(format!(
                "HTTP {} from remote API",
                response.status()
            )));
        }

        let response_json: serde_json::Value = response
            .json()
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON body: {e}")))?;

        let text = response_json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .ok_or(ProviderError::EmptyResponse)?;

        debug!("[<]  Remote response ({} chars)", text.len());
        Ok(text.to_string())
    }
}
