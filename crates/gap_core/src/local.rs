//! Local model stage - one blocking generation call to an Ollama-style
//! backend.
//!
//! Availability is probed once at startup; an unreachable backend disables
//! the stage silently rather than failing per call.

use crate::config::LocalConfig;
use crate::{concept_maps, prompts};
use crate::provider::{AnalysisRequest, FeedbackProvider, FeedbackSource, ProviderError};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama-style text-generation provider.
pub struct LocalProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

impl LocalProvider {
    /// Probe the backend once; `None` when it is not reachable.
    pub fn probe(config: &LocalConfig, max_tokens: u32) -> Option<Self> {
        let probe_client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.probe_timeout_secs))
            .build()
            .ok()?;

        let reachable = probe_client
            .get(format!("{}/api/tags", config.endpoint))
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false);

        if !reachable {
            info!(
                "Local backend at {} not reachable, stage disabled",
                config.endpoint
            );
            return None;
        }

        let client = match reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!("Failed to build local HTTP client: {}", e);
                return None;
            }
        };

        info!("Local backend available at {}", config.endpoint);
        Some(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_tokens,
        })
    }

    fn build_prompt(&self, request: &AnalysisRequest) -> String {
        // Use the concept-map template when the topic has one.
        match concept_maps::find(&request.topic) {
            Some(map) => prompts::build_gap_analysis_prompt(
                map.topic,
                map.concepts,
                &request.explanation,
            ),
            None => prompts::build_local_prompt(&request.topic, &request.explanation),
        }
    }
}

impl FeedbackProvider for LocalProvider {
    fn name(&self) -> &'static str {
        "local-generate"
    }

    fn source(&self) -> FeedbackSource {
        FeedbackSource::Local
    }

    fn try_generate(&self, request: &AnalysisRequest) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.endpoint);

        let body = json!({
            "model": self.model,
            "prompt": self.build_prompt(request),
            "stream": false,
            "options": { "num_predict": self.max_tokens },
        });

        debug!("[>]  Local generate call [{}]", self.model);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| ProviderError::Http(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(format!(
                "HTTP {} from local backend",
                response.status()
            )));
        }

        let generated: GenerateResponse = response
            .json()
            .map_err(|e| ProviderError::MalformedResponse(format!("invalid JSON body: {e}")))?;

        if generated.response.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        debug!("[<]  Local response ({} chars)", generated.response.len());
        Ok(generated.response)
    }
}
