//! Feedback orchestrator - strict priority fallback over the provider list.
//!
//! Remote chat first, then the local backend, then the deterministic mock.
//! Each provider gets exactly one attempt; failures are logged and the chain
//! falls through. The caller always gets text back.

use crate::config::AnalyzerConfig;
use crate::local::LocalProvider;
use crate::mock::MockFeedbackGenerator;
use crate::provider::{AnalysisRequest, FeedbackProvider, FeedbackSource};
use crate::remote::RemoteProvider;
use tracing::{debug, info, warn};

/// Feedback text together with the stage that produced it.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub text: String,
    pub source: FeedbackSource,
}

/// Ordered provider chain terminated by the mock generator.
pub struct FeedbackOrchestrator {
    providers: Vec<Box<dyn FeedbackProvider>>,
    mock: MockFeedbackGenerator,
}

impl FeedbackOrchestrator {
    pub fn new(providers: Vec<Box<dyn FeedbackProvider>>, mock: MockFeedbackGenerator) -> Self {
        Self { providers, mock }
    }

    /// Assemble the chain from config: remote if the key env var is set,
    /// local if the backend answered the startup probe, mock always.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        let mut providers: Vec<Box<dyn FeedbackProvider>> = Vec::new();

        if let Some(remote) = RemoteProvider::from_config(&config.remote) {
            providers.push(Box::new(remote));
        }
        if let Some(local) = LocalProvider::probe(&config.local, config.remote.max_tokens) {
            providers.push(Box::new(local));
        }

        info!(
            "Feedback chain ready ({} model stage(s) + mock)",
            providers.len()
        );
        Self::new(providers, MockFeedbackGenerator::builtin())
    }

    /// Run the chain and report which stage answered.
    pub fn analyze_with_source(&self, topic: &str, explanation: &str) -> AnalysisOutcome {
        let request = AnalysisRequest::new(topic, explanation);

        for provider in &self.providers {
            debug!("Trying provider {}", provider.name());
            match provider.try_generate(&request) {
                Ok(text) if !text.trim().is_empty() => {
                    info!("Provider {} answered", provider.name());
                    return AnalysisOutcome {
                        text,
                        source: provider.source(),
                    };
                }
                Ok(_) => {
                    warn!("Provider {} returned empty text, falling through", provider.name());
                }
                Err(e) => {
                    warn!("Provider {} failed: {}, falling through", provider.name(), e);
                }
            }
        }

        AnalysisOutcome {
            text: self.mock.generate(topic, explanation),
            source: FeedbackSource::Mock,
        }
    }

    /// Plain-text entry point. Never fails.
    pub fn analyze(&self, topic: &str, explanation: &str) -> String {
        self.analyze_with_source(topic, explanation).text
    }
}
