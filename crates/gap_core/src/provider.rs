//! Feedback provider abstraction - the explicit strategy list behind the
//! fallback chain.
//!
//! Each provider exposes one fallible `try_generate` call; the orchestrator
//! walks them in priority order and takes the first non-empty result.

use thiserror::Error;

/// One analysis submission. Transient, built per call.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub topic: String,
    pub explanation: String,
}

impl AnalysisRequest {
    pub fn new(topic: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            explanation: explanation.into(),
        }
    }
}

/// Which stage of the chain produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSource {
    /// Remote OpenAI-compatible chat API.
    Remote,
    /// Local Ollama-style inference backend.
    Local,
    /// Deterministic templated generator.
    Mock,
}

impl std::fmt::Display for FeedbackSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedbackSource::Remote => write!(f, "remote"),
            FeedbackSource::Local => write!(f, "local"),
            FeedbackSource::Mock => write!(f, "mock"),
        }
    }
}

/// Provider failures. All of these are recovered by falling through to the
/// next stage; none reach the end user.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("provider is not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("backend returned an empty response")]
    EmptyResponse,
}

/// A single response-generation strategy.
pub trait FeedbackProvider: Send + Sync {
    /// Short stage name used in logs.
    fn name(&self) -> &'static str;

    /// Which source tag a success from this provider carries.
    fn source(&self) -> FeedbackSource;

    /// Issue one generation attempt. No retries; the orchestrator handles
    /// fallback.
    fn try_generate(&self, request: &AnalysisRequest) -> Result<String, ProviderError>;
}
