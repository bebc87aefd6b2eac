//! Gap Core - conceptual gap analysis with a model fallback chain.
//!
//! A user explains a topic in their own words; the analyzer returns a
//! structured critique (missing concepts, misconceptions, a depth score,
//! next steps). Responses come from a strict priority chain: a remote chat
//! API when a credential is present, a local generation backend when it
//! answered the startup probe, and finally a deterministic templated
//! generator that never fails.

pub mod concept_maps;
pub mod config;
pub mod keywords;
pub mod local;
pub mod mock;
pub mod orchestrator;
pub mod prompts;
pub mod provider;
pub mod remote;

pub use config::AnalyzerConfig;
pub use keywords::{KeywordEntry, KeywordTable};
pub use mock::MockFeedbackGenerator;
pub use orchestrator::{AnalysisOutcome, FeedbackOrchestrator};
pub use provider::{AnalysisRequest, FeedbackProvider, FeedbackSource, ProviderError};
