//! End-to-end tests for the feedback chain with no live model backends.
//!
//! Verifies the deterministic mock output shape that callers see when
//! neither the remote credential nor the local backend is present.

use gap_core::{FeedbackOrchestrator, FeedbackSource, MockFeedbackGenerator};

fn offline_orchestrator() -> FeedbackOrchestrator {
    FeedbackOrchestrator::new(Vec::new(), MockFeedbackGenerator::builtin())
}

#[test]
fn cnn_submission_yields_full_templated_report() {
    let orch = offline_orchestrator();
    let outcome = orch.analyze_with_source("CNN", "Convolutions use kernels");

    assert_eq!(outcome.source, FeedbackSource::Mock);
    for header in [
        "Missing Concepts",
        "Incorrect Understanding",
        "Depth Score: 10/10",
        "Suggested Next Steps",
    ] {
        assert!(outcome.text.contains(header), "missing header {header}");
    }
    assert!(outcome
        .text
        .lines()
        .any(|line| line == "- Stride and padding in convolution layers"));
}

#[test]
fn all_three_builtin_topics_score_ten() {
    let orch = offline_orchestrator();
    for topic in ["cnn", "backpropagation", "transformer"] {
        let text = orch.analyze(topic, "a short explanation");
        assert!(text.contains("Depth Score: 10/10"), "topic {topic}");
    }
}

#[test]
fn unknown_topic_gets_generic_report() {
    let orch = offline_orchestrator();
    let text = orch.analyze("Photosynthesis", "Plants convert light to sugar");
    assert!(text.contains("Key foundational concepts missing"));
    assert!(text.contains("Possible misconceptions"));
    assert!(text.contains("Depth Score: 7/10"));
}

#[test]
fn keyword_in_explanation_matches_case_insensitively() {
    let orch = offline_orchestrator();
    let text = orch.analyze("Deep learning", "I love CNNs");
    assert!(text.contains("Stride and padding in convolution layers"));
}

#[test]
fn repeated_submissions_are_stable() {
    let orch = offline_orchestrator();
    let a = orch.analyze("transformer", "attention is all you need");
    let b = orch.analyze("transformer", "attention is all you need");
    assert_eq!(a, b);
}
