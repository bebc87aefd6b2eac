//! Deterministic mock feedback - produces a structured critique without any
//! model when the remote and local backends are unavailable.
//!
//! Pure function of its inputs and the injected keyword table; performs no
//! I/O and never fails. Used as the terminal stage of the fallback chain.

use crate::keywords::KeywordTable;

/// Generic section texts used when no keyword matches.
const GENERIC_MISSING: &str = "Key foundational concepts missing";
const GENERIC_INCORRECT: &str = "Possible misconceptions";
const GENERIC_NEXT_STEPS: [&str; 2] = ["Review topic from reliable sources", "Practice exercises"];

/// Depth score baseline; a matched entry adds `missing.len() % 4`.
const BASE_DEPTH_SCORE: usize = 7;

/// Templated feedback generator driven by a keyword table.
pub struct MockFeedbackGenerator {
    table: KeywordTable,
}

impl MockFeedbackGenerator {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn builtin() -> Self {
        Self::new(KeywordTable::builtin())
    }

    /// Render a critique for the given topic and explanation.
    ///
    /// Case-insensitive substring matching against the table; the first
    /// matching entry (table order) supplies the section lists, otherwise
    /// generic texts are used. Any input produces output, including an empty
    /// explanation.
    pub fn generate(&self, topic: &str, explanation: &str) -> String {
        let (missing, incorrect, next_steps, depth_score) =
            match self.table.match_entry(topic, explanation) {
                Some(entry) => (
                    entry.missing.join("\n- "),
                    entry.incorrect.join("\n- "),
                    entry.next_steps.join("\n- "),
                    BASE_DEPTH_SCORE + entry.missing.len() % 4,
                ),
                None => (
                    GENERIC_MISSING.to_string(),
                    GENERIC_INCORRECT.to_string(),
                    GENERIC_NEXT_STEPS.join("\n- "),
                    BASE_DEPTH_SCORE,
                ),
            };

        format!(
            "Missing Concepts:\n- {missing}\n\n\
             Incorrect Understanding:\n- {incorrect}\n\n\
             Depth Score: {depth_score}/10\n\n\
             Suggested Next Steps:\n- {next_steps}\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordEntry;

    #[test]
    fn test_cnn_feedback_scores_ten() {
        let gen = MockFeedbackGenerator::builtin();
        let out = gen.generate("CNN", "Convolutions use kernels");
        assert!(out.contains("Stride and padding in convolution layers"));
        assert!(out.contains("Backpropagation through convolution layers"));
        assert!(out.contains("Overfitting and regularization"));
        // 7 + 3 % 4 = 10
        assert!(out.contains("Depth Score: 10/10"));
    }

    #[test]
    fn test_backpropagation_and_transformer_score_ten() {
        let gen = MockFeedbackGenerator::builtin();
        for topic in ["backpropagation", "transformer"] {
            let out = gen.generate(topic, "some explanation");
            assert!(out.contains("Depth Score: 10/10"), "topic {topic}");
        }
    }

    #[test]
    fn test_score_formula_depends_on_missing_count() {
        // 5 missing items: 7 + 5 % 4 = 8
        let table = KeywordTable::new(vec![KeywordEntry::new(
            "rnn",
            &["a", "b", "c", "d", "e"],
            &["x"],
            &["y"],
        )])
        .unwrap();
        let gen = MockFeedbackGenerator::new(table);
        let out = gen.generate("RNN", "");
        assert!(out.contains("Depth Score: 8/10"));
    }

    #[test]
    fn test_generic_fallback_scores_seven() {
        let gen = MockFeedbackGenerator::builtin();
        let out = gen.generate("Chemistry", "Atoms bond covalently");
        assert!(out.contains("Key foundational concepts missing"));
        assert!(out.contains("Possible misconceptions"));
        assert!(out.contains("Review topic from reliable sources"));
        assert!(out.contains("Depth Score: 7/10"));
    }

    #[test]
    fn test_explanation_alone_can_match() {
        let gen = MockFeedbackGenerator::builtin();
        let out = gen.generate("Deep learning", "I love CNNs");
        assert!(out.contains("Stride and padding in convolution layers"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let gen = MockFeedbackGenerator::builtin();
        let a = gen.generate("transformer", "attention");
        let b = gen.generate("transformer", "attention");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_explanation_still_produces_output() {
        let gen = MockFeedbackGenerator::builtin();
        let out = gen.generate("", "");
        assert!(out.contains("Missing Concepts:"));
        assert!(out.contains("Suggested Next Steps:"));
    }

    #[test]
    fn test_all_section_headers_present() {
        let gen = MockFeedbackGenerator::builtin();
        let out = gen.generate("CNN", "Convolutions use kernels");
        for header in [
            "Missing Concepts:",
            "Incorrect Understanding:",
            "Depth Score: 10/10",
            "Suggested Next Steps:",
        ] {
            assert!(out.contains(header), "missing header {header}");
        }
    }
}
