//! Concept maps - the sub-concepts a full understanding of a topic covers.
//!
//! Consumed by the prompt builder and the topic selector, never by the mock
//! generator.

/// A topic with its ordered sub-concept list.
#[derive(Debug, Clone)]
pub struct ConceptMap {
    pub topic: &'static str,
    pub concepts: &'static [&'static str],
}

/// The built-in concept maps.
pub fn builtin() -> Vec<ConceptMap> {
    vec![
        ConceptMap {
            topic: "CNN",
            concepts: &[
                "Convolution operation",
                "Kernels and filters",
                "Weight sharing",
                "Receptive field",
                "Pooling",
                "Translation invariance",
                "Computational efficiency",
            ],
        },
        ConceptMap {
            topic: "Backpropagation",
            concepts: &[
                "Loss function",
                "Chain rule",
                "Gradient computation",
                "Weight update mechanism",
                "Learning rate",
                "Vanishing gradients",
            ],
        },
    ]
}

/// Look up a concept map by topic name, case-insensitively.
pub fn find(topic: &str) -> Option<ConceptMap> {
    builtin()
        .into_iter()
        .find(|map| map.topic.eq_ignore_ascii_case(topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_topics() {
        let maps = builtin();
        let topics: Vec<&str> = maps.iter().map(|m| m.topic).collect();
        assert_eq!(topics, vec!["CNN", "Backpropagation"]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert!(find("cnn").is_some());
        assert!(find("BACKPROPAGATION").is_some());
        assert!(find("transformer").is_none());
    }
}
