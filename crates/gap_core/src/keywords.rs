//! Keyword table backing the deterministic mock generator.
//!
//! Each entry maps a topic keyword to three ordered lists: concepts the
//! explanation is likely missing, common misconceptions, and suggested next
//! steps. Matching is first-match-wins in insertion order, so the order of
//! entries is part of the contract.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// One keyword with its associated feedback lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub missing: Vec<String>,
    pub incorrect: Vec<String>,
    pub next_steps: Vec<String>,
}

impl KeywordEntry {
    pub fn new(
        keyword: impl Into<String>,
        missing: &[&str],
        incorrect: &[&str],
        next_steps: &[&str],
    ) -> Self {
        Self {
            keyword: keyword.into(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            incorrect: incorrect.iter().map(|s| s.to_string()).collect(),
            next_steps: next_steps.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered, immutable collection of keyword entries.
///
/// Built once and injected into the generator at construction; never mutated
/// afterwards. `missing` must be non-empty on every entry because it feeds
/// the depth-score formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordTable {
    entries: Vec<KeywordEntry>,
}

impl KeywordTable {
    /// Build a table from entries, normalizing keywords to lowercase.
    pub fn new(entries: Vec<KeywordEntry>) -> Result<Self> {
        let mut normalized = entries;
        for entry in &mut normalized {
            entry.keyword = entry.keyword.to_lowercase();
        }
        let table = Self { entries: normalized };
        table.validate()?;
        Ok(table)
    }

    /// The built-in three-topic table. Order matters: first match wins.
    pub fn builtin() -> Self {
        let entries = vec![
            KeywordEntry::new(
                "cnn",
                &[
                    "Stride and padding in convolution layers",
                    "Backpropagation through convolution layers",
                    "Overfitting and regularization",
                ],
                &["Confused fully connected layers with convolution layers"],
                &[
                    "Review CNN architecture in detail",
                    "Implement a simple CNN on MNIST dataset",
                    "Practice explaining convolution and pooling",
                ],
            ),
            KeywordEntry::new(
                "backpropagation",
                &[
                    "Chain rule for derivatives",
                    "Gradient computation for each layer",
                    "Weight initialization impact",
                ],
                &["Believing weights update independently of other layers"],
                &[
                    "Review chain rule for multi-layer networks",
                    "Solve example backpropagation step-by-step",
                ],
            ),
            KeywordEntry::new(
                "transformer",
                &[
                    "Attention mechanism details",
                    "Positional encoding",
                    "Multi-head attention",
                ],
                &["Confusing RNNs with Transformer layers"],
                &[
                    "Read Transformer architecture paper",
                    "Implement a small transformer model",
                ],
            ),
        ];

        // Builtin keywords are already lowercase and every missing list is
        // non-empty, so no normalization or validation pass is needed.
        Self { entries }
    }

    /// Parse a table from TOML, for substituting custom entries in tests or
    /// config.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let table: Self = toml::from_str(input)?;
        Self::new(table.entries)
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// First entry whose keyword occurs in either the topic or the
    /// explanation, case-insensitively.
    pub fn match_entry(&self, topic: &str, explanation: &str) -> Option<&KeywordEntry> {
        let topic = topic.to_lowercase();
        let explanation = explanation.to_lowercase();
        self.entries
            .iter()
            .find(|e| topic.contains(&e.keyword) || explanation.contains(&e.keyword))
    }

    fn validate(&self) -> Result<()> {
        for entry in &self.entries {
            if entry.keyword.trim().is_empty() {
                bail!("keyword table entry has an empty keyword");
            }
            if entry.missing.is_empty() {
                bail!(
                    "keyword table entry '{}' has no missing-concepts list",
                    entry.keyword
                );
            }
        }
        Ok(())
    }
}
