//! Command implementations for gapctl.

use anyhow::{bail, Context, Result};
use console::style;
use gap_core::{concept_maps, prompts, AnalyzerConfig, FeedbackOrchestrator};
use std::io::Read;
use std::path::Path;

/// List the known topics with their concept maps.
pub fn topics() -> Result<()> {
    println!("{}", style("Known topics").bold());
    for map in concept_maps::builtin() {
        println!("\n  {}", style(map.topic).cyan().bold());
        for concept in map.concepts {
            println!("    - {concept}");
        }
    }
    Ok(())
}

/// Run an explanation through the feedback chain and print the result.
pub fn analyze(config_path: &Path, topic: &str, explanation: Option<String>) -> Result<()> {
    let explanation = resolve_explanation(explanation)?;

    let config = AnalyzerConfig::load(config_path)?;
    let orchestrator = FeedbackOrchestrator::from_config(&config);

    let outcome = orchestrator.analyze_with_source(topic, &explanation);

    println!("{}", style("Analysis Result").bold().underlined());
    println!("{}", style(format!("source: {}", outcome.source)).dim());
    println!();
    println!("{}", outcome.text);
    Ok(())
}

/// Print the gap-analysis prompt for a topic without calling any backend.
pub fn prompt(topic: &str, explanation: Option<String>) -> Result<()> {
    let explanation = resolve_explanation(explanation)?;

    let rendered = match concept_maps::find(topic) {
        Some(map) => prompts::build_gap_analysis_prompt(map.topic, map.concepts, &explanation),
        None => prompts::build_local_prompt(topic, &explanation),
    };

    println!("{rendered}");
    Ok(())
}

/// Take the explanation from the flag or stdin; reject empty input before
/// the chain runs.
fn resolve_explanation(explanation: Option<String>) -> Result<String> {
    let text = match explanation {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read explanation from stdin")?;
            buffer
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        bail!("Please enter an explanation.");
    }
    Ok(text)
}
