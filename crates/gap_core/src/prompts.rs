//! Prompt templates for the remote and local model stages.

/// System instruction for the remote chat call.
pub const SYSTEM_PROMPT: &str = "You analyze conceptual understanding.";

/// User message for the remote chat call. Kept minimal; the response is
/// returned to the caller verbatim.
pub fn build_user_message(topic: &str, explanation: &str) -> String {
    format!("Topic: {topic}\nExplanation: {explanation}")
}

/// Single-string prompt for the local generation call.
pub fn build_local_prompt(topic: &str, explanation: &str) -> String {
    format!(
        "Analyze this student's explanation and provide missing concepts, \
         incorrect understanding, depth score, and next steps:\n\
         Topic: {topic}\nExplanation: {explanation}"
    )
}

/// Full gap-analysis prompt with the topic's concept map inlined. Used when
/// a concept map exists for the topic; also rendered standalone by gapctl so
/// the analysis can be run against any chat frontend.
pub fn build_gap_analysis_prompt(topic: &str, concepts: &[&str], explanation: &str) -> String {
    let concept_list = concepts
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert AI instructor.\n\n\
         Topic:\n{topic}\n\n\
         Core concepts required for deep understanding:\n{concept_list}\n\n\
         User explanation:\n{explanation}\n\n\
         Analyze the explanation and do the following:\n\n\
         1. List missing or weakly explained concepts\n\
         2. Detect shallow reasoning patterns (definition-only answers, buzzwords, lack of causal explanation)\n\
         3. Give a conceptual coverage score out of 100\n\
         4. Suggest how the explanation can be improved\n\n\
         Respond clearly using bullet points.\n"
    )
}
