// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction appended to prompts whose output is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Common instruction appended to all advice prompts.
pub const HONESTY_INSTRUCTION: &str = "\
    CRITICAL: Base every statement on the profile and activities provided. \
    Do NOT fabricate achievements, awards, or scores, and do NOT inflate admission chances. \
    If the information is insufficient, say so and use the level \"Unclear\".";
