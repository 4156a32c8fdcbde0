// Shared prompt fragments for every generation call.
// Feature-specific prompts live next to the feature (see advisory/prompts.rs).

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "Output must be valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";

/// Content-safety rules. Generated text that breaks them is discarded downstream.
pub const SAFETY_INSTRUCTION: &str = "\
- No illegal, unethical, exploitative, gambling, or harmful suggestions.
- Never mention betting, hacking, fraud, the dark web, or money laundering, even as warnings.";
