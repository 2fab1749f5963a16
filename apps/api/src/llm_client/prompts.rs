// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Output contract for anything the resume renderer has to display.
pub const MARKDOWN_FORMAT_RULES: &str = "\
=== IMPORTANT FORMATTING RULES ===
- Use standard Markdown for headers (#, ##), bold (**), and lists (*).
- Ensure contact info is on one line or clearly separated.
- Keep descriptions concise and achievement-oriented.
- Do NOT include any introductory or concluding remarks outside the resume content.";

/// Appended to prompts whose answer is parsed as a bare integer.
pub const NUMBER_ONLY_INSTRUCTION: &str =
    "Output ONLY the numerical percentage. Do not include any other text or characters.";
