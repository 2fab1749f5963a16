// Resume generation: prompt construction, the LLM call with its offline
// fallback, and the advisory likelihood evaluation.
// All LLM calls go through the llm_client::TextGenerator seam.

pub mod generator;
pub mod handlers;
pub mod likelihood;
pub mod prompts;
