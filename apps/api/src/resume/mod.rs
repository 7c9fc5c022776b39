// Resume intake: PDF upload, text extraction, and skill-gap analysis.
// All generation goes through llm_client; nothing here calls Gemini directly.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod prompts;
