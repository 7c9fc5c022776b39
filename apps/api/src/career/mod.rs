// Career advice: job recommendations and portfolio project ideas.
// All generation goes through llm_client; nothing here calls Gemini directly.

pub mod advisor;
pub mod handlers;
pub mod prompts;
