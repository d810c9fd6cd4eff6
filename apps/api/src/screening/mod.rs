// Classification endpoint: upload → extract → prompt → inference → verdict.
// All model calls go through llm_client::InferenceService.

pub mod handlers;
pub mod prompts;
