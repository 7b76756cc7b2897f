// Resume Analysis Engine
// Implements: text extraction, keyword dictionary, heuristic fallback,
// prompt building, model generation, response validation, and the
// request pipeline tying them together.
// All model calls go through llm_client.

pub mod extractor;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod prompts;
pub mod validation;
