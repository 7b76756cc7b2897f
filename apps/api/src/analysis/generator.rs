//! Analysis Generator — prompt → model → parse, with the heuristic fallback
//! as the only recovery path.
//!
//! States: `BuildingPrompt → CallingModel → Parsing → {Success | Fallback}`.
//! The model is called at most once per request.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::analysis::fallback::fallback_analysis;
use crate::analysis::keywords::JobRole;
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};

/// Where a generated analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Model,
    Fallback,
}

/// Generator state, logged as the request moves through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    BuildingPrompt,
    CallingModel,
    Parsing,
    Success,
    Fallback,
}

/// Unvalidated analysis payload plus its provenance.
#[derive(Debug, Clone)]
pub struct GeneratedAnalysis {
    pub payload: Value,
    pub source: AnalysisSource,
}

impl GeneratedAnalysis {
    pub fn using_fallback(&self) -> bool {
        self.source == AnalysisSource::Fallback
    }
}

#[derive(Debug, thiserror::Error)]
enum GenerationFailure {
    #[error(transparent)]
    Model(#[from] LlmError),

    #[error("reply is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reply is JSON but not an object")]
    NotAnObject,
}

/// Produces an analysis for `resume_text`. Never fails: any model or parse
/// error yields the fallback analysis instead.
pub async fn generate_analysis(
    generator: &dyn TextGenerator,
    resume_text: &str,
    role: JobRole,
) -> GeneratedAnalysis {
    match request_model_analysis(generator, resume_text, role).await {
        Ok(payload) => {
            transition(GenerationState::Success);
            info!("Model analysis received for role '{}'", role.as_str());
            GeneratedAnalysis {
                payload,
                source: AnalysisSource::Model,
            }
        }
        Err(e) => {
            transition(GenerationState::Fallback);
            warn!("Model analysis unavailable, using heuristic fallback: {e}");
            let fallback = fallback_analysis(resume_text, role);
            GeneratedAnalysis {
                // ResumeAnalysis only holds strings, lists and a u8; serialization cannot fail.
                payload: serde_json::to_value(fallback).unwrap_or(Value::Null),
                source: AnalysisSource::Fallback,
            }
        }
    }
}

async fn request_model_analysis(
    generator: &dyn TextGenerator,
    resume_text: &str,
    role: JobRole,
) -> Result<Value, GenerationFailure> {
    transition(GenerationState::BuildingPrompt);
    let prompt = build_analysis_prompt(resume_text, Some(role));

    transition(GenerationState::CallingModel);
    let reply = generator.generate(ANALYSIS_SYSTEM, &prompt).await?;

    transition(GenerationState::Parsing);
    parse_reply(&reply)
}

fn parse_reply(reply: &str) -> Result<Value, GenerationFailure> {
    let value: Value = serde_json::from_str(strip_json_fences(reply))?;
    if !value.is_object() {
        return Err(GenerationFailure::NotAnObject);
    }
    Ok(value)
}

fn transition(state: GenerationState) {
    debug!("analysis generator -> {state:?}");
}
