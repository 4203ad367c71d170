//! Generation Gateway: executes a prompt against the text generator and folds
//! every possible result into a `GenerationOutcome`.
//!
//! Nothing here returns an error: provider failures are logged and flattened
//! into `GenerationOutcome::Failure`, whose `message()` keeps the provider's
//! description verbatim.

use serde::Serialize;
use tracing::{error, warn};

use crate::generation::builder::{build_prompt, PromptOutcome};
use crate::generation::tasks::{FieldValues, TaskKind};
use crate::llm_client::{LlmError, TextGenerator};

/// Returned when the model answered with no usable text.
pub const ADVISORY_TEXT: &str =
    "VMD AI could not generate content for this request. Please try refining your input.";

/// Prefix of every provider-failure message. Form layers match on it for error styling.
pub const FAILURE_PREFIX: &str = "VMD AI encountered an error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The request was answered by a builder sentinel; the model was never called.
    InvalidRequest,
    Transport,
    Provider,
    MalformedResponse,
}

impl From<&LlmError> for FailureKind {
    fn from(e: &LlmError) -> Self {
        match e {
            LlmError::Http(_) => FailureKind::Transport,
            LlmError::Api { .. } => FailureKind::Provider,
            LlmError::Parse(_) => FailureKind::MalformedResponse,
        }
    }
}

/// The three observable outcomes of a generation call.
///
/// Advisory and failure are kept apart: the advisory wording is not an error
/// for display purposes, and callers may still depend on either fixed wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Content(String),
    Advisory(String),
    Failure { kind: FailureKind, detail: String },
}

impl GenerationOutcome {
    /// Flattened string form shown to end users.
    pub fn message(&self) -> String {
        match self {
            GenerationOutcome::Content(text) | GenerationOutcome::Advisory(text) => text.clone(),
            GenerationOutcome::Failure {
                kind: FailureKind::InvalidRequest,
                detail,
            } => detail.clone(),
            GenerationOutcome::Failure { detail, .. } => {
                format!("{FAILURE_PREFIX}: {detail}. Please try again or refine your input.")
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, GenerationOutcome::Failure { .. })
    }

    pub fn is_advisory(&self) -> bool {
        matches!(self, GenerationOutcome::Advisory(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            GenerationOutcome::Content(_) => "content",
            GenerationOutcome::Advisory(_) => "advisory",
            GenerationOutcome::Failure { .. } => "failure",
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            GenerationOutcome::Failure { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Calls the generator exactly once and normalizes the result.
/// Non-blank text is returned unmodified.
pub async fn dispatch(generator: &dyn TextGenerator, prompt: &str) -> GenerationOutcome {
    match generator.generate(prompt).await {
        Ok(text) if text.trim().is_empty() => {
            warn!("Generation returned empty content ({} byte prompt)", prompt.len());
            GenerationOutcome::Advisory(ADVISORY_TEXT.to_string())
        }
        Ok(text) => GenerationOutcome::Content(text),
        Err(e) => {
            error!("Error during AI generation: {e}");
            GenerationOutcome::Failure {
                kind: FailureKind::from(&e),
                detail: e.to_string(),
            }
        }
    }
}

/// Build → dispatch. A builder sentinel short-circuits without touching the generator.
pub async fn run_task(
    generator: &dyn TextGenerator,
    kind: TaskKind,
    values: &FieldValues,
) -> GenerationOutcome {
    match build_prompt(kind, values) {
        PromptOutcome::Prompt(prompt) => dispatch(generator, &prompt).await,
        PromptOutcome::Rejected(sentinel) => GenerationOutcome::Failure {
            kind: FailureKind::InvalidRequest,
            detail: sentinel.to_string(),
        },
    }
}
