//! Axum route handlers for the Generation API.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::ats_score::{score_keywords, AtsReport};
use crate::generation::builder::{build_prompt, PromptOutcome};
use crate::generation::gateway::{run_task, FailureKind};
use crate::generation::tasks::{descriptors, validate, FieldKind, FieldValues, TaskKind};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub required: bool,
    pub default: Option<&'static str>,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TaskSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Serialize)]
pub struct TaskCatalogResponse {
    pub tasks: Vec<TaskSummary>,
}

#[derive(Debug, Serialize)]
pub struct PromptPreviewResponse {
    pub task: TaskKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub task: TaskKind,
    /// "content" | "advisory" | "failure"
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<FailureKind>,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    pub user_skills: String,
    pub job_keywords: String,
}

fn resolve_task(task_id: &str) -> Result<TaskKind, AppError> {
    TaskKind::from_id(task_id)
        .ok_or_else(|| AppError::NotFound(format!("Task '{task_id}' not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/tasks
///
/// Lists every supported task with its fields, defaults and option lists.
pub async fn handle_list_tasks() -> Json<TaskCatalogResponse> {
    let tasks = descriptors()
        .iter()
        .map(|d| TaskSummary {
            id: d.id,
            title: d.title,
            fields: d
                .fields
                .iter()
                .map(|f| FieldView {
                    name: f.name,
                    required: f.is_required(),
                    default: f.default,
                    kind: f.kind,
                    choices: f.choices.to_vec(),
                })
                .collect(),
        })
        .collect();

    Json(TaskCatalogResponse { tasks })
}

/// POST /api/v1/tasks/:task_id/prompt
///
/// Renders the prompt without calling the model. No validation is applied,
/// so the preview shows exactly what the builder would send.
pub async fn handle_preview_prompt(
    Path(task_id): Path<String>,
    Json(request): Json<TaskRequest>,
) -> Result<Json<PromptPreviewResponse>, AppError> {
    let kind = resolve_task(&task_id)?;
    let values = FieldValues::resolve(kind.descriptor(), &request.fields);

    let response = match build_prompt(kind, &values) {
        PromptOutcome::Prompt(prompt) => PromptPreviewResponse {
            task: kind,
            prompt: Some(prompt),
            rejected: None,
        },
        PromptOutcome::Rejected(sentinel) => PromptPreviewResponse {
            task: kind,
            prompt: None,
            rejected: Some(sentinel),
        },
    };

    Ok(Json(response))
}

/// POST /api/v1/tasks/:task_id
///
/// Validates the fields, renders the prompt and dispatches it once.
/// Generation failures still return 200 with `status: "failure"`.
pub async fn handle_run_task(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    Json(request): Json<TaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    let kind = resolve_task(&task_id)?;
    let values = FieldValues::resolve(kind.descriptor(), &request.fields);
    validate(kind, &values)?;

    info!("Running generation task {}", kind.id());
    let outcome = run_task(state.generator.as_ref(), kind, &values).await;
    if outcome.is_failure() {
        warn!("Task {} finished with {:?}", kind.id(), outcome.failure_kind());
    } else if outcome.is_advisory() {
        info!("Task {} produced no usable content", kind.id());
    }

    Ok(Json(TaskResponse {
        task: kind,
        status: outcome.status(),
        failure_kind: outcome.failure_kind(),
        text: outcome.message(),
    }))
}

/// POST /api/v1/ats-score
///
/// Keyword-overlap estimate; never calls the model.
pub async fn handle_ats_score(
    Json(request): Json<AtsScoreRequest>,
) -> Result<Json<AtsReport>, AppError> {
    let report = score_keywords(&request.user_skills, &request.job_keywords)?;
    Ok(Json(report))
}
