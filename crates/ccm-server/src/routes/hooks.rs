use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::error::AppError;
use crate::state::AppState;
use ccm_core::hook_id::HookId;
use ccm_core::service;

async fn list_at(settings: PathBuf) -> Result<Json<Value>, AppError> {
    let hooks = tokio::task::spawn_blocking(move || service::list_hooks(&settings))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(json!({ "success": true, "hooks": hooks })))
}

async fn update_at(
    app: AppState,
    settings: PathBuf,
    hook_id: String,
    body: Value,
) -> Result<Json<Value>, AppError> {
    let hook = tokio::task::spawn_blocking(move || {
        service::update_hook(&app.locks, &settings, &hook_id, &body)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(json!({ "success": true, "hook": hook })))
}

async fn delete_at(app: AppState, settings: PathBuf, hook_id: String) -> Result<Json<Value>, AppError> {
    let hook = tokio::task::spawn_blocking(move || service::delete_hook(&app.locks, &settings, &hook_id))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(json!({ "success": true, "hook": hook })))
}

// ---------------------------------------------------------------------------
// Project scope
// ---------------------------------------------------------------------------

/// GET /api/projects/:project_id/hooks — every hook in the project's settings.
pub async fn list_project_hooks(
    State(app): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let settings = app.project_settings(&project_id)?;
    list_at(settings).await
}

/// PUT /api/projects/:project_id/hooks/:hook_id — partial update of one hook.
pub async fn update_project_hook(
    State(app): State<AppState>,
    Path((project_id, hook_id)): Path<(String, String)>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    // Malformed ids are a 400 even when the body or project is bad too.
    HookId::decode(&hook_id)?;
    let Json(body) = body?;
    let settings = app.project_settings(&project_id)?;
    update_at(app, settings, hook_id, body).await
}

/// DELETE /api/projects/:project_id/hooks/:hook_id
pub async fn delete_project_hook(
    State(app): State<AppState>,
    Path((project_id, hook_id)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    HookId::decode(&hook_id)?;
    let settings = app.project_settings(&project_id)?;
    delete_at(app, settings, hook_id).await
}

// ---------------------------------------------------------------------------
// User scope
// ---------------------------------------------------------------------------

/// GET /api/user/hooks — every hook in `~/.claude/settings.json`.
pub async fn list_user_hooks(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    list_at(app.user_settings.clone()).await
}

/// PUT /api/user/hooks/:hook_id
pub async fn update_user_hook(
    State(app): State<AppState>,
    Path(hook_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    HookId::decode(&hook_id)?;
    let Json(body) = body?;
    let settings = app.user_settings.clone();
    update_at(app, settings, hook_id, body).await
}

/// DELETE /api/user/hooks/:hook_id
pub async fn delete_user_hook(
    State(app): State<AppState>,
    Path(hook_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let settings = app.user_settings.clone();
    delete_at(app, settings, hook_id).await
}
