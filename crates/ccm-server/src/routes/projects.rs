use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/projects — registered projects with their settings paths.
pub async fn list_projects(State(app): State<AppState>) -> Json<Value> {
    let projects: Vec<Value> = app
        .config
        .projects
        .iter()
        .map(|p| {
            json!({
                "id": p.id,
                "path": p.path,
                "settingsPath": p.settings_path(),
            })
        })
        .collect();
    Json(json!({ "success": true, "projects": projects }))
}
