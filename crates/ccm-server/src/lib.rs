pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve_on()` and available for integration testing.
pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Projects
        .route("/api/projects", get(routes::projects::list_projects))
        .route(
            "/api/projects/{project_id}/hooks",
            get(routes::hooks::list_project_hooks),
        )
        .route(
            "/api/projects/{project_id}/hooks/{hook_id}",
            put(routes::hooks::update_project_hook)
                .delete(routes::hooks::delete_project_hook),
        )
        // User scope
        .route("/api/user/hooks", get(routes::hooks::list_user_hooks))
        .route(
            "/api/user/hooks/{hook_id}",
            put(routes::hooks::update_user_hook)
                .delete(routes::hooks::delete_user_hook),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the hook settings API on a pre-bound listener.
///
/// Accepting a bound `TcpListener` lets the caller read the actual port when
/// binding to port 0.
pub async fn serve_on(app_state: AppState, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(app_state);

    tracing::info!("ccm API listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
