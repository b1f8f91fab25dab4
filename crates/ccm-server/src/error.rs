use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ccm_core::error::CcmError;
use serde_json::json;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
///
/// Every body carries `success: false` and an `error` message; 400 and 500
/// responses add `details` for the client or operator. Request bodies that
/// fail to extract as JSON are a 400 like any other bad input.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            let body = json!({
                "success": false,
                "error": "invalid request body",
                "details": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let Some(e) = self.0.downcast_ref::<CcmError>() else {
            tracing::error!(error = %self.0, "unhandled error");
            let body = json!({
                "success": false,
                "error": "internal server error",
                "details": format!("{:#}", self.0),
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response();
        };

        let (status, body) = match e {
            CcmError::InvalidHookId(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": "invalid hook id", "details": e.to_string() }),
            ),
            CcmError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": "validation failed", "details": errors }),
            ),
            CcmError::InvalidProjectId(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": e.to_string(), "details": e.to_string() }),
            ),
            CcmError::HookNotFound(_) | CcmError::ProjectNotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": e.to_string() }),
            ),
            CcmError::ProjectExists(_) => (
                StatusCode::CONFLICT,
                json!({ "success": false, "error": e.to_string() }),
            ),
            CcmError::HomeNotFound | CcmError::Io(_) | CcmError::Json(_) | CcmError::Yaml(_) => {
                tracing::error!(error = %e, "settings I/O failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "success": false, "error": "settings I/O failed", "details": e.to_string() }),
                )
            }
        };
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
