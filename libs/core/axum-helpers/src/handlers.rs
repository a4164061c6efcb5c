use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(json!({
        "error": "NotFound",
        "message": "The requested resource was not found",
    }));

    (StatusCode::NOT_FOUND, body).into_response()
}
