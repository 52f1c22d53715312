use axum::{extract::rejection::JsonRejection, response::{IntoResponse, Response}, Json};
use serde_json::json;
use tracing::info;

#[derive(Debug)]
pub struct ApiError(pub JsonRejection);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_message = self.0.body_text();
        info!("Rejected payload: {}", error_message);
        let body = Json(json!({
            "error": "Invalid message payload",
            "details": error_message,
        }));
        (self.0.status(), body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(rejection)
    }
}
