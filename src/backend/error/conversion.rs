/**
 * Error Conversion
 *
 * All handler errors implement `IntoResponse` from Axum, so handlers return
 * `Result<_, ApiError>` and the error becomes a status code and body here.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Server-side failures are logged with their detail before the generic
 * body is produced.
 */

use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Internal { message } => tracing::error!("Internal error: {}", message),
            ApiError::Upstream { message } => tracing::error!("Upstream error: {}", message),
            _ => {}
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
