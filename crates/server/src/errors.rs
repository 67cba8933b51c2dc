use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Web-facing wrapper mapping service failures onto the HTTP contract.
///
/// Validation and not-found messages pass through as plain text; storage
/// failures are logged and reduced to a generic body so internal detail never
/// reaches the client.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] ServiceError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::Duplicate => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Comment already exists".to_string())
            }
            err @ ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
            err @ (ServiceError::StorageRead(_) | ServiceError::StorageWrite(_)) => {
                error!(error = %err, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };
        (status, body).into_response()
    }
}
