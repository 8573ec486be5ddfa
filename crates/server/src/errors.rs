use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body returned by every entity endpoint.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: impl Into<String>) -> Self {
        Self { status, error, detail: detail.into() }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", msg),
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", msg),
            ServiceError::Conflict(msg) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", msg),
            ServiceError::Db(msg) => {
                error!(err = %msg, "database failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", "unexpected database error")
            }
        }
    }
}

/// Non-numeric or out-of-range `{id}` segments.
impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        let status = r.status();
        JsonApiError::new(status, status.canonical_reason().unwrap_or("Bad Request"), r.body_text())
    }
}

/// Unparseable bodies and fields of the wrong type.
impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        let status = r.status();
        JsonApiError::new(status, status.canonical_reason().unwrap_or("Bad Request"), r.body_text())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("Student", 1), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("fk".into()), StatusCode::CONFLICT),
            (ServiceError::Db("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn db_failure_hides_driver_message() {
        let e = JsonApiError::from(ServiceError::Db("connection refused at 10.0.0.5:5432".into()));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.detail, "unexpected database error");
    }

    #[test]
    fn not_found_keeps_detail() {
        let e = JsonApiError::from(ServiceError::not_found("Course", 999));
        assert_eq!(e.error, "Not Found");
        assert_eq!(e.detail, "Course not found with id: 999");
    }
}
