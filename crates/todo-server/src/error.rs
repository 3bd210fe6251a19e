//! Error responses for handlers.
//!
//! Store failures that are not the caller's fault end up here and render as
//! a JSON `{code, message}` body. The caller-facing `NotFound` / `InvalidId`
//! outcomes of update and delete keep their own `{updated|deleted, error}`
//! shape and are handled in `handlers::items`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use todo_db::StoreError;

#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    code: &'static str,
    /// Logged, never sent to the client.
    source: Option<anyhow::Error>,
}

impl AppError {
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "BAD_REQUEST")
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, "NOT_FOUND")
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message,
            "INTERNAL_SERVER_ERROR",
        )
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            match &self.source {
                Some(source) => tracing::error!(
                    status = %self.status,
                    code = self.code,
                    error = %source,
                    "{}", self.message
                ),
                None => tracing::error!(status = %self.status, code = self.code, "{}", self.message),
            }
        }

        let body = ErrorResponse {
            code: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { .. } => Self::not_found(error.to_string()),
            StoreError::InvalidId(_) => Self::bad_request(error.to_string()),
            StoreError::Integrity(_) | StoreError::Database(_) => {
                Self::internal("item store failure").with_source(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::ids::ItemId;

    #[test]
    fn display_includes_code() {
        let err = AppError::bad_request("missing field");
        assert_eq!(err.to_string(), "[BAD_REQUEST] missing field");
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err = AppError::from(StoreError::NotFound {
            id: "000000000000000000000000".into(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_invalid_id_maps_to_400() {
        let parse_error = ItemId::parse("abc").unwrap_err();
        let err = AppError::from(StoreError::InvalidId(parse_error));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn integrity_failure_hides_details() {
        let err = AppError::from(StoreError::Integrity("delete affected 2 records".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "[INTERNAL_SERVER_ERROR] item store failure");
        assert!(std::error::Error::source(&err).is_some());
    }
}
