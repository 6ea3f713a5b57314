//! The single place where request failures become responses.
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use leptos::*;
use thiserror::Error;
use tracing::{error, warn};

use crate::components::error_page::ErrorPage;
use crate::render::render_page;
use crate::validation::ValidationError;

/// Shown for failures that carry no message of their own.
pub const GENERIC_MESSAGE: &str = "Something went wrong!";
/// Message of the catch-all route.
pub const PAGE_NOT_FOUND: &str = "Page Not Found!";

#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted payload failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// No route or entity matched the request.
    #[error("{0}")]
    NotFound(String),

    /// The entity store failed.
    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),
}

impl AppError {
    /// Text shown to the client. Store failures never leak their details.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(message) | AppError::NotFound(message) => message.clone(),
            AppError::Store(_) => GENERIC_MESSAGE.to_string(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }

        let code = status.as_u16();
        let message = self.message();
        render_page(status, "Error", move || {
            view! { <ErrorPage status=code message=message/> }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::BadRequest("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound(PAGE_NOT_FOUND.into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Store(rusqlite::Error::QueryReturnedNoRows).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_errors_use_generic_message() {
        let err = AppError::from(rusqlite::Error::InvalidQuery);
        assert_eq!(err.message(), GENERIC_MESSAGE);
        assert!(err.to_string().starts_with("Database error"));
    }

    #[actix_web::test]
    async fn test_error_response_renders_page() {
        let response = AppError::NotFound(PAGE_NOT_FOUND.into()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(PAGE_NOT_FOUND));
        assert!(html.contains("404"));
    }
}
