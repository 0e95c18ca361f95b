use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tokio::task::JoinError;

use pdftext_core::{ExtractError, FetchError};

use crate::models::{ErrorResponse, FailureResponse};

/// Label sent with every 500 response; the detail goes in `message`.
pub const EXTRACTION_FAILED: &str = "Failed to extract text from PDF";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("PDF URL is required")]
    MissingPdfUrl,
    #[error(transparent)]
    Query(#[from] QueryRejection),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("extraction task failed: {0}")]
    Task(#[from] JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingPdfUrl => StatusCode::BAD_REQUEST,
            AppError::Query(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::MissingPdfUrl | AppError::Query(_) => {
                tracing::warn!(error = %self, "rejected malformed request");
                (
                    status,
                    Json(ErrorResponse {
                        error: self.to_string(),
                    }),
                )
                    .into_response()
            }
            _ => {
                tracing::error!(error = %self, "text extraction failed");
                (
                    status,
                    Json(FailureResponse {
                        error: EXTRACTION_FAILED.to_string(),
                        message: self.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
