//! Error types for the compliance server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("File type not supported. Please upload PDF, Word, or text files.")]
    UnsupportedFileType,

    #[error("{0}")]
    FileTooLarge(String),

    #[error("Document not found")]
    DocumentNotFound(u64),

    #[error("Analysis timeout after {0}ms")]
    Timeout(u64),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Analysis failed: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::UnsupportedFileType => (StatusCode::BAD_REQUEST, "UNSUPPORTED_FILE_TYPE"),
            ServerError::FileTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE"),
            ServerError::DocumentNotFound(_) => (StatusCode::NOT_FOUND, "DOCUMENT_NOT_FOUND"),
            ServerError::Timeout(_) => (StatusCode::REQUEST_TIMEOUT, "TIMEOUT"),
            ServerError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST"),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl ServerError {
    /// 413 naming the limit, and the upload size when it is known
    pub fn file_too_large(max_upload_bytes: usize, size: Option<usize>) -> Self {
        let limit_mb = max_upload_bytes / crate::MB;
        let message = match size {
            Some(size) => format!(
                "File size exceeds maximum limit of {}MB. File size: {:.1}MB",
                limit_mb,
                size as f64 / crate::MB as f64
            ),
            None => format!("File size exceeds maximum limit of {}MB", limit_mb),
        };
        ServerError::FileTooLarge(message)
    }

    /// Map a multipart read failure. Hitting the body limit mid-stream is
    /// reported with the same size message as the handler's own check.
    pub fn from_multipart(
        err: axum::extract::multipart::MultipartError,
        max_upload_bytes: usize,
        content_length: Option<usize>,
    ) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::file_too_large(max_upload_bytes, content_length)
        } else {
            ServerError::InvalidRequest(err.body_text())
        }
    }
}
