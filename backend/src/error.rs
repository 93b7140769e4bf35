//! Error types for the upload receiver.
//!
//! - [`UploadError`] - per-request failures, rendered as `{"message": ...}`
//! - [`ServerError`] - startup and serving failures
//!
//! The page reads the `message` field of error bodies and shows it verbatim,
//! so the `Display` text of [`UploadError`] is user-facing.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::borrow::Borrow;
use thiserror::Error;

use crate::api::types::MessageBody;

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors while receiving one upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No multipart part named `file`.
    #[error("No file provided")]
    NoFile,

    /// Part content type is not `video/*`.
    #[error("Please select a valid video file (received '{0}')")]
    UnsupportedType(String),

    /// Part larger than the configured ceiling.
    #[error("File size must be less than {}", size_limit_text(.max_bytes))]
    TooLarge { max_bytes: u64 },

    /// Malformed multipart stream.
    #[error("Multipart error: {0}")]
    Multipart(#[source] MultipartError),

    /// Failed to write the upload to disk.
    #[error("Failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
}

impl UploadError {
    /// Wrap a multipart failure; a tripped body limit reads like any other
    /// oversized upload.
    pub fn from_multipart(err: MultipartError, max_bytes: u64) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            UploadError::TooLarge { max_bytes }
        } else {
            UploadError::Multipart(err)
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            UploadError::NoFile => StatusCode::BAD_REQUEST,
            UploadError::UnsupportedType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            UploadError::Multipart(e) => e.status(),
            UploadError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "upload failed");
        } else {
            tracing::warn!(%status, error = %self, "upload rejected");
        }
        (status, Json(MessageBody::new(self.to_string()))).into_response()
    }
}

/// `40MB` for whole mebibytes, the exact byte count otherwise.
fn size_limit_text<B: Borrow<u64>>(bytes: B) -> String {
    const MIB: u64 = 1024 * 1024;
    let bytes = *bytes.borrow();
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Could not prepare the upload directory.
    #[error("Upload directory {path} unavailable: {source}")]
    UploadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Could not bind the listener.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Serving stopped with an error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Result type for upload handling.
pub type UploadResult<T> = Result<T, UploadError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
