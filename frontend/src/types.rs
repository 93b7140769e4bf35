//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - platform file handle abstraction
//! - **Status Types** - upload status and display mode
//! - **Error Types** - validation rejections and upload failures

use std::fmt;

// =============================================================================
// File Types
// =============================================================================

/// A file handle offered by the platform file picker.
///
/// Implemented for [`web_sys::File`] in the browser; tests provide their own.
pub trait FileCandidate {
    /// File name as reported by the picker.
    fn file_name(&self) -> String;
    /// Size in bytes.
    fn size_bytes(&self) -> u64;
    /// MIME type, possibly empty when the browser cannot guess it.
    fn mime_type(&self) -> String;
}

impl FileCandidate for web_sys::File {
    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size_bytes(&self) -> u64 {
        // Blob sizes are whole numbers carried as f64.
        web_sys::Blob::size(self) as u64
    }

    fn mime_type(&self) -> String {
        web_sys::Blob::type_(self)
    }
}

// =============================================================================
// Status Types
// =============================================================================

/// Whether a submission is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// One request awaiting its response
    Uploading,
}

/// Which of the three mutually exclusive views is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// File picker, error slot and upload button
    Selecting,
    /// Same view with controls disabled while the request runs
    Uploading,
    /// Server response and the reset button
    Resulted,
}

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a file is rejected before it reaches the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationRejection {
    /// MIME type does not start with `video/`.
    NotAVideo,
    /// Larger than the 40 MB ceiling.
    TooLarge,
    /// Submit pressed with nothing selected.
    NoFileSelected,
}

impl fmt::Display for ValidationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationRejection::NotAVideo => "Please select a valid video file",
            ValidationRejection::TooLarge => "File size must be less than 40MB",
            ValidationRejection::NoFileSelected => "Please select a file first",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationRejection {}

/// Shown when no better text is available.
pub const GENERIC_UPLOAD_ERROR: &str = "An error occurred during upload";

/// Failures of one upload attempt.
///
/// Every variant ends up as a single string in the error slot, see
/// [`UploadError::display_message`].
#[derive(Clone, Debug, PartialEq)]
pub enum UploadError {
    /// Rejected client-side.
    Validation(ValidationRejection),
    /// The request could not complete.
    Transport(String),
    /// The endpoint answered with an error status.
    Server {
        /// HTTP status code
        status: u16,
        /// `message` field of the JSON error body, if any
        message: Option<String>,
    },
    /// The request could not be built.
    Client(String),
}

impl UploadError {
    /// Text for the error slot.
    pub fn display_message(&self) -> String {
        match self {
            UploadError::Validation(rejection) => rejection.to_string(),
            UploadError::Transport(text) if !text.trim().is_empty() => text.clone(),
            UploadError::Transport(_) => GENERIC_UPLOAD_ERROR.to_string(),
            UploadError::Server { message: Some(message), .. } => message.clone(),
            UploadError::Server { status, message: None } => {
                format!("Request failed with status code {}", status)
            }
            UploadError::Client(_) => GENERIC_UPLOAD_ERROR.to_string(),
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Validation(rejection) => write!(f, "Validation error: {}", rejection),
            UploadError::Transport(msg) => write!(f, "Network error: {}", msg),
            UploadError::Server { status, message } => write!(
                f,
                "Server error ({}): {}",
                status,
                message.as_deref().unwrap_or("no message")
            ),
            UploadError::Client(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for UploadError {}

impl From<ValidationRejection> for UploadError {
    fn from(rejection: ValidationRejection) -> Self {
        UploadError::Validation(rejection)
    }
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            ValidationRejection::NotAVideo.to_string(),
            "Please select a valid video file"
        );
        assert_eq!(
            ValidationRejection::TooLarge.to_string(),
            "File size must be less than 40MB"
        );
        assert_eq!(
            ValidationRejection::NoFileSelected.to_string(),
            "Please select a file first"
        );
    }

    #[test]
    fn test_server_message_preferred() {
        let err = UploadError::Server {
            status: 500,
            message: Some("server busy".into()),
        };
        assert_eq!(err.display_message(), "server busy");
    }

    #[test]
    fn test_server_without_message_uses_status_text() {
        let err = UploadError::Server { status: 502, message: None };
        assert_eq!(err.display_message(), "Request failed with status code 502");
    }

    #[test]
    fn test_transport_and_client_fallbacks() {
        let err = UploadError::Transport("Failed to fetch".into());
        assert_eq!(err.display_message(), "Failed to fetch");

        assert_eq!(
            UploadError::Transport(String::new()).display_message(),
            GENERIC_UPLOAD_ERROR
        );
        assert_eq!(
            UploadError::Client("FormData unavailable".into()).display_message(),
            GENERIC_UPLOAD_ERROR
        );
    }
}
