//! REST API types for the upload page.
//!
//! Success bodies are rendered verbatim by the page; error bodies only need a
//! `message` field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response sent to the page after an accepted upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    /// Unique upload identifier
    pub id: String,

    /// File name as sent by the browser
    pub file_name: String,

    /// Part content type, always `video/*`
    pub content_type: String,

    /// Bytes written to disk
    pub size_bytes: u64,

    /// When the upload finished
    pub received_at: DateTime<Utc>,
}

impl UploadReceipt {
    pub fn new(id: Uuid, file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: id.to_string(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
            received_at: Utc::now(),
        }
    }
}

/// `{"message": "..."}` body used for errors and the smoke test endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
