//! Uploader state machine.
//!
//! Holds everything one upload attempt needs: the selected file, the
//! in-flight flag, the error slot and the server result. The Leptos
//! component keeps one [`UploaderState`] in a signal and drives it from
//! DOM events; nothing here touches the DOM or the network directly.
//!
//! ```text
//!             select_file            submit              response
//!  Selecting ────────────▶ Selecting ──────▶ Uploading ──────────▶ Resulted
//!      ▲                                        │ (error)             │
//!      │                                        ▼                     │
//!      │                                    Selecting ◀── error slot  │
//!      └──────────────────────────── reset ───────────────────────────┘
//! ```

use serde_json::Value;

use crate::config::{MAX_FILE_SIZE, VIDEO_MIME_PREFIX};
use crate::services::UploadTransport;
use crate::types::{DisplayMode, FileCandidate, UploadError, UploadStatus, ValidationRejection};

/// A file that passed validation, with its handle kept for submission.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub handle: F,
}

impl<F: FileCandidate> SelectedFile<F> {
    fn from_candidate(handle: F) -> Self {
        Self {
            name: handle.file_name(),
            size_bytes: handle.size_bytes(),
            mime_type: handle.mime_type(),
            handle,
        }
    }
}

/// Checks the MIME prefix first, then the size ceiling.
pub fn validate_candidate<F: FileCandidate>(candidate: &F) -> Result<(), ValidationRejection> {
    if !candidate.mime_type().starts_with(VIDEO_MIME_PREFIX) {
        return Err(ValidationRejection::NotAVideo);
    }
    if candidate.size_bytes() > MAX_FILE_SIZE {
        return Err(ValidationRejection::TooLarge);
    }
    Ok(())
}

/// State of one Uploader instance.
#[derive(Clone, Debug)]
pub struct UploaderState<F> {
    file: Option<SelectedFile<F>>,
    status: UploadStatus,
    error: Option<String>,
    result: Option<Value>,
}

impl<F> Default for UploaderState<F> {
    fn default() -> Self {
        Self {
            file: None,
            status: UploadStatus::Idle,
            error: None,
            result: None,
        }
    }
}

impl<F: FileCandidate + Clone> UploaderState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile<F>> {
        self.file.as_ref()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Whether the upload button may be pressed.
    pub fn can_submit(&self) -> bool {
        self.file.is_some() && !self.is_uploading()
    }

    pub fn mode(&self) -> DisplayMode {
        if self.is_uploading() {
            DisplayMode::Uploading
        } else if self.result.is_some() {
            DisplayMode::Resulted
        } else {
            DisplayMode::Selecting
        }
    }

    /// Validates and stores a picked file.
    ///
    /// A rejected file clears the previous selection instead of leaving it
    /// in place. An accepted one clears the error and any stale result.
    pub fn select_file(&mut self, candidate: F) -> Result<(), ValidationRejection> {
        if let Err(rejection) = validate_candidate(&candidate) {
            self.error = Some(rejection.to_string());
            self.file = None;
            return Err(rejection);
        }

        self.file = Some(SelectedFile::from_candidate(candidate));
        self.error = None;
        self.result = None;
        Ok(())
    }

    /// Moves to `Uploading` and hands back the file to send.
    ///
    /// Returns `None` without side effects while a request is in flight, and
    /// `None` with the "select a file first" error when nothing is selected.
    pub fn begin_submit(&mut self) -> Option<F> {
        if self.is_uploading() {
            return None;
        }

        let Some(file) = self.file.as_ref() else {
            self.error = Some(ValidationRejection::NoFileSelected.to_string());
            return None;
        };

        let handle = file.handle.clone();
        self.error = None;
        self.status = UploadStatus::Uploading;
        Some(handle)
    }

    /// Records the response of the request started by [`begin_submit`].
    ///
    /// [`begin_submit`]: UploaderState::begin_submit
    pub fn complete(&mut self, outcome: Result<Value, UploadError>) {
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.display_message());
            }
        }
        self.status = UploadStatus::Idle;
    }

    /// Back to an empty selection.
    pub fn reset(&mut self) {
        self.file = None;
        self.result = None;
        self.error = None;
        self.status = UploadStatus::Idle;
    }
}

/// Runs one complete submission against `transport`.
///
/// The component splits this across `spawn_local` instead, since the state
/// lives in a signal that cannot be borrowed across the await.
pub async fn submit<F, T>(state: &mut UploaderState<F>, transport: &T)
where
    F: FileCandidate + Clone,
    T: UploadTransport<F>,
{
    let Some(file) = state.begin_submit() else {
        return;
    };

    let outcome = transport.upload(&file).await;
    if let Err(ref err) = outcome {
        log::error!("Upload error: {}", err);
    }
    state.complete(outcome);
}

/// Formats a byte count with Bytes, KB or MB and up to two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const K: u64 = 1024;
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scale = 1u64;
    while unit + 1 < UNITS.len() && bytes >= scale * K {
        scale *= K;
        unit += 1;
    }

    let value = (bytes as f64 / scale as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[unit])
}

/// Pretty-prints a result with two-space indentation.
pub fn render_result(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
