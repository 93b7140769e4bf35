//! Application configuration.
//!
//! Compile-time settings for the upload page. The endpoint is relative so the
//! page talks to whatever origin served it (the dev receiver can serve both).

/// Upload endpoint path.
pub const UPLOAD_ENDPOINT: &str = "/api/upload";

/// Multipart field name carrying the video.
pub const UPLOAD_FIELD: &str = "file";

/// Maximum file size accepted by the page (in bytes).
///
/// 40 MB limit.
pub const MAX_FILE_SIZE: u64 = 40 * 1024 * 1024;

/// MIME type prefix a candidate must carry.
pub const VIDEO_MIME_PREFIX: &str = "video/";

/// Value of the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = "video/*";

/// Hint shown in the drop zone before a file is chosen.
pub const FORMAT_HINT: &str = "MP4, WebM, MOV or AVI max 40MB";

/// Page title.
pub const APP_NAME: &str = "Video Uploader";
