//! # Video upload server
//!
//! Development receiver for the video uploader page. Accepts a multipart
//! `file` part on `POST /api/upload`, checks it is a video within the size
//! ceiling, stores it on disk and answers with a JSON receipt.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Multipart  │────▶│   Checks    │────▶│ UploadStore │────▶│   Receipt   │
//! │   `file`    │     │ (type/size) │     │ (streaming) │     │   (JSON)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use upload_server::{start_server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     start_server(ServerConfig::default()).await.unwrap();
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Request and server error types
//! - [`config`] - Server configuration
//! - [`storage`] - Upload directory
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod config;

// Storage
pub mod storage;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServerError, ServerResult, UploadError, UploadResult};
pub use config::{ServerConfig, DEFAULT_MAX_FILE_SIZE, VIDEO_MIME_PREFIX};
pub use storage::{sanitize_file_name, PendingUpload, UploadStore};
pub use api::types::{MessageBody, UploadReceipt};
pub use api::server::{build_router, start_server, AppState};
