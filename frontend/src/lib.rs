//! Video Uploader - Frontend Rust/Leptos Application
//!
//! A WebAssembly page that validates a video file in the browser and posts
//! it to `/api/upload`, then shows the JSON response or an error.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (router: "/" → Uploader)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Uploader                                                    │
//! │  ├── Heading                                                 │
//! │  ├── DropZone + ErrorBanner + upload button  (selecting)     │
//! │  └── ResultPanel                              (resulted)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (UploadStatus, UploadError, etc.)
//! - [`uploader`] - Uploader state machine and formatting helpers
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod uploader;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileCandidate,
    // Status
    UploadStatus, DisplayMode,
    // Errors
    ValidationRejection, UploadError, UploadResult,
};

// State machine
pub use uploader::{
    format_file_size, render_result, submit, validate_candidate, SelectedFile, UploaderState,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Uploader/>
                </Routes>
            </main>
        </Router>
    }
}
