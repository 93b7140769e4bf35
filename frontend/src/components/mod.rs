//! UI Components for the video uploader.
//!
//! # Layout Components
//! - [`Heading`] - Card title and description
//!
//! # Feature Components
//! - [`Uploader`] - State owner switching between selection and result views
//! - [`DropZone`] - File picker with drag & drop
//! - [`ErrorBanner`] - Validation and upload error slot
//! - [`ResultPanel`] - Server response and reset button

mod heading;
mod uploader;
mod drop_zone;
mod error_banner;
mod result_panel;

pub use heading::*;
pub use uploader::*;
pub use drop_zone::*;
pub use error_banner::*;
pub use result_panel::*;
