//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - video upload to the `/api/upload` endpoint

pub mod upload;

pub use upload::*;
