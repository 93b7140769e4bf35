//! HTTP API module.
//!
//! The upload receiver's server and wire types.

pub mod server;
pub mod types;

pub use server::{build_router, start_server, AppState};
pub use types::*;
