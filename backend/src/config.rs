//! Server configuration.
//!
//! Built by the CLI from flags, environment variables and `.env`.

use std::path::PathBuf;

/// Largest accepted upload, matching the page's own ceiling.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 40 * 1024 * 1024;

/// Room for multipart headers and boundaries on top of the file itself.
pub const MULTIPART_OVERHEAD: u64 = 64 * 1024;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Content type prefix an upload must carry.
pub const VIDEO_MIME_PREFIX: &str = "video/";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Where accepted uploads are written
    pub upload_dir: PathBuf,
    /// Largest accepted file, in bytes
    pub max_file_size: u64,
    /// Built frontend to serve for non-API paths
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Request body limit: the file ceiling plus multipart framing.
    pub fn body_limit(&self) -> usize {
        usize::try_from(self.max_file_size.saturating_add(MULTIPART_OVERHEAD)).unwrap_or(usize::MAX)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.max_file_size, 41_943_040);
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
        assert_eq!(config.body_limit(), 41_943_040 + 65_536);
    }
}
