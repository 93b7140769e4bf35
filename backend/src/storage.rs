//! Upload Store - writes received videos to disk
//!
//! Each upload is streamed into `<id>-<sanitized name>` inside the upload
//! directory. A partially written file is removed when the upload is
//! rejected midway.

use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

/// Longest kept file name suffix (in characters).
const MAX_NAME_LEN: usize = 100;

/// Directory holding accepted uploads.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open the store, creating the directory if needed.
    pub async fn open(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Start writing a new upload.
    pub async fn begin(&self, id: &Uuid, file_name: &str) -> std::io::Result<PendingUpload> {
        let path = self
            .dir
            .join(format!("{}-{}", id, sanitize_file_name(file_name)));
        let file = fs::File::create(&path).await?;
        Ok(PendingUpload {
            path,
            file,
            written: 0,
        })
    }
}

/// An upload being streamed to disk.
#[derive(Debug)]
pub struct PendingUpload {
    path: PathBuf,
    file: fs::File,
    written: u64,
}

impl PendingUpload {
    pub async fn write(&mut self, chunk: &[u8]) -> std::io::Result<()> {
        self.file.write_all(chunk).await?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and return the final path. The file is removed if the flush
    /// fails.
    pub async fn finish(mut self) -> std::io::Result<PathBuf> {
        let flushed = self.file.flush().await;
        self.settle(flushed).await
    }

    async fn settle(self, flushed: std::io::Result<()>) -> std::io::Result<PathBuf> {
        match flushed {
            Ok(()) => Ok(self.path),
            Err(e) => {
                self.discard().await;
                Err(e)
            }
        }
    }

    /// Drop the partial file.
    pub async fn discard(self) {
        let PendingUpload { path, file, .. } = self;
        drop(file);
        if let Err(e) = fs::remove_file(&path).await {
            tracing::warn!(path = %path.display(), error = %e, "could not remove partial upload");
        }
    }
}

/// Reduce a client-supplied name to a safe single path component.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LEN)
        .collect();

    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
