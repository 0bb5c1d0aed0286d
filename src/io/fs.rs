//! Local file system I/O backed by tokio.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::DataIo;
use crate::TRACING_TARGET;

/// I/O collaborator reading and writing local files.
///
/// Accepts plain paths and `file://` URLs. Relative paths are resolved
/// against the base directory when one is set.
#[derive(Debug, Clone, Default)]
pub struct FsIo {
    base_dir: Option<PathBuf>,
}

impl FsIo {
    /// Create a file system collaborator resolving paths as given.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system collaborator rooted at `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    /// Get the base directory, if any.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Map a reference to a local path.
    pub fn resolve(&self, reference: &str) -> io::Result<PathBuf> {
        let raw = match reference.split_once("://") {
            Some(("file", rest)) => rest,
            Some((scheme, _)) => {
                return Err(io::Error::new(
                    io::ErrorKind::Unsupported,
                    format!("'{scheme}' sources are not supported by the file system reader"),
                ));
            }
            None => reference,
        };

        let path = Path::new(raw);
        match &self.base_dir {
            Some(base) if path.is_relative() => Ok(base.join(path)),
            _ => Ok(path.to_path_buf()),
        }
    }
}

#[async_trait]
impl DataIo for FsIo {
    async fn read_source(&self, reference: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(reference)?;
        let bytes = tokio::fs::read(&path).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path.display(),
            size = bytes.len(),
            "File read complete"
        );

        Ok(bytes)
    }

    async fn write_destination(&self, path: &str, content: &[u8]) -> io::Result<()> {
        let path = self.resolve(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&path)
            .await?;
        file.write_all(content).await?;
        file.flush().await?;

        tracing::debug!(
            target: TRACING_TARGET,
            path = %path.display(),
            size = content.len(),
            "File write complete"
        );

        Ok(())
    }
}
