//! In-memory I/O implementation for testing.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::DataIo;

/// In-memory I/O collaborator keyed by reference.
///
/// Clones share the same storage, so a test can keep one handle and give
/// another to a provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIo {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    writes: Arc<Mutex<usize>>,
    read_only: bool,
}

impl InMemoryIo {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects every write with `PermissionDenied`.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    /// Seed a reference with bytes (builder pattern).
    pub fn with_file(self, reference: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(reference, data);
        self
    }

    /// Seed a reference with bytes.
    pub fn insert(&self, reference: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.lock_files().insert(reference.into(), data.into());
    }

    /// Get the content stored at a reference.
    pub fn contents(&self, reference: &str) -> Option<Vec<u8>> {
        self.lock_files().get(reference).cloned()
    }

    /// Get the content stored at a reference as a string.
    pub fn contents_string(&self, reference: &str) -> Option<String> {
        self.contents(reference)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Number of successful writes performed so far.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_files(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl DataIo for InMemoryIo {
    async fn read_source(&self, reference: &str) -> io::Result<Vec<u8>> {
        self.contents(reference).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory, open '{reference}'"),
            )
        })
    }

    async fn write_destination(&self, path: &str, content: &[u8]) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied, open '{path}'"),
            ));
        }
        self.lock_files().insert(path.to_string(), content.to_vec());
        *self.writes.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
