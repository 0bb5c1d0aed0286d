//! Async I/O collaborator trait definition.

use std::fmt::Debug;

use async_trait::async_trait;

/// Raw byte transport between a provider and wherever the data lives.
///
/// Implementations open and release any handles within a single call;
/// nothing is retained between calls.
#[async_trait]
pub trait DataIo: Send + Sync + Debug {
    /// Read the full content behind `reference`.
    async fn read_source(&self, reference: &str) -> std::io::Result<Vec<u8>>;

    /// Replace the content at `path` with `content`.
    async fn write_destination(&self, path: &str, content: &[u8]) -> std::io::Result<()>;
}
