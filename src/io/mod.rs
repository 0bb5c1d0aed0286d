//! I/O collaborators used by data providers.
//!
//! This module provides:
//! - `DataIo`: Trait resolving a source reference to bytes and persisting bytes
//! - `FsIo`: Local file system implementation backed by tokio
//! - `InMemoryIo`: In-memory implementation for testing and embedding

mod data_io;
mod fs;
mod memory;

pub use data_io::DataIo;
pub use fs::FsIo;
pub use memory::InMemoryIo;
