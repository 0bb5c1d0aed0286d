//! # dataprov
//!
//! Pluggable data providers with extension-based dispatch.
//!
//! ## Overview
//!
//! dataprov lets a host load and save tabular or text data without knowing
//! per-format details:
//! - **Provider contract**: `DataProvider` covers load, save, table listing
//!   and schema description for one family of formats
//! - **Dispatch**: `ProviderRegistry` picks the provider owning a source's
//!   extension and fails fast with `UnsupportedFormat` otherwise
//! - **Failure containment**: read failures are logged, surfaced to the user
//!   through a `Notifier`, and turned into an empty payload; write failures
//!   are returned to the caller
//! - **Injected collaborators**: raw I/O (`DataIo`) and notification
//!   (`Notifier`) are handed to providers at construction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dataprov::{ParseOptions, default_registry};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = default_registry();
//!
//!     let payload = registry.get_data("data.csv", &ParseOptions::new()).await?;
//!     registry.save_data("copy.csv", &payload, None).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `plaintext` - Delimited text provider (`.csv`, `.tsv`, `.txt`, `.tab`, enabled by default)
//! - `json` - JSON document provider (enabled by default)
//! - `yaml` - YAML document provider
//! - `miette` - Pretty error reporting with miette
//! - `cli` - The `dataprov` command-line binary
//!
//! ## Completion semantics
//!
//! Every load completes exactly once. A missing or undecodable source yields
//! `DataPayload::default()` (empty text) together with one error log entry
//! and one user notification of the form
//! `Unable to parse data file: '<source>'. Error: <message>`.
//!
//! Saving an empty payload is a no-op: nothing is written, the save reports
//! `SaveStatus::Skipped`, and `ProviderRegistry::save_with` does not run its
//! callback.
//!
//! There is no cancellation or timeout: a stalled `DataIo` call stalls the
//! request that made it.

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod io;
pub mod notify;
pub mod provider;
pub mod registry;

#[cfg(feature = "cli")]
pub mod cli;

/// Tracing target for provider and registry events.
pub const TRACING_TARGET: &str = "dataprov";

// Re-exports for convenience
pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use error::{ProviderError, ProviderResult, Stage};
pub use io::{DataIo, FsIo, InMemoryIo};
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
#[cfg(any(feature = "json", feature = "yaml"))]
pub use provider::{StructuredDataProvider, StructuredKind};
pub use provider::{
    DataPayload, DataProvider, FieldDescriptor, ParseOptions, ProviderKind, SaveStatus,
    SchemaDescriptor, TableDescriptor, TextDataProvider,
};
pub use registry::{ProviderRegistry, default_registry, default_registry_with, extension_of};

/// Build a registry from a configuration using the default collaborators.
pub fn build_registry_from_config(config: &RegistryConfig) -> ProviderResult<ProviderRegistry> {
    RegistryBuilder::from_config(config)?.build()
}

/// Build a registry from a configuration, allowing the caller to further
/// customize the builder (custom providers, a different notifier) before it
/// is built.
pub fn build_registry_from_config_with<F>(
    config: &RegistryConfig,
    customize: F,
) -> ProviderResult<ProviderRegistry>
where
    F: FnOnce(RegistryBuilder) -> RegistryBuilder,
{
    let builder = RegistryBuilder::from_config(config)?;
    customize(builder).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ProviderDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
