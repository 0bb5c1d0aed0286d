//! Data provider contract and built-in providers.
//!
//! This module provides:
//! - `DataProvider`: The capability contract every format family implements
//! - `ProviderKind`: Enum naming the built-in provider families
//! - `DataPayload`, `ParseOptions`, `TableDescriptor`, `SchemaDescriptor`
//! - `TextDataProvider`: Delimited text (`.csv`, `.tsv`, `.txt`, `.tab`)
//! - `StructuredDataProvider`: JSON and YAML documents (feature gated)

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ProviderError, ProviderResult};
use crate::io::DataIo;
use crate::notify::Notifier;

mod options;
mod payload;
#[cfg(any(feature = "json", feature = "yaml"))]
mod structured;
mod text;

pub use options::{DEFAULT_ENCODING, ParseOptions};
pub use payload::{DataPayload, FieldDescriptor, SaveStatus, SchemaDescriptor, TableDescriptor};
#[cfg(any(feature = "json", feature = "yaml"))]
pub use structured::{StructuredDataProvider, StructuredKind};
pub use text::TextDataProvider;

/// Capability contract for one family of source formats.
///
/// Providers are stateless: they are built once, shared behind an `Arc`,
/// and may serve any number of concurrent calls.
#[async_trait]
pub trait DataProvider: Send + Sync + Debug {
    /// Short identifier used in logs and listings.
    fn name(&self) -> &str;

    /// Owned extensions, lowercase with a leading dot.
    fn extensions(&self) -> &[&'static str];

    /// Load the payload behind `source`.
    ///
    /// Never fails outward. Failures are logged and surfaced to the user,
    /// after which the empty default payload is returned.
    async fn get_data(&self, source: &str, options: &ParseOptions) -> DataPayload;

    /// Logical tables inside `source`. Empty for single-table formats.
    fn table_names(&self, source: &str) -> Vec<TableDescriptor>;

    /// Schema of `source`, when the format carries one.
    fn schema(&self, source: &str) -> Option<SchemaDescriptor>;

    /// Persist `payload` to `destination`.
    ///
    /// `table_name` is advisory for multi-table formats. Write failures are
    /// returned, never masked.
    async fn save_data(
        &self,
        destination: &str,
        payload: &DataPayload,
        table_name: Option<&str>,
    ) -> ProviderResult<SaveStatus>;
}

/// Built-in provider families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Delimited text
    Text,
    Json,
    Yaml,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Text => write!(f, "text"),
            ProviderKind::Json => write!(f, "json"),
            ProviderKind::Yaml => write!(f, "yaml"),
        }
    }
}

impl ProviderKind {
    /// Parse a provider kind from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plaintext" | "csv" | "delimited" => Some(ProviderKind::Text),
            "json" => Some(ProviderKind::Json),
            "yaml" | "yml" => Some(ProviderKind::Yaml),
            _ => None,
        }
    }

    /// Every built-in kind, enabled or not.
    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::Text, ProviderKind::Json, ProviderKind::Yaml]
    }

    /// Check if this provider is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            #[cfg(feature = "plaintext")]
            ProviderKind::Text => true,
            #[cfg(not(feature = "plaintext"))]
            ProviderKind::Text => false,

            #[cfg(feature = "json")]
            ProviderKind::Json => true,
            #[cfg(not(feature = "json"))]
            ProviderKind::Json => false,

            #[cfg(feature = "yaml")]
            ProviderKind::Yaml => true,
            #[cfg(not(feature = "yaml"))]
            ProviderKind::Yaml => false,
        }
    }

    /// Build the provider for this kind over the given collaborators.
    pub fn build(
        &self,
        io: Arc<dyn DataIo>,
        notifier: Arc<dyn Notifier>,
    ) -> ProviderResult<Arc<dyn DataProvider>> {
        if !self.is_available() {
            return Err(ProviderError::Config(format!(
                "Provider '{self}' is not enabled. Enable the corresponding feature."
            )));
        }

        match self {
            ProviderKind::Text => Ok(Arc::new(TextDataProvider::new(io, notifier))),

            #[cfg(feature = "json")]
            ProviderKind::Json => Ok(Arc::new(StructuredDataProvider::new(
                StructuredKind::Json,
                io,
                notifier,
            ))),

            #[cfg(feature = "yaml")]
            ProviderKind::Yaml => Ok(Arc::new(StructuredDataProvider::new(
                StructuredKind::Yaml,
                io,
                notifier,
            ))),

            #[allow(unreachable_patterns)]
            _ => Err(ProviderError::Config(format!(
                "Provider '{self}' is not enabled. Enable the corresponding feature."
            ))),
        }
    }
}

/// Report a failed load through the notifier: one log entry, one user message.
pub(crate) fn report_read_failure(notifier: &dyn Notifier, source: &str, error: &ProviderError) {
    tracing::debug!(
        target: crate::TRACING_TARGET,
        source = %source,
        stage = %error.stage(),
        "Load failed, returning empty payload"
    );
    notifier.log_error("getData()", &format!("Error parsing '{source}': {error}"));
    notifier.notify_user(&format!("Unable to parse data file: '{source}'. Error: {error}"));
}

/// Read `source` through `io`, mapping I/O failures to a read error.
pub(crate) async fn read_bytes(io: &dyn DataIo, source: &str) -> ProviderResult<Vec<u8>> {
    io.read_source(source)
        .await
        .map_err(|error| ProviderError::Read {
            reference: source.to_string(),
            error,
        })
}

/// Write `content` to `destination` through `io`, mapping I/O failures to a
/// write error.
pub(crate) async fn write_bytes(
    io: &dyn DataIo,
    destination: &str,
    content: &[u8],
) -> ProviderResult<SaveStatus> {
    io.write_destination(destination, content)
        .await
        .map_err(|error| ProviderError::Write {
            destination: destination.to_string(),
            error,
        })?;
    Ok(SaveStatus::Written)
}

/// Decode raw bytes using an encoding name. Invalid input is an error,
/// never replaced.
pub fn decode_text(source: &str, bytes: Vec<u8>, encoding: &str) -> ProviderResult<String> {
    match encoding.to_ascii_lowercase().replace('_', "-").as_str() {
        "utf8" | "utf-8" => String::from_utf8(bytes).map_err(|e| ProviderError::Decode {
            reference: source.to_string(),
            message: format!("invalid UTF-8 data: {e}"),
        }),
        "latin1" | "iso-8859-1" | "binary" => Ok(bytes.iter().map(|&b| b as char).collect()),
        "ascii" | "us-ascii" => {
            if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                return Err(ProviderError::Decode {
                    reference: source.to_string(),
                    message: format!("non-ASCII byte at offset {pos}"),
                });
            }
            Ok(bytes.into_iter().map(char::from).collect())
        }
        _ => Err(ProviderError::Encoding {
            reference: source.to_string(),
            encoding: encoding.to_string(),
        }),
    }
}
