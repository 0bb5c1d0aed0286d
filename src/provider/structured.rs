//! Structured document providers (JSON, YAML).

use std::sync::Arc;

use async_trait::async_trait;

use super::{
    DataPayload, DataProvider, ParseOptions, SaveStatus, SchemaDescriptor, TableDescriptor,
    decode_text, read_bytes, report_read_failure, write_bytes,
};
use crate::TRACING_TARGET;
use crate::error::{ProviderError, ProviderResult};
use crate::io::DataIo;
use crate::notify::Notifier;

/// Structured document syntaxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuredKind {
    #[cfg(feature = "json")]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl StructuredKind {
    pub fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "json")]
            StructuredKind::Json => "json",
            #[cfg(feature = "yaml")]
            StructuredKind::Yaml => "yaml",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            #[cfg(feature = "json")]
            StructuredKind::Json => &[".json"],
            #[cfg(feature = "yaml")]
            StructuredKind::Yaml => &[".yaml", ".yml"],
        }
    }

    fn decode(&self, source: &str, text: &str) -> ProviderResult<serde_json::Value> {
        let decode_err = |e: &dyn std::fmt::Display| ProviderError::Decode {
            reference: source.to_string(),
            message: e.to_string(),
        };
        match self {
            #[cfg(feature = "json")]
            StructuredKind::Json => serde_json::from_str(text).map_err(|e| decode_err(&e)),
            #[cfg(feature = "yaml")]
            StructuredKind::Yaml => serde_yaml::from_str(text).map_err(|e| decode_err(&e)),
        }
    }

    fn encode(&self, destination: &str, value: &serde_json::Value) -> ProviderResult<Vec<u8>> {
        let encode_err = |e: &dyn std::fmt::Display| ProviderError::Write {
            destination: destination.to_string(),
            error: std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()),
        };
        match self {
            #[cfg(feature = "json")]
            StructuredKind::Json => serde_json::to_vec_pretty(value).map_err(|e| encode_err(&e)),
            #[cfg(feature = "yaml")]
            StructuredKind::Yaml => serde_yaml::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| encode_err(&e)),
        }
    }
}

/// Provider decoding whole documents into a generic value tree.
///
/// The tree is handed to the host as-is; no rows or columns are derived.
#[derive(Debug, Clone)]
pub struct StructuredDataProvider {
    kind: StructuredKind,
    io: Arc<dyn DataIo>,
    notifier: Arc<dyn Notifier>,
}

impl StructuredDataProvider {
    /// Create a structured provider for `kind` over the given collaborators.
    pub fn new(kind: StructuredKind, io: Arc<dyn DataIo>, notifier: Arc<dyn Notifier>) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            kind = kind.name(),
            extensions = ?kind.extensions(),
            "Structured data provider created"
        );
        Self { kind, io, notifier }
    }

    pub fn kind(&self) -> StructuredKind {
        self.kind
    }

    async fn load(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> ProviderResult<serde_json::Value> {
        let bytes = read_bytes(self.io.as_ref(), source).await?;
        let text = decode_text(source, bytes, options.encoding())?;
        self.kind.decode(source, &text)
    }
}

#[async_trait]
impl DataProvider for StructuredDataProvider {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn extensions(&self) -> &[&'static str] {
        self.kind.extensions()
    }

    async fn get_data(&self, source: &str, options: &ParseOptions) -> DataPayload {
        match self.load(source, options).await {
            Ok(value) => DataPayload::Structured(value),
            Err(e) => {
                report_read_failure(self.notifier.as_ref(), source, &e);
                DataPayload::default()
            }
        }
    }

    fn table_names(&self, _source: &str) -> Vec<TableDescriptor> {
        Vec::new()
    }

    fn schema(&self, _source: &str) -> Option<SchemaDescriptor> {
        None
    }

    async fn save_data(
        &self,
        destination: &str,
        payload: &DataPayload,
        _table_name: Option<&str>,
    ) -> ProviderResult<SaveStatus> {
        if payload.is_empty() {
            tracing::debug!(
                target: TRACING_TARGET,
                destination = %destination,
                "Empty payload, nothing to save"
            );
            return Ok(SaveStatus::Skipped);
        }

        match payload {
            DataPayload::Structured(value) => {
                let bytes = self.kind.encode(destination, value)?;
                write_bytes(self.io.as_ref(), destination, &bytes).await
            }
            DataPayload::Text(text) => {
                write_bytes(self.io.as_ref(), destination, text.as_bytes()).await
            }
            DataPayload::Bytes(bytes) => write_bytes(self.io.as_ref(), destination, bytes).await,
        }
    }
}
