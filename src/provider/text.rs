//! Delimited text provider.

use std::sync::Arc;

use async_trait::async_trait;

use super::{
    DataPayload, DataProvider, ParseOptions, SaveStatus, SchemaDescriptor, TableDescriptor,
    decode_text, read_bytes, report_read_failure, write_bytes,
};
use crate::TRACING_TARGET;
use crate::error::ProviderResult;
use crate::io::DataIo;
use crate::notify::Notifier;

/// Extensions owned by the text provider.
pub const TEXT_EXTENSIONS: &[&str] = &[".csv", ".tsv", ".txt", ".tab"];

/// Provider for delimited text files.
///
/// Content is handed over exactly as decoded: no parsing, no delimiter
/// inference. Delimited text carries no tables or schema of its own.
#[derive(Debug, Clone)]
pub struct TextDataProvider {
    io: Arc<dyn DataIo>,
    notifier: Arc<dyn Notifier>,
}

impl TextDataProvider {
    /// Create a text provider over the given collaborators.
    pub fn new(io: Arc<dyn DataIo>, notifier: Arc<dyn Notifier>) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            extensions = ?TEXT_EXTENSIONS,
            "Text data provider created"
        );
        Self { io, notifier }
    }

    async fn load(&self, source: &str, options: &ParseOptions) -> ProviderResult<String> {
        let bytes = read_bytes(self.io.as_ref(), source).await?;
        decode_text(source, bytes, options.encoding())
    }
}

#[async_trait]
impl DataProvider for TextDataProvider {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&'static str] {
        TEXT_EXTENSIONS
    }

    async fn get_data(&self, source: &str, options: &ParseOptions) -> DataPayload {
        match self.load(source, options).await {
            Ok(text) => DataPayload::Text(text),
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
            DataPayload::Text(text) => {
                write_bytes(self.io.as_ref(), destination, text.as_bytes()).await
            }
            DataPayload::Bytes(bytes) => write_bytes(self.io.as_ref(), destination, bytes).await,
            DataPayload::Structured(value) => {
                let text = value.to_string();
                write_bytes(self.io.as_ref(), destination, text.as_bytes()).await
            }
        }
    }
}
