//! Provider registry and extension-based dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use crate::TRACING_TARGET;
use crate::error::{ProviderError, ProviderResult};
use crate::io::{DataIo, FsIo};
use crate::notify::{Notifier, TracingNotifier};
use crate::provider::{
    DataPayload, DataProvider, ParseOptions, ProviderKind, SaveStatus, SchemaDescriptor,
    TableDescriptor,
};

/// Extract the lowercase extension (with leading dot) of a source reference.
///
/// For URLs (`scheme://...`) a `?query` or `#fragment` suffix is ignored.
/// Plain paths keep `?` and `#` as ordinary file name characters. Only the
/// last path segment is considered.
///
/// ```
/// use dataprov::registry::extension_of;
///
/// assert_eq!(extension_of("data/Sales.CSV").as_deref(), Some(".csv"));
/// assert_eq!(extension_of("https://host/a.tsv?rev=2").as_deref(), Some(".tsv"));
/// assert_eq!(extension_of("report #1.csv").as_deref(), Some(".csv"));
/// assert_eq!(extension_of("Makefile"), None);
/// ```
pub fn extension_of(reference: &str) -> Option<String> {
    let path = match reference.split_once("://") {
        Some(_) => {
            let end = reference.find(['?', '#']).unwrap_or(reference.len());
            &reference[..end]
        }
        None => reference,
    };
    let segment = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let dot = segment.rfind('.')?;
    let ext = &segment[dot..];
    // A bare trailing dot, or a dotfile like ".env" with nothing before it.
    if ext.len() == 1 || dot == 0 {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_ascii_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

/// Registry mapping file extensions to the provider that owns them.
///
/// Extension sets are disjoint: registering a provider that claims an
/// already-owned extension fails and leaves the registry unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    by_extension: HashMap<String, Arc<dyn DataProvider>>,
    /// Providers in registration order
    providers: Vec<Arc<dyn DataProvider>>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under every extension it declares.
    pub fn register(&mut self, provider: Arc<dyn DataProvider>) -> ProviderResult<()> {
        let extensions: Vec<String> = provider
            .extensions()
            .iter()
            .map(|e| normalize_extension(e))
            .collect();

        for ext in &extensions {
            if let Some(existing) = self.by_extension.get(ext) {
                return Err(ProviderError::ExtensionConflict {
                    extension: ext.clone(),
                    existing: existing.name().to_string(),
                    incoming: provider.name().to_string(),
                });
            }
        }

        for ext in extensions {
            self.by_extension.insert(ext, provider.clone());
        }

        tracing::debug!(
            target: TRACING_TARGET,
            provider = provider.name(),
            extensions = ?provider.extensions(),
            "Provider registered"
        );

        self.providers.push(provider);
        Ok(())
    }

    /// Register a provider (builder pattern).
    pub fn with_provider(mut self, provider: Arc<dyn DataProvider>) -> ProviderResult<Self> {
        self.register(provider)?;
        Ok(self)
    }

    /// Resolve the provider owning the extension of `source`.
    ///
    /// This is a pure lookup; no I/O is attempted.
    pub fn provider_for(&self, source: &str) -> ProviderResult<Arc<dyn DataProvider>> {
        let extension = extension_of(source);
        let provider = extension
            .as_deref()
            .and_then(|ext| self.by_extension.get(ext))
            .cloned();

        match provider {
            Some(provider) => {
                tracing::trace!(
                    target: TRACING_TARGET,
                    source = %source,
                    provider = provider.name(),
                    "Dispatching"
                );
                Ok(provider)
            }
            None => Err(ProviderError::UnsupportedFormat {
                reference: source.to_string(),
                extension,
            }),
        }
    }

    /// Check if some provider owns the extension of `source`.
    pub fn supports(&self, source: &str) -> bool {
        self.provider_for(source).is_ok()
    }

    /// All owned extensions, sorted.
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.by_extension.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// Registered providers in registration order.
    pub fn providers(&self) -> &[Arc<dyn DataProvider>] {
        &self.providers
    }

    /// Check if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Load the payload behind `source`.
    ///
    /// Fails only when no provider owns the source; read failures are
    /// contained by the provider and yield an empty payload.
    pub async fn get_data(
        &self,
        source: &str,
        options: &ParseOptions,
    ) -> ProviderResult<DataPayload> {
        let provider = self.provider_for(source)?;
        Ok(provider.get_data(source, options).await)
    }

    /// Logical tables inside `source`.
    pub fn table_names(&self, source: &str) -> ProviderResult<Vec<TableDescriptor>> {
        Ok(self.provider_for(source)?.table_names(source))
    }

    /// Schema of `source`, when its provider can describe one.
    pub fn schema(&self, source: &str) -> ProviderResult<Option<SchemaDescriptor>> {
        Ok(self.provider_for(source)?.schema(source))
    }

    /// Persist `payload` to `destination` through its owning provider.
    pub async fn save_data(
        &self,
        destination: &str,
        payload: &DataPayload,
        table_name: Option<&str>,
    ) -> ProviderResult<SaveStatus> {
        let provider = self.provider_for(destination)?;
        provider.save_data(destination, payload, table_name).await
    }

    /// Load `source` and hand the payload to `on_loaded`.
    ///
    /// When dispatch succeeds the callback runs exactly once, with an empty
    /// payload if the read failed. When no provider owns `source`, the
    /// error is returned and the callback is not run.
    pub async fn load_with<F>(
        &self,
        source: &str,
        options: &ParseOptions,
        on_loaded: F,
    ) -> ProviderResult<()>
    where
        F: FnOnce(DataPayload) + Send,
    {
        let payload = self.get_data(source, options).await?;
        on_loaded(payload);
        Ok(())
    }

    /// Save `payload` and report completion to `on_saved`.
    ///
    /// `on_saved(None)` after a write, `on_saved(Some(err))` when the write
    /// failed. When the provider skips the save (empty payload) the callback
    /// is not run. Dispatch failures are returned without running it.
    pub async fn save_with<F>(
        &self,
        destination: &str,
        payload: &DataPayload,
        table_name: Option<&str>,
        on_saved: F,
    ) -> ProviderResult<()>
    where
        F: FnOnce(Option<ProviderError>) + Send,
    {
        let provider = self.provider_for(destination)?;
        match provider.save_data(destination, payload, table_name).await {
            Ok(SaveStatus::Written) => on_saved(None),
            Ok(SaveStatus::Skipped) => {}
            Err(e) => on_saved(Some(e)),
        }
        Ok(())
    }
}

/// Create a registry with every enabled provider over the local file system,
/// reporting through `tracing`.
pub fn default_registry() -> ProviderRegistry {
    default_registry_with(Arc::new(FsIo::new()), Arc::new(TracingNotifier))
}

/// Create a registry with every enabled provider over the given collaborators.
pub fn default_registry_with(io: Arc<dyn DataIo>, notifier: Arc<dyn Notifier>) -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();

    for kind in ProviderKind::all().iter().filter(|k| k.is_available()) {
        let registered = kind
            .build(io.clone(), notifier.clone())
            .and_then(|provider| registry.register(provider));
        if let Err(error) = registered {
            tracing::error!(
                target: TRACING_TARGET,
                provider = %kind,
                error = %error,
                "Skipping built-in provider"
            );
        }
    }

    registry
}
