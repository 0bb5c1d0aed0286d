//! Builder for creating ProviderRegistry instances.

use std::sync::Arc;

use crate::TRACING_TARGET;
use crate::config::RegistryConfig;
use crate::error::ProviderResult;
use crate::io::{DataIo, FsIo};
use crate::notify::{Notifier, TracingNotifier};
use crate::provider::{DataProvider, ParseOptions, ProviderKind};
use crate::registry::ProviderRegistry;

/// Builder wiring collaborators and providers into a registry.
///
/// ```rust,ignore
/// use dataprov::{ProviderKind, RegistryBuilder};
///
/// let registry = RegistryBuilder::new()
///     .with_provider_kind(ProviderKind::Text)
///     .build()?;
/// ```
#[derive(Debug)]
pub struct RegistryBuilder {
    io: Arc<dyn DataIo>,
    notifier: Arc<dyn Notifier>,
    kinds: Vec<ProviderKind>,
    custom: Vec<Arc<dyn DataProvider>>,
    options: ParseOptions,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryBuilder {
    /// Create a builder over the local file system and `tracing` notifier,
    /// with no providers selected.
    pub fn new() -> Self {
        Self {
            io: Arc::new(FsIo::new()),
            notifier: Arc::new(TracingNotifier),
            kinds: Vec::new(),
            custom: Vec::new(),
            options: ParseOptions::default(),
        }
    }

    /// Create a builder from a parsed configuration.
    pub fn from_config(config: &RegistryConfig) -> ProviderResult<Self> {
        let mut builder = Self::new();
        if let Some(dir) = &config.base_dir {
            builder.io = Arc::new(FsIo::with_base_dir(dir.clone()));
        }
        builder.kinds = config.provider_kinds()?;
        builder.options = config.options.clone();
        Ok(builder)
    }

    /// Use a different I/O collaborator.
    pub fn with_io(mut self, io: Arc<dyn DataIo>) -> Self {
        self.io = io;
        self
    }

    /// Use a different notifier.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Select a built-in provider.
    pub fn with_provider_kind(mut self, kind: ProviderKind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    /// Select every available built-in provider.
    pub fn with_default_providers(mut self) -> Self {
        for kind in ProviderKind::all().iter().filter(|k| k.is_available()) {
            if !self.kinds.contains(kind) {
                self.kinds.push(*kind);
            }
        }
        self
    }

    /// Add a provider implemented outside this crate. Registered after the
    /// built-in ones.
    pub fn with_provider(mut self, provider: Arc<dyn DataProvider>) -> Self {
        self.custom.push(provider);
        self
    }

    /// Default parse options from the configuration.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Build the registry.
    ///
    /// Fails when a selected provider is not enabled or two providers claim
    /// the same extension.
    pub fn build(self) -> ProviderResult<ProviderRegistry> {
        let mut registry = ProviderRegistry::new();

        for kind in &self.kinds {
            registry.register(kind.build(self.io.clone(), self.notifier.clone())?)?;
        }
        for provider in self.custom {
            registry.register(provider)?;
        }

        tracing::debug!(
            target: TRACING_TARGET,
            providers = registry.providers().len(),
            extensions = ?registry.extensions(),
            "Provider registry built"
        );

        Ok(registry)
    }
}
