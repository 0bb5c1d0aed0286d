//! Registry configuration loaded from JSON or YAML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ProviderError, ProviderResult};
use crate::provider::{ParseOptions, ProviderKind};

/// Configuration for a provider registry.
///
/// ```yaml
/// providers: [text, json]
/// base_dir: ./data
/// options:
///   encoding: latin1
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Provider names: "text", "json", "yaml". Empty means every enabled one.
    #[serde(default)]
    pub providers: Vec<String>,
    /// Root directory for relative file references
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    /// Default parse options applied to every load
    #[serde(default)]
    pub options: ParseOptions,
}

impl RegistryConfig {
    /// Create a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider by name.
    pub fn with_provider(mut self, name: impl Into<String>) -> Self {
        self.providers.push(name.into());
        self
    }

    /// Set the base directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set the default parse options.
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> ProviderResult<Self> {
        serde_json::from_str(s).map_err(|e| ProviderError::Config(e.to_string()))
    }

    /// Parse a configuration from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> ProviderResult<Self> {
        serde_yaml::from_str(s).map_err(|e| ProviderError::Config(e.to_string()))
    }

    /// Load a configuration file, choosing the syntax by extension.
    pub fn from_file(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ProviderError::Config(format!("{}: {e}", path.display())))?;

        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&text),
            #[cfg(feature = "yaml")]
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::from_yaml_str(&text)
            }
            _ => Err(ProviderError::Config(format!(
                "Unsupported configuration file: {}",
                path.display()
            ))),
        }
    }

    /// Resolve the configured provider names.
    ///
    /// Unknown names are rejected; an empty list selects every available kind.
    pub fn provider_kinds(&self) -> ProviderResult<Vec<ProviderKind>> {
        if self.providers.is_empty() {
            return Ok(ProviderKind::all()
                .iter()
                .copied()
                .filter(ProviderKind::is_available)
                .collect());
        }

        let mut kinds = Vec::with_capacity(self.providers.len());
        for name in &self.providers {
            let kind = ProviderKind::from_str(name)
                .ok_or_else(|| ProviderError::Config(format!("Unknown provider: {name}")))?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Ok(kinds)
    }
}
