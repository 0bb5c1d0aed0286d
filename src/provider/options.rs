//! Open bag of format-specific parse hints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Encoding used when no `encoding` hint is given.
pub const DEFAULT_ENCODING: &str = "utf8";

/// Format-specific hints such as `encoding` or `delimiter`.
///
/// No key is required and providers ignore keys they do not understand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseOptions {
    entries: BTreeMap<String, serde_json::Value>,
}

impl ParseOptions {
    /// Create an empty option bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set the text encoding (builder pattern).
    pub fn with_encoding(self, encoding: impl Into<String>) -> Self {
        self.with("encoding", encoding.into())
    }

    /// Set an option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get a raw option value.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }

    /// Get an option as a string, ignoring values of other types.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    /// The requested text encoding, defaulting to UTF-8.
    pub fn encoding(&self) -> &str {
        self.get_str("encoding").unwrap_or(DEFAULT_ENCODING)
    }

    /// Merge `other` over `self`; keys in `other` win.
    pub fn merged(&self, other: &ParseOptions) -> ParseOptions {
        let mut entries = self.entries.clone();
        entries.extend(other.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        ParseOptions { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
