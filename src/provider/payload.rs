//! Payload and descriptor types exchanged between providers and the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content handed back to the host.
///
/// Text formats deliver the full decoded string; structured formats may
/// deliver a decoded value tree. The core never shapes it into rows.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPayload {
    Text(String),
    Bytes(Vec<u8>),
    Structured(serde_json::Value),
}

impl Default for DataPayload {
    fn default() -> Self {
        DataPayload::Text(String::new())
    }
}

impl DataPayload {
    /// Check if there is nothing to hand over or persist. A structured
    /// payload is empty only when it is `null`.
    pub fn is_empty(&self) -> bool {
        match self {
            DataPayload::Text(s) => s.is_empty(),
            DataPayload::Bytes(b) => b.is_empty(),
            DataPayload::Structured(value) => value.is_null(),
        }
    }

    /// Borrow the payload as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataPayload::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the payload as a structured value, if it is one.
    pub fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            DataPayload::Structured(v) => Some(v),
            _ => None,
        }
    }

    /// Consume the payload into raw bytes. Structured values become compact JSON.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            DataPayload::Text(s) => s.into_bytes(),
            DataPayload::Bytes(b) => b,
            DataPayload::Structured(v) => v.to_string().into_bytes(),
        }
    }
}

impl From<String> for DataPayload {
    fn from(s: String) -> Self {
        DataPayload::Text(s)
    }
}

impl From<&str> for DataPayload {
    fn from(s: &str) -> Self {
        DataPayload::Text(s.to_string())
    }
}

impl From<Vec<u8>> for DataPayload {
    fn from(b: Vec<u8>) -> Self {
        DataPayload::Bytes(b)
    }
}

impl From<serde_json::Value> for DataPayload {
    fn from(v: serde_json::Value) -> Self {
        DataPayload::Structured(v)
    }
}

/// Name of one logical table within a multi-table source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableDescriptor(pub String);

impl TableDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structural description of a source, when cheaply derivable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    pub fields: Vec<FieldDescriptor>,
}

/// One field of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Format-specific type name (e.g. "string", "number")
    pub kind: String,
}

/// Outcome of a save that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// The payload was persisted.
    Written,
    /// The provider had nothing to write; no I/O was attempted.
    Skipped,
}
