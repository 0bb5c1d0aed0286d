//! Error types for provider dispatch and data I/O.
//!
//! This module provides:
//! - `Stage`: Indicates where an error occurred in the provider pipeline
//! - `ProviderError`: A single provider or dispatch error with context
//! - `ProviderResult`: Result alias used across the crate

use std::fmt;

use thiserror::Error;

/// Result type for provider and registry operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Mapping a source reference to its owning provider
    Resolve,
    /// Registering a provider or building a registry
    Register,
    Read,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Register => write!(f, "Register"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

/// Errors that can occur while dispatching to or running a data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No registered provider owns the extension of the source reference.
    #[error("Unsupported data format for '{reference}'{}", extension_suffix(.extension))]
    UnsupportedFormat {
        reference: String,
        extension: Option<String>,
    },

    /// Two providers claim the same extension.
    #[error("Extension '{extension}' is already claimed by '{existing}', cannot register '{incoming}'")]
    ExtensionConflict {
        extension: String,
        existing: String,
        incoming: String,
    },

    /// The I/O collaborator could not retrieve the source.
    #[error("{error}")]
    Read {
        reference: String,
        #[source]
        error: std::io::Error,
    },

    /// The I/O collaborator could not persist the payload.
    #[error("Unable to write '{destination}': {error}")]
    Write {
        destination: String,
        #[source]
        error: std::io::Error,
    },

    /// The requested text encoding is not supported.
    #[error("Unsupported encoding '{encoding}' for '{reference}'")]
    Encoding { reference: String, encoding: String },

    /// The source content could not be decoded.
    #[error("{message}")]
    Decode { reference: String, message: String },

    /// Invalid registry configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn extension_suffix(extension: &Option<String>) -> String {
    match extension {
        Some(ext) => format!(" (extension '{ext}')"),
        None => " (no extension)".to_string(),
    }
}

impl ProviderError {
    /// Stage of the provider pipeline this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            ProviderError::UnsupportedFormat { .. } => Stage::Resolve,
            ProviderError::ExtensionConflict { .. } | ProviderError::Config(_) => Stage::Register,
            ProviderError::Read { .. }
            | ProviderError::Encoding { .. }
            | ProviderError::Decode { .. } => Stage::Read,
            ProviderError::Write { .. } => Stage::Write,
        }
    }

    /// Source or destination reference the error refers to, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            ProviderError::UnsupportedFormat { reference, .. }
            | ProviderError::Read { reference, .. }
            | ProviderError::Encoding { reference, .. }
            | ProviderError::Decode { reference, .. } => Some(reference),
            ProviderError::Write { destination, .. } => Some(destination),
            ProviderError::ExtensionConflict { .. } | ProviderError::Config(_) => None,
        }
    }

    /// Check if this error was raised before any I/O was attempted.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ProviderError::UnsupportedFormat { .. })
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
