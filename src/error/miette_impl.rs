//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ProviderError, Stage};

/// A diagnostic wrapper for provider errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ProviderDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Resolve => "Check the file extension against the registered providers",
        Stage::Register => "Make sure no two providers claim the same extension",
        Stage::Read => "Check that the source exists and uses the requested encoding",
        Stage::Write => "Check that the destination directory exists and is writable",
    }
}

impl From<ProviderError> for ProviderDiagnostic {
    fn from(e: ProviderError) -> Self {
        let stage = e.stage();
        let message = match e.target() {
            Some(target) => format!("[{stage}] on '{target}'"),
            None => format!("[{stage}]"),
        };
        ProviderDiagnostic {
            message,
            source: Some(Box::new(e)),
            help: Some(help_for(stage).into()),
            severity: Severity::Error,
        }
    }
}

impl From<ProviderError> for miette::Report {
    fn from(e: ProviderError) -> Self {
        miette::Report::new(ProviderDiagnostic::from(e))
    }
}
