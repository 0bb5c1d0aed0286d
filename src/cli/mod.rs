//! CLI integration helpers for dataprov.
//!
//! Argument value types for the `dataprov` binary, parsed with `sarge`.

mod sarge;

/// A source or destination reference given on the command line.
///
/// Surrounding whitespace and a leading `@` are stripped; everything else,
/// `file://` URLs included, is passed through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceArg(pub String);

impl SourceArg {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Normalize a raw command-line token into a reference.
pub fn normalize_reference(token: &str) -> String {
    let token = token.trim();
    match token.strip_prefix('@') {
        Some(path) => path.to_string(),
        None => token.to_string(),
    }
}
