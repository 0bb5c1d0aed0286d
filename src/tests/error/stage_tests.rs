//! Tests for error stages and messages.

use crate::error::{ProviderError, Stage};

fn io_err(kind: std::io::ErrorKind, msg: &str) -> std::io::Error {
    std::io::Error::new(kind, msg)
}

#[test]
fn each_variant_maps_to_its_stage() {
    let unsupported = ProviderError::UnsupportedFormat {
        reference: "a.xlsx".into(),
        extension: Some(".xlsx".into()),
    };
    assert_eq!(unsupported.stage(), Stage::Resolve);

    let conflict = ProviderError::ExtensionConflict {
        extension: ".csv".into(),
        existing: "text".into(),
        incoming: "other".into(),
    };
    assert_eq!(conflict.stage(), Stage::Register);
    assert_eq!(conflict.target(), None);

    let read = ProviderError::Read {
        reference: "a.csv".into(),
        error: io_err(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(read.stage(), Stage::Read);
    assert_eq!(read.to_string(), "gone");

    let write = ProviderError::Write {
        destination: "b.csv".into(),
        error: io_err(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(write.stage(), Stage::Write);
    assert_eq!(write.target(), Some("b.csv"));
}

#[test]
fn unsupported_format_message_names_the_extension() {
    let with_ext = ProviderError::UnsupportedFormat {
        reference: "a.xlsx".into(),
        extension: Some(".xlsx".into()),
    };
    assert_eq!(
        with_ext.to_string(),
        "Unsupported data format for 'a.xlsx' (extension '.xlsx')"
    );

    let without = ProviderError::UnsupportedFormat {
        reference: "README".into(),
        extension: None,
    };
    assert_eq!(
        without.to_string(),
        "Unsupported data format for 'README' (no extension)"
    );
}

#[test]
fn write_error_exposes_io_source() {
    use std::error::Error;

    let write = ProviderError::Write {
        destination: "b.csv".into(),
        error: io_err(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(write.source().is_some());
    assert_eq!(Stage::Write.to_string(), "Write");
}
