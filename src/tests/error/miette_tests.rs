use miette::Diagnostic;

use crate::error::{ProviderDiagnostic, ProviderError};

#[test]
fn diagnostic_carries_stage_target_and_help() {
    let err = ProviderError::UnsupportedFormat {
        reference: "a.xlsx".into(),
        extension: Some(".xlsx".into()),
    };

    let diag = ProviderDiagnostic::from(err);

    assert_eq!(diag.message, "[Resolve] on 'a.xlsx'");
    assert!(diag.help().is_some());
    assert!(diag.source.is_some());
}

#[test]
fn provider_error_converts_into_report() {
    let err = ProviderError::Config("bad".into());
    let report: miette::Report = err.into();
    assert_eq!(report.to_string(), "[Register]");
}
