use expect_test::expect;
use ib_core::{DiagnosticCode, DiagnosticSeverity};
use ib_lsp::from_proto;
use ib_lsp::lsp_types::{self, NumberOrString};
use tracing_test::traced_test;

use crate::{lsp_diagnostic, lsp_range};

#[test]
fn diagnostic() {
    let module = ib_test::file_url("/src/Module.bsl");
    let common = ib_test::file_url("/src/CommonModule.bsl");
    let diag = lsp_types::Diagnostic {
        severity: Some(lsp_types::DiagnosticSeverity::WARNING),
        code: Some(NumberOrString::String("Typo".into())),
        source: Some("bsl-language-server".into()),
        related_information: Some(vec![lsp_types::DiagnosticRelatedInformation {
            location: lsp_types::Location { uri: common.clone(), range: lsp_range!(2:0..2:4) },
            message: "declared here".into(),
        }]),
        ..lsp_diagnostic(lsp_range!(5:2..5:10), "typo in identifier")
    };

    let diag = from_proto::diagnostic(diag);
    assert_eq!(diag.severity, DiagnosticSeverity::Warning);
    assert_eq!(diag.code, Some(DiagnosticCode::String("Typo".into())));
    assert_eq!(diag.rule_id(), "Typo");
    assert_eq!(diag.source.as_deref(), Some("bsl-language-server"));
    assert_eq!(diag.range.to_string(), "start(5, 2), end(5, 10)");
    assert_eq!(diag.related_information.len(), 1);
    assert_eq!(diag.related_information[0].location.uri, common);
    assert_eq!(diag.related_information[0].location.range.to_string(), "start(2, 0), end(2, 4)");
    assert_ne!(diag.related_information[0].location.uri, module);
}

#[test]
fn missing_fields() {
    let diag = from_proto::diagnostic(lsp_diagnostic(lsp_range!(0:0..0:1), "message"));
    // absent severity is treated as an error
    assert_eq!(diag.severity, DiagnosticSeverity::Error);
    assert_eq!(diag.code, None);
    assert_eq!(diag.rule_id(), "");
    assert!(diag.related_information.is_empty());
}

#[test]
fn severities() {
    let check = |severity, expected| {
        let diag = lsp_types::Diagnostic {
            severity: Some(severity),
            ..lsp_diagnostic(lsp_range!(0:0..0:1), "message")
        };
        assert_eq!(from_proto::diagnostic(diag).severity, expected);
    };

    check(lsp_types::DiagnosticSeverity::ERROR, DiagnosticSeverity::Error);
    check(lsp_types::DiagnosticSeverity::WARNING, DiagnosticSeverity::Warning);
    check(lsp_types::DiagnosticSeverity::INFORMATION, DiagnosticSeverity::Information);
    check(lsp_types::DiagnosticSeverity::HINT, DiagnosticSeverity::Hint);
}

#[test]
fn numeric_code_is_decimal_rule_id() {
    let diag = lsp_types::Diagnostic {
        code: Some(NumberOrString::Number(1001)),
        ..lsp_diagnostic(lsp_range!(0:0..0:1), "message")
    };
    assert_eq!(from_proto::diagnostic(diag).rule_id(), "1001");
}

#[test]
fn file_diagnostics() {
    let params = lsp_types::PublishDiagnosticsParams {
        uri: ib_test::file_url("/src/Module.bsl"),
        diagnostics: vec![lsp_diagnostic(lsp_range!(0:0..0:1), "a")],
        version: None,
    };
    let file = from_proto::file_diagnostics(params).unwrap();
    expect![[r#"
        "/src/Module.bsl"
    "#]]
    .assert_debug_eq(&file.path);
    assert_eq!(file.diagnostics.len(), 1);
}

#[test]
#[traced_test]
fn non_file_uri() {
    let params = lsp_types::PublishDiagnosticsParams {
        uri: "untitled:Untitled-1".parse().unwrap(),
        diagnostics: vec![lsp_diagnostic(lsp_range!(0:0..0:1), "a")],
        version: None,
    };
    assert!(from_proto::file_diagnostics(params).is_none());
    assert!(logs_contain("ignoring diagnostics for non-file uri"));
}
