use ib_core::{
    Diagnostic, DiagnosticCode, DiagnosticRelatedInformation, DiagnosticSeverity, FileDiagnostics,
    Location, Position, Range,
};

pub fn file_diagnostics(params: lsp_types::PublishDiagnosticsParams) -> Option<FileDiagnostics> {
    let Ok(path) = params.uri.to_file_path() else {
        tracing::warn!(uri = %params.uri, "ignoring diagnostics for non-file uri");
        return None;
    };
    Some(FileDiagnostics::new(path, diagnostics(params.diagnostics)))
}

pub fn diagnostics(diags: impl IntoIterator<Item = lsp_types::Diagnostic>) -> Vec<Diagnostic> {
    diags.into_iter().map(diagnostic).collect()
}

pub fn diagnostic(diag: lsp_types::Diagnostic) -> Diagnostic {
    Diagnostic {
        range: range(diag.range),
        severity: severity(diag.severity),
        code: diag.code.map(code),
        source: diag.source,
        message: diag.message,
        related_information: diag
            .related_information
            .unwrap_or_default()
            .into_iter()
            .map(related_information)
            .collect(),
    }
}

pub fn severity(severity: Option<lsp_types::DiagnosticSeverity>) -> DiagnosticSeverity {
    match severity {
        Some(lsp_types::DiagnosticSeverity::ERROR) => DiagnosticSeverity::Error,
        Some(lsp_types::DiagnosticSeverity::WARNING) => DiagnosticSeverity::Warning,
        Some(lsp_types::DiagnosticSeverity::INFORMATION) => DiagnosticSeverity::Information,
        Some(lsp_types::DiagnosticSeverity::HINT) => DiagnosticSeverity::Hint,
        // Assume error if unspecified
        _ => DiagnosticSeverity::Error,
    }
}

pub fn code(code: lsp_types::NumberOrString) -> DiagnosticCode {
    match code {
        lsp_types::NumberOrString::Number(n) => DiagnosticCode::Number(n),
        lsp_types::NumberOrString::String(s) => DiagnosticCode::String(s),
    }
}

pub fn related_information(
    info: lsp_types::DiagnosticRelatedInformation,
) -> DiagnosticRelatedInformation {
    DiagnosticRelatedInformation { location: location(info.location), message: info.message }
}

pub fn location(loc: lsp_types::Location) -> Location {
    Location { uri: loc.uri, range: range(loc.range) }
}

pub fn range(range: lsp_types::Range) -> Range {
    Range::new(position(range.start), position(range.end))
}

pub fn position(pos: lsp_types::Position) -> Position {
    Position::new(pos.line, pos.character)
}
