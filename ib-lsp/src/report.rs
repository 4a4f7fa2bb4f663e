//! Diagnostic reports written by the analysis engine.
//! A report is either a single `textDocument/publishDiagnostics` payload or a JSON array of them.

use std::path::Path;

use anyhow::Context as _;
use ib_core::FileDiagnostics;
use serde::Deserialize;

use crate::from_proto;

#[derive(Deserialize)]
#[serde(untagged)]
enum Report {
    Many(Vec<lsp_types::PublishDiagnosticsParams>),
    One(lsp_types::PublishDiagnosticsParams),
}

/// Parse a report. Entries for uris that are not files are skipped.
pub fn parse(json: &str) -> anyhow::Result<Vec<FileDiagnostics>> {
    let report = serde_json::from_str::<Report>(json)
        .context("expected publishDiagnostics params or an array of them")?;
    let params = match report {
        Report::Many(params) => params,
        Report::One(params) => vec![params],
    };
    Ok(params.into_iter().filter_map(from_proto::file_diagnostics).collect())
}

pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Vec<FileDiagnostics>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read diagnostics report {}", path.display()))?;
    parse(&json).with_context(|| format!("invalid diagnostics report {}", path.display()))
}
