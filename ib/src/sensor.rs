use std::ops::Add;

use ib_core::{FileDiagnostics, SensorContext};
use rayon::prelude::*;

use crate::{IssuesLoader, Routing};

/// Counts of what happened to the diagnostics of one analysis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SensorSummary {
    /// Files whose diagnostics were processed.
    pub files: usize,
    /// Issues saved, both rule-bound and external.
    pub issues: usize,
    /// The subset of `issues` that are external.
    pub external: usize,
    pub discarded: usize,
    /// Reports for files that are not part of the analysis.
    pub skipped_files: usize,
}

impl SensorSummary {
    pub fn record(&mut self, routing: &Routing) {
        match routing {
            Routing::Bound(_) => self.issues += 1,
            Routing::External { .. } => {
                self.issues += 1;
                self.external += 1;
            }
            Routing::Discarded => self.discarded += 1,
        }
    }
}

impl Add for SensorSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            files: self.files + other.files,
            issues: self.issues + other.issues,
            external: self.external + other.external,
            discarded: self.discarded + other.discarded,
            skipped_files: self.skipped_files + other.skipped_files,
        }
    }
}

/// Create the issues for every report, processing files in parallel.
pub fn execute<C: SensorContext>(cx: &C, reports: &[FileDiagnostics]) -> SensorSummary {
    let loader = IssuesLoader::new(cx);
    execute_with(&loader, reports)
}

pub fn execute_with<C: SensorContext>(
    loader: &IssuesLoader<'_, C>,
    reports: &[FileDiagnostics],
) -> SensorSummary {
    let summary = reports
        .par_iter()
        .map(|report| loader.load_file(report))
        .reduce(SensorSummary::default, |a, b| a + b);

    tracing::info!(
        files = summary.files,
        issues = summary.issues,
        external = summary.external,
        discarded = summary.discarded,
        skipped_files = summary.skipped_files,
        "created issues from diagnostics"
    );
    summary
}
