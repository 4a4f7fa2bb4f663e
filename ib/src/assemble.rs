use ib_core::{
    Diagnostic, FileSystem, IssueRecord, NewExternalIssue, NewIssue, NewRuleIssue, SourceFile,
};

use crate::{range, severity, Routing};

/// Builds host issues out of routed diagnostics.
///
/// Related locations are looked up in `fs` among the files of `language`.
pub struct IssueAssembler<'a, F: ?Sized> {
    fs: &'a F,
    language: &'a str,
}

impl<'a, F: FileSystem + ?Sized> IssueAssembler<'a, F> {
    pub fn new(fs: &'a F, language: &'a str) -> Self {
        Self { fs, language }
    }

    /// Build the issue for `diagnostic` reported on `file`.
    ///
    /// Returns `None` for discarded diagnostics. The primary location always resolves to some
    /// range of `file`, so `None` is otherwise only returned if the builder rejects the issue.
    pub fn assemble(
        &self,
        file: &(impl SourceFile + ?Sized),
        diagnostic: &Diagnostic,
        routing: Routing,
    ) -> Option<IssueRecord> {
        let rule_id = diagnostic.rule_id();
        let res = match routing {
            Routing::Discarded => return None,
            Routing::Bound(rule_key) => {
                let mut issue = NewRuleIssue::for_rule(rule_key);
                self.fill_locations(&mut issue, file, diagnostic, &rule_id);
                issue.build()
            }
            Routing::External { engine_id, rule_id } => {
                let mut issue = NewExternalIssue::new(
                    engine_id,
                    rule_id.clone(),
                    severity::severity(diagnostic.severity),
                    severity::rule_type(diagnostic.severity),
                );
                self.fill_locations(&mut issue, file, diagnostic, &rule_id);
                issue.build()
            }
        };

        match res {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::error!(%err, rule = %rule_id, "failed to build issue");
                None
            }
        }
    }

    /// Set the primary location of `issue` and add every related location that can be resolved.
    pub fn fill_locations(
        &self,
        issue: &mut impl NewIssue,
        file: &(impl SourceFile + ?Sized),
        diagnostic: &Diagnostic,
        rule_id: &str,
    ) {
        let range = range::resolve(file, diagnostic.range, rule_id);
        let primary = issue.new_location(file, range).message(&diagnostic.message);
        issue.at(primary);

        for related in &diagnostic.related_information {
            let path = match related.location.uri.to_file_path() {
                Ok(path) => path,
                Err(()) => {
                    cov_mark::hit!(related_location_not_a_file);
                    tracing::warn!(uri = %related.location.uri, "related location is not a file");
                    continue;
                }
            };

            let Some(related_file) = self.fs.input_file(self.language, &path) else {
                cov_mark::hit!(related_file_not_found);
                tracing::warn!(
                    path = %path.display(),
                    "cannot find input file for related location"
                );
                continue;
            };

            let range = range::resolve(related_file, related.location.range, rule_id);
            let location = issue.new_location(related_file, range).message(&related.message);
            issue.add_location(location);
        }
    }
}
