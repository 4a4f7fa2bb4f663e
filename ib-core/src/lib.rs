//! The host-side model: files and their validated ranges, rules, configuration and issues,
//! plus the diagnostics reported by the analysis engine.

mod config;
mod context;
mod diagnostic;
mod file;
mod issue;
mod language;
mod position;
mod rule;

pub use self::config::{Configuration, MapSettings};
pub use self::context::SensorContext;
pub use self::diagnostic::{
    Diagnostic, DiagnosticCode, DiagnosticRelatedInformation, DiagnosticSeverity, FileDiagnostics,
    Location, Position, Range,
};
pub use self::file::{DefaultFileSystem, FileSystem, InputFile, RangeError, SourceFile};
pub use self::issue::{
    ExternalIssue, Issue, IssueError, IssueLocation, IssueRecord, NewExternalIssue, NewIssue,
    NewRuleIssue, RuleType, Severity,
};
pub use self::language::{Language, BSL_FILE_SUFFIXES_DEFAULT, BSL_FILE_SUFFIXES_KEY};
pub use self::position::*;
pub use self::rule::{ActiveRule, ActiveRules, DefaultActiveRules, RuleKey};
pub use url::Url;
