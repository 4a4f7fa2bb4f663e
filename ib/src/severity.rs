//! Severity and type of external issues.
//! Issues raised against an active rule take both from the rule instead.

use ib_core::{DiagnosticSeverity, RuleType, Severity};

pub fn severity(severity: DiagnosticSeverity) -> Severity {
    match severity {
        DiagnosticSeverity::Error => Severity::Critical,
        DiagnosticSeverity::Warning => Severity::Major,
        DiagnosticSeverity::Information => Severity::Minor,
        DiagnosticSeverity::Hint => Severity::Info,
    }
}

pub fn rule_type(severity: DiagnosticSeverity) -> RuleType {
    match severity {
        DiagnosticSeverity::Error => RuleType::Bug,
        DiagnosticSeverity::Warning
        | DiagnosticSeverity::Information
        | DiagnosticSeverity::Hint => RuleType::CodeSmell,
    }
}
