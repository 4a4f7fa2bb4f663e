use std::fmt;
use std::path::{Path, PathBuf};

use smol_str::SmolStr;

use crate::{RuleKey, SourceFile, TextRange};

/// The host's severity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Minor,
    Major,
    Critical,
    Blocker,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "INFO",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Blocker => "BLOCKER",
        })
    }
}

/// The host's issue type taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleType {
    CodeSmell,
    Bug,
    Vulnerability,
    SecurityHotspot,
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RuleType::CodeSmell => "CODE_SMELL",
            RuleType::Bug => "BUG",
            RuleType::Vulnerability => "VULNERABILITY",
            RuleType::SecurityHotspot => "SECURITY_HOTSPOT",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLocation {
    file: PathBuf,
    range: TextRange,
    message: Option<String>,
}

impl IssueLocation {
    pub fn new(file: impl Into<PathBuf>, range: TextRange) -> Self {
        Self { file: file.into(), range, message: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[inline]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.range
    }

    #[inline]
    pub fn get_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.file.display(), self.range)?;
        if let Some(message) = &self.message {
            write!(f, " {message:?}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IssueError {
    #[error("issue for `{0}` has no primary location")]
    MissingPrimaryLocation(String),
}

/// An issue under construction.
/// Both rule-bound and external issues are built through this interface.
pub trait NewIssue {
    /// Start a new location on `file`.
    /// The location is then passed to [`NewIssue::at`] or [`NewIssue::add_location`].
    fn new_location(&self, file: &(impl SourceFile + ?Sized), range: TextRange) -> IssueLocation {
        IssueLocation::new(file.path(), range)
    }

    /// Set the primary location of the issue.
    fn at(&mut self, primary: IssueLocation);

    /// Add a secondary location.
    fn add_location(&mut self, location: IssueLocation);
}

/// A new issue raised against an active rule.
/// Severity and type are derived by the host from the rule.
#[derive(Debug, Clone)]
pub struct NewRuleIssue {
    rule_key: RuleKey,
    primary: Option<IssueLocation>,
    secondary: Vec<IssueLocation>,
}

impl NewRuleIssue {
    pub fn for_rule(rule_key: RuleKey) -> Self {
        Self { rule_key, primary: None, secondary: vec![] }
    }

    pub fn build(self) -> Result<IssueRecord, IssueError> {
        let primary = self
            .primary
            .ok_or_else(|| IssueError::MissingPrimaryLocation(self.rule_key.to_string()))?;
        Ok(IssueRecord::Rule(Issue { rule_key: self.rule_key, primary, secondary: self.secondary }))
    }
}

impl NewIssue for NewRuleIssue {
    #[inline]
    fn at(&mut self, primary: IssueLocation) {
        self.primary = Some(primary);
    }

    #[inline]
    fn add_location(&mut self, location: IssueLocation) {
        self.secondary.push(location);
    }
}

/// A new issue reported by an external engine, with explicit severity and type.
#[derive(Debug, Clone)]
pub struct NewExternalIssue {
    engine_id: SmolStr,
    rule_id: SmolStr,
    severity: Severity,
    rule_type: RuleType,
    primary: Option<IssueLocation>,
    secondary: Vec<IssueLocation>,
}

impl NewExternalIssue {
    pub fn new(
        engine_id: impl Into<SmolStr>,
        rule_id: impl Into<SmolStr>,
        severity: Severity,
        rule_type: RuleType,
    ) -> Self {
        Self {
            engine_id: engine_id.into(),
            rule_id: rule_id.into(),
            severity,
            rule_type,
            primary: None,
            secondary: vec![],
        }
    }

    pub fn build(self) -> Result<IssueRecord, IssueError> {
        let Some(primary) = self.primary else {
            return Err(IssueError::MissingPrimaryLocation(format!(
                "{}:{}",
                self.engine_id, self.rule_id
            )));
        };
        Ok(IssueRecord::External(ExternalIssue {
            engine_id: self.engine_id,
            rule_id: self.rule_id,
            severity: self.severity,
            rule_type: self.rule_type,
            primary,
            secondary: self.secondary,
        }))
    }
}

impl NewIssue for NewExternalIssue {
    #[inline]
    fn at(&mut self, primary: IssueLocation) {
        self.primary = Some(primary);
    }

    #[inline]
    fn add_location(&mut self, location: IssueLocation) {
        self.secondary.push(location);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub rule_key: RuleKey,
    pub primary: IssueLocation,
    pub secondary: Vec<IssueLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIssue {
    pub engine_id: SmolStr,
    pub rule_id: SmolStr,
    pub severity: Severity,
    pub rule_type: RuleType,
    pub primary: IssueLocation,
    pub secondary: Vec<IssueLocation>,
}

/// A finished issue, ready to be handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueRecord {
    Rule(Issue),
    External(ExternalIssue),
}

impl IssueRecord {
    pub fn primary(&self) -> &IssueLocation {
        match self {
            IssueRecord::Rule(issue) => &issue.primary,
            IssueRecord::External(issue) => &issue.primary,
        }
    }

    pub fn secondary(&self) -> &[IssueLocation] {
        match self {
            IssueRecord::Rule(issue) => &issue.secondary,
            IssueRecord::External(issue) => &issue.secondary,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, IssueRecord::External(_))
    }
}

impl fmt::Display for IssueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueRecord::Rule(issue) => write!(f, "rule {}", issue.rule_key)?,
            IssueRecord::External(issue) => write!(
                f,
                "external {}:{} {} {}",
                issue.engine_id, issue.rule_id, issue.severity, issue.rule_type
            )?,
        }
        writeln!(f, " at {}", self.primary())?;
        for location in self.secondary() {
            writeln!(f, "  related {location}")?;
        }
        Ok(())
    }
}
