use std::fmt;
use std::path::PathBuf;

use smol_str::SmolStr;
use url::Url;

/// A single finding reported by the analysis engine.
/// Positions are zero-based as is conventional for language servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: DiagnosticSeverity,
    pub code: Option<DiagnosticCode>,
    /// Which (sub-)engine produced this diagnostic.
    pub source: Option<String>,
    pub message: String,
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    pub fn new(range: Range, severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            range,
            severity,
            code: None,
            source: None,
            message: message.into(),
            related_information: vec![],
        }
    }

    pub fn with_code(mut self, code: impl Into<DiagnosticCode>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_related(mut self, related: DiagnosticRelatedInformation) -> Self {
        self.related_information.push(related);
        self
    }

    /// The rule identifier of this diagnostic.
    /// Numeric codes are rendered in decimal and a missing code is the empty string.
    pub fn rule_id(&self) -> SmolStr {
        match &self.code {
            None => SmolStr::default(),
            Some(code) => code.to_smol_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Information,
    Hint,
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
            DiagnosticSeverity::Information => "information",
            DiagnosticSeverity::Hint => "hint",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    Number(i32),
    String(String),
}

impl DiagnosticCode {
    pub fn to_smol_str(&self) -> SmolStr {
        match self {
            DiagnosticCode::Number(n) => SmolStr::new(n.to_string()),
            DiagnosticCode::String(s) => SmolStr::new(s),
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCode::Number(n) => write!(f, "{n}"),
            DiagnosticCode::String(s) => f.write_str(s),
        }
    }
}

impl From<i32> for DiagnosticCode {
    #[inline]
    fn from(n: i32) -> Self {
        DiagnosticCode::Number(n)
    }
}

impl From<&str> for DiagnosticCode {
    #[inline]
    fn from(s: &str) -> Self {
        DiagnosticCode::String(s.to_owned())
    }
}

impl From<String> for DiagnosticCode {
    #[inline]
    fn from(s: String) -> Self {
        DiagnosticCode::String(s)
    }
}

/// A zero-based position. `character` is an offset within the line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    #[inline]
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.character)
    }
}

/// A zero-based range as reported by the analysis engine. Nothing about it is validated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl From<((u32, u32), (u32, u32))> for Range {
    #[inline]
    fn from(((sl, sc), (el, ec)): ((u32, u32), (u32, u32))) -> Self {
        Self::new(Position::new(sl, sc), Position::new(el, ec))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "start{}, end{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub uri: Url,
    pub range: Range,
}

/// A secondary location attached to a diagnostic, e.g. "declared here".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRelatedInformation {
    pub location: Location,
    pub message: String,
}

impl DiagnosticRelatedInformation {
    pub fn new(uri: Url, range: impl Into<Range>, message: impl Into<String>) -> Self {
        Self { location: Location { uri, range: range.into() }, message: message.into() }
    }
}

/// All diagnostics reported for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiagnostics {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileDiagnostics {
    pub fn new(path: impl Into<PathBuf>, diagnostics: impl Into<Vec<Diagnostic>>) -> Self {
        Self { path: path.into(), diagnostics: diagnostics.into() }
    }
}
