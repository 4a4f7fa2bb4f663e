//! Test fixtures: an in-memory sensor context that records the issues saved on it.

use std::path::{Path, PathBuf};

use expect_test::Expect;
use ib_core::{
    ActiveRules, Configuration, DefaultActiveRules, DefaultFileSystem, FileSystem, InputFile,
    IssueRecord, Language, MapSettings, RuleKey, SensorContext, Severity, Url,
};
use parking_lot::Mutex;
use tempfile::TempDir;

#[derive(Debug, Default)]
pub struct SensorContextTester {
    fs: DefaultFileSystem,
    active_rules: DefaultActiveRules,
    settings: MapSettings,
    issues: Mutex<Vec<IssueRecord>>,
}

pub fn new() -> SensorContextTester {
    SensorContextTester::default()
}

impl SensorContextTester {
    /// Add a source file of the `bsl` language.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, contents: &str) -> &mut Self {
        self.fs.add(InputFile::new(path, contents).with_language(Language::BSL_KEY));
        self
    }

    pub fn add_input_file(&mut self, file: InputFile) -> &mut Self {
        self.fs.add(file);
        self
    }

    /// Add every file on disk under `dir`, assigning languages from the current settings.
    pub fn add_dir(&mut self, dir: &Path) -> &mut Self {
        let languages = [Language::bsl(&self.settings)];
        for entry in ignore::WalkBuilder::new(dir).hidden(false).build() {
            let entry = entry.unwrap();
            if entry.file_type().is_some_and(|ty| ty.is_file()) {
                self.fs.add_path(entry.path(), &languages).unwrap();
            }
        }
        self
    }

    /// Activate a rule with a `MAJOR` severity.
    pub fn activate(&mut self, repository: &str, rule: &str) -> &mut Self {
        self.active_rules.activate(RuleKey::of(repository, rule), Severity::Major);
        self
    }

    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.settings.set(key, value);
        self
    }

    #[track_caller]
    pub fn file(&self, path: impl AsRef<Path>) -> &InputFile {
        let path = path.as_ref();
        self.fs
            .input_file(Language::BSL_KEY, path)
            .unwrap_or_else(|| panic!("no bsl file at {}", path.display()))
    }

    pub fn issues(&self) -> Vec<IssueRecord> {
        self.issues.lock().clone()
    }

    /// All saved issues rendered in a stable order.
    pub fn render_issues(&self) -> String {
        let mut issues = self.issues().iter().map(ToString::to_string).collect::<Vec<_>>();
        issues.sort();
        issues.concat()
    }

    #[track_caller]
    pub fn assert_issues(&self, expect: Expect) {
        expect.assert_eq(&self.render_issues());
    }
}

impl SensorContext for SensorContextTester {
    type FileSystem = DefaultFileSystem;

    fn file_system(&self) -> &DefaultFileSystem {
        &self.fs
    }

    fn active_rules(&self) -> &(dyn ActiveRules + Sync) {
        &self.active_rules
    }

    fn config(&self) -> &(dyn Configuration + Sync) {
        &self.settings
    }

    fn save(&self, issue: IssueRecord) {
        self.issues.lock().push(issue);
    }
}

/// `lines` lines of the form `Строка N;`, joined without a trailing newline.
pub fn lines(lines: usize) -> String {
    (1..=lines).map(|i| format!("Строка {i};")).collect::<Vec<_>>().join("\n")
}

pub fn file_url(path: impl AsRef<Path>) -> Url {
    let path = path.as_ref();
    Url::from_file_path(path)
        .unwrap_or_else(|()| panic!("not an absolute path: {}", path.display()))
}

/// A temporary project directory, removed on drop.
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative` within the project, returning the absolute path.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}
