use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use crate::{Language, TextPointer, TextRange};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("line {line} is out of range, expected a line in [1, {lines}]")]
    LineOutOfBounds { line: usize, lines: usize },
    #[error("offset {offset} is not valid for line {line} of length {len}")]
    OffsetOutOfBounds { line: usize, offset: usize, len: usize },
    #[error("start pointer {start} should be before end pointer {end}")]
    NotBefore { start: TextPointer, end: TextPointer },
}

/// A file known to the host, against which ranges are validated.
pub trait SourceFile {
    /// The absolute path of the file. This is also the file's identity.
    fn path(&self) -> &Path;

    fn language(&self) -> Option<&str>;

    /// The number of lines in the file. This is always at least 1, even for an empty file.
    fn lines(&self) -> usize;

    /// Build a validated, non-empty range.
    fn new_range(
        &self,
        start_line: usize,
        start_offset: usize,
        end_line: usize,
        end_offset: usize,
    ) -> Result<TextRange, RangeError>;

    /// Select the whole of the given one-based line.
    fn select_line(&self, line: usize) -> Result<TextRange, RangeError>;
}

impl<F: SourceFile + ?Sized> SourceFile for &F {
    #[inline]
    fn path(&self) -> &Path {
        (**self).path()
    }

    #[inline]
    fn language(&self) -> Option<&str> {
        (**self).language()
    }

    #[inline]
    fn lines(&self) -> usize {
        (**self).lines()
    }

    #[inline]
    fn new_range(
        &self,
        start_line: usize,
        start_offset: usize,
        end_line: usize,
        end_offset: usize,
    ) -> Result<TextRange, RangeError> {
        (**self).new_range(start_line, start_offset, end_line, end_offset)
    }

    #[inline]
    fn select_line(&self, line: usize) -> Result<TextRange, RangeError> {
        (**self).select_line(line)
    }
}

/// An in-memory [`SourceFile`] that remembers the length of each line.
#[derive(Clone, PartialEq, Eq)]
pub struct InputFile {
    path: PathBuf,
    language: Option<SmolStr>,
    /// Length of each line in utf-16 code units (excluding the line terminator).
    line_lengths: Box<[usize]>,
}

impl fmt::Debug for InputFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputFile")
            .field("path", &self.path)
            .field("language", &self.language)
            .field("lines", &self.line_lengths.len())
            .finish()
    }
}

impl InputFile {
    /// Create a file from its contents.
    /// Offsets are measured in utf-16 code units, the default encoding of language servers.
    pub fn new(path: impl Into<PathBuf>, contents: &str) -> Self {
        Self { path: path.into(), language: None, line_lengths: line_lengths(contents) }
    }

    pub fn read(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Self::new(path, &contents))
    }

    pub fn with_language(mut self, language: impl Into<SmolStr>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// The length of the given one-based line.
    pub fn line_length(&self, line: usize) -> Result<usize, RangeError> {
        match line.checked_sub(1).and_then(|idx| self.line_lengths.get(idx)) {
            Some(&len) => Ok(len),
            None => Err(RangeError::LineOutOfBounds { line, lines: self.lines() }),
        }
    }

    fn new_pointer(&self, line: usize, offset: usize) -> Result<TextPointer, RangeError> {
        let len = self.line_length(line)?;
        if offset > len {
            return Err(RangeError::OffsetOutOfBounds { line, offset, len });
        }
        Ok(TextPointer::new(line, offset))
    }
}

/// Lines end at `\n`, `\r\n` or a lone `\r`, as in the language server protocol.
fn line_lengths(contents: &str) -> Box<[usize]> {
    let mut lengths = vec![];
    let mut len = 0;
    let mut chars = contents.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                lengths.push(len);
                len = 0;
            }
            '\n' => {
                lengths.push(len);
                len = 0;
            }
            c => len += c.len_utf16(),
        }
    }
    lengths.push(len);
    lengths.into_boxed_slice()
}

impl SourceFile for InputFile {
    #[inline]
    fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[inline]
    fn lines(&self) -> usize {
        self.line_lengths.len()
    }

    fn new_range(
        &self,
        start_line: usize,
        start_offset: usize,
        end_line: usize,
        end_offset: usize,
    ) -> Result<TextRange, RangeError> {
        let start = self.new_pointer(start_line, start_offset)?;
        let end = self.new_pointer(end_line, end_offset)?;
        if start >= end {
            return Err(RangeError::NotBefore { start, end });
        }
        Ok(TextRange::new(start, end))
    }

    fn select_line(&self, line: usize) -> Result<TextRange, RangeError> {
        let len = self.line_length(line)?;
        Ok(TextRange::new((line, 0), (line, len)))
    }
}

/// The host's catalog of files.
pub trait FileSystem {
    type File: SourceFile;

    /// Find the file of the given language at the given absolute path.
    fn input_file(&self, language: &str, path: &Path) -> Option<&Self::File>;
}

#[derive(Debug, Default)]
pub struct DefaultFileSystem {
    files: FxHashMap<PathBuf, InputFile>,
}

impl DefaultFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, file: InputFile) -> &mut Self {
        self.files.insert(file.path.clone(), file);
        self
    }

    /// Read the file at `path` from disk and index it under the first language that owns it.
    /// Files that no language owns are indexed without a language.
    pub fn add_path(
        &mut self,
        path: impl AsRef<Path>,
        languages: &[Language],
    ) -> anyhow::Result<&mut Self> {
        let path = path.as_ref();
        anyhow::ensure!(path.is_absolute(), "expected an absolute path, got {}", path.display());
        let mut file = InputFile::read(path)?;
        if let Some(language) = languages.iter().find(|language| language.owns(path)) {
            file = file.with_language(language.key());
        }
        Ok(self.add(file))
    }

    pub fn files(&self) -> impl Iterator<Item = &InputFile> + '_ {
        self.files.values()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSystem for DefaultFileSystem {
    type File = InputFile;

    fn input_file(&self, language: &str, path: &Path) -> Option<&InputFile> {
        self.files.get(path).filter(|file| file.language() == Some(language))
    }
}
