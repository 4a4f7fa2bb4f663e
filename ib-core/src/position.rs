use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::str::FromStr;

/// A position in a file as understood by the host: lines are one-based, offsets are zero-based.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextPointer {
    line: Line,
    line_offset: Col,
}

impl TextPointer {
    #[inline]
    pub fn new(line: Line, line_offset: Col) -> Self {
        Self { line, line_offset }
    }

    #[inline]
    pub fn line(&self) -> Line {
        self.line
    }

    #[inline]
    pub fn line_offset(&self) -> Col {
        self.line_offset
    }
}

impl fmt::Display for TextPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.line_offset)
    }
}

impl fmt::Debug for TextPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for TextPointer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, col) = s
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("invalid pointer: {s} (expected `<line>:<offset>`)"))?;
        Ok(Self::new(line.parse::<usize>()?, col.parse::<usize>()?))
    }
}

impl From<(usize, usize)> for TextPointer {
    #[inline]
    fn from((line, line_offset): (usize, usize)) -> Self {
        Self { line, line_offset }
    }
}

impl From<TextPointer> for (usize, usize) {
    #[inline]
    fn from(val: TextPointer) -> Self {
        (val.line, val.line_offset)
    }
}

impl PartialEq<(usize, usize)> for TextPointer {
    #[inline]
    fn eq(&self, &(line, line_offset): &(usize, usize)) -> bool {
        self.line == line && self.line_offset == line_offset
    }
}

impl PartialOrd<(usize, usize)> for TextPointer {
    #[inline]
    fn partial_cmp(&self, other: &(usize, usize)) -> Option<Ordering> {
        Some(self.cmp(&TextPointer::from(*other)))
    }
}

/// A range of text in the host's coordinates.
/// This type only guarantees `start <= end`, checking that the range actually fits within a file
/// is the job of [`SourceFile::new_range`](crate::SourceFile::new_range).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRange {
    /// The start of the range (inclusive)
    start: TextPointer,
    /// The end of the range (exclusive)
    end: TextPointer,
}

impl RangeBounds<TextPointer> for TextRange {
    #[inline]
    fn start_bound(&self) -> Bound<&TextPointer> {
        Bound::Included(&self.start)
    }

    #[inline]
    fn end_bound(&self) -> Bound<&TextPointer> {
        Bound::Excluded(&self.end)
    }
}

impl TextRange {
    #[inline]
    pub fn new(start: impl Into<TextPointer>, end: impl Into<TextPointer>) -> Self {
        let start = start.into();
        let end = end.into();
        assert!(start <= end, "start must not be after end: {} !<= {}", start, end);
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> TextPointer {
        self.start
    }

    #[inline]
    pub fn end(&self) -> TextPointer {
        self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether every line touched by this range lies within `1..=lines`.
    #[inline]
    pub fn is_within_lines(&self, lines: usize) -> bool {
        self.start.line >= 1 && self.end.line <= lines
    }

    #[inline]
    pub fn intersects(&self, other: &TextRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    #[inline]
    pub fn is_subrange_of(&self, other: impl Into<TextRange>) -> bool {
        let other = other.into();
        other.start <= self.start && self.end <= other.end
    }
}

impl FromStr for TextRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once("..").ok_or_else(|| {
            anyhow::anyhow!("invalid range: {s} (expected `<line>:<offset>..<line>:<offset>`)")
        })?;
        let (start, end) = (start.parse::<TextPointer>()?, end.parse::<TextPointer>()?);
        anyhow::ensure!(start <= end, "invalid range: {s} (start is after end)");
        Ok(Self::new(start, end))
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl From<TextRange> for std::ops::Range<TextPointer> {
    #[inline]
    fn from(val: TextRange) -> Self {
        val.start..val.end
    }
}

impl From<TextRange> for std::ops::Range<(usize, usize)> {
    #[inline]
    fn from(r: TextRange) -> Self {
        r.start.into()..r.end.into()
    }
}

pub type Line = usize;

pub type Col = usize;
