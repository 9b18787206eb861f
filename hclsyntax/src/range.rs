use std::fmt;
use std::ops::Range;

/// A byte range within one source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourceRange {
    /// The source file ID (for error reporting with codespan-reporting).
    pub file_id: usize,
    pub span: Range<usize>,
}

impl SourceRange {
    pub fn new(file_id: usize, span: Range<usize>) -> Self {
        SourceRange { file_id, span }
    }

    /// Smallest range covering both `self` and `other`.
    /// Both ranges are expected to belong to the same file.
    pub fn to(&self, other: &SourceRange) -> SourceRange {
        SourceRange {
            file_id: self.file_id,
            span: self.span.start.min(other.span.start)..self.span.end.max(other.span.end),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.file_id, self.span.start, self.span.end)
    }
}
