use serde::Serialize;

/// Byte range plus line/column of a node in the original source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: u32, end: u32, line: u32, column: u32) -> Self {
        Span {
            start,
            end,
            line,
            column,
        }
    }

    /// Span for synthesized nodes with no source location.
    pub fn dummy() -> Self {
        Span::default()
    }
}
