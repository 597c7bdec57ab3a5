//! Editor coordinates.
//!
//! Lines and characters are zero-based; `character` counts UTF-16 code units like LSP.
//! Ranges are half-open `[start, end)`, but containment checks treat `end` as inclusive so a
//! cursor sitting right after a word still counts as touching it.

use serde::{Deserialize, Serialize};

/// Identifies the document a completion session runs in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Shorthand for `Range::new(Position::new(l0, c0), Position::new(l1, c1))`.
    pub const fn lines(l0: u32, c0: u32, l1: u32, c1: u32) -> Self {
        Self::new(Position::new(l0, c0), Position::new(l1, c1))
    }

    pub const fn point(position: Position) -> Self {
        Self::new(position, position)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains_position(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// A cursor at `position` is on this token: inside it or right after its last char.
    /// A cursor at `start` sits before the token.
    pub fn has_cursor(&self, position: Position) -> bool {
        self.start < position && position <= self.end
    }

    pub fn contains_range(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
