//! Collaborators consulted by word distance.
//!
//! Both providers answer `Ok(None)` when they have nothing to offer (unsupported document,
//! cancelled request). Errors are reserved for failures worth logging; callers degrade either way.

use std::collections::HashMap;
use std::future::Future;

use thiserror::Error;

use crate::position::{DocumentId, Position, Range};
use crate::selection::SelectionRange;

/// Word text to every range where it occurs, sorted by start.
pub type WordRanges = HashMap<String, Vec<Range>>;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown document `{0}`")]
    UnknownDocument(String),
    #[error("position {line}:{character} is outside the document")]
    OutOfBounds { line: u32, character: u32 },
    #[error("provider failed: {0}")]
    Failed(String),
}

pub trait SelectionRangeProvider {
    /// Selection ranges at `position`, one tree per requested position.
    fn selection_ranges(
        &self,
        document: &DocumentId,
        position: Position,
    ) -> impl Future<Output = Result<Option<Vec<SelectionRange>>, ProviderError>> + Send;
}

pub trait WordRangeProvider {
    /// Occurrences of every word inside `range`.
    fn word_ranges(
        &self,
        document: &DocumentId,
        range: Range,
    ) -> impl Future<Output = Result<Option<WordRanges>, ProviderError>> + Send;
}
