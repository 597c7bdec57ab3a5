//! Selection ranges from bracket nesting.
//!
//! Fallback for documents without a language server: each `()`, `[]`, `{}` pair enclosing the
//! cursor contributes the range between its brackets, and the whole document closes the chain.
//! Brackets inside strings and comments are not told apart.

use std::sync::Arc;

use crate::buffer::TextBuffer;
use crate::position::{DocumentId, Position, Range};
use crate::providers::{ProviderError, SelectionRangeProvider};
use crate::selection::SelectionRange;

#[derive(Debug, Clone)]
pub struct BracketSelectionRanges {
    buffer: Arc<TextBuffer>,
}

impl BracketSelectionRanges {
    pub fn new(buffer: Arc<TextBuffer>) -> Self {
        Self { buffer }
    }

    /// Content ranges of the bracket pairs enclosing `position`, innermost first, then the
    /// whole document.
    pub fn chain_at(&self, position: Position) -> Vec<Range> {
        let mut stack: Vec<(char, Position)> = Vec::new();
        let mut enclosing: Vec<Range> = Vec::new();

        for (at, ch) in self.buffer.chars() {
            match ch {
                '(' | '[' | '{' => {
                    let after = Position::new(at.line, at.character.saturating_add(1));
                    stack.push((ch, after));
                }
                ')' | ']' | '}' => {
                    let Some(&(open, start)) = stack.last() else {
                        continue;
                    };
                    if open != opening_for(ch) {
                        continue;
                    }
                    stack.pop();
                    let content = Range::new(start, at);
                    if content.contains_position(position) {
                        enclosing.push(content);
                    }
                }
                _ => {}
            }
        }

        // Pairs around one point nest, so a later start means a tighter pair.
        enclosing.sort_by(|a, b| b.start.cmp(&a.start));
        enclosing.push(Range::new(Position::new(0, 0), self.buffer.end_position()));
        enclosing.dedup();
        enclosing
    }
}

fn opening_for(close: char) -> char {
    match close {
        ')' => '(',
        ']' => '[',
        _ => '{',
    }
}

impl SelectionRangeProvider for BracketSelectionRanges {
    async fn selection_ranges(
        &self,
        document: &DocumentId,
        position: Position,
    ) -> Result<Option<Vec<SelectionRange>>, ProviderError> {
        if document != self.buffer.document() {
            return Err(ProviderError::UnknownDocument(document.0.clone()));
        }
        if !self.buffer.contains(position) {
            return Err(ProviderError::OutOfBounds {
                line: position.line,
                character: position.character,
            });
        }
        Ok(SelectionRange::from_chain(self.chain_at(position)).map(|tree| vec![tree]))
    }
}
