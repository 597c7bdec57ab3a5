//! In-process text buffer and word index.
//!
//! Used when no language server answers word-range requests, and by tests.
//! Words are maximal runs of alphanumerics, `_`, and any configured extra word chars.

use std::sync::Arc;

use crate::position::{DocumentId, Position, Range};
use crate::providers::{ProviderError, WordRangeProvider, WordRanges};

/// Immutable snapshot of a document's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    document: DocumentId,
    lines: Vec<String>,
}

impl TextBuffer {
    /// Splits `text` on `\n`; a trailing `\r` on each line is dropped.
    pub fn new(document: DocumentId, text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self { document, lines }
    }

    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, line: u32) -> Option<&str> {
        self.lines.get(line as usize).map(String::as_str)
    }

    /// Position just past the last character of the document.
    pub fn end_position(&self) -> Position {
        let last = self.lines.len().saturating_sub(1);
        let character = self.lines.get(last).map_or(0, |line| utf16_len(line));
        Position::new(u32::try_from(last).unwrap_or(u32::MAX), character)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.line(position.line)
            .is_some_and(|line| position.character <= utf16_len(line))
    }

    /// Every char of the document with its position, line breaks excluded.
    pub(crate) fn chars(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.lines.iter().enumerate().flat_map(|(line_idx, line)| {
            let line_idx = u32::try_from(line_idx).unwrap_or(u32::MAX);
            let mut col = 0u32;
            line.chars().map(move |ch| {
                let position = Position::new(line_idx, col);
                col = col.saturating_add(ch.len_utf16() as u32);
                (position, ch)
            })
        })
    }
}

pub(crate) fn utf16_len(text: &str) -> u32 {
    u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX)
}

/// Splits one line into words with their ranges.
pub(crate) fn line_words(line: &str, line_idx: u32, extra: &[char]) -> Vec<(String, Range)> {
    let is_word_char = |ch: char| ch.is_alphanumeric() || ch == '_' || extra.contains(&ch);

    let mut words = Vec::new();
    let mut current: Option<(String, u32)> = None;
    let mut col = 0u32;

    for ch in line.chars() {
        if is_word_char(ch) {
            match current.as_mut() {
                Some((word, _)) => word.push(ch),
                None => current = Some((ch.to_string(), col)),
            }
        } else if let Some((word, start)) = current.take() {
            words.push((word, Range::lines(line_idx, start, line_idx, col)));
        }
        col = col.saturating_add(ch.len_utf16() as u32);
    }
    if let Some((word, start)) = current {
        words.push((word, Range::lines(line_idx, start, line_idx, col)));
    }

    words
}

/// Word index over a [`TextBuffer`].
#[derive(Debug, Clone)]
pub struct BufferWordRanges {
    buffer: Arc<TextBuffer>,
    extra_word_chars: Vec<char>,
}

impl BufferWordRanges {
    pub fn new(buffer: Arc<TextBuffer>) -> Self {
        Self {
            buffer,
            extra_word_chars: Vec::new(),
        }
    }

    /// Treats `chars` as part of words too, e.g. `$` for JavaScript or `-` for CSS.
    pub fn with_extra_word_chars(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.extra_word_chars.extend(chars);
        self
    }

    /// Occurrences of every word lying entirely inside `range`.
    pub fn index(&self, range: Range) -> WordRanges {
        let mut out = WordRanges::new();
        if range.is_empty() {
            return out;
        }

        let lines = self.buffer.lines();
        let first = range.start.line as usize;
        let last = (range.end.line as usize).min(lines.len().saturating_sub(1));
        for line_idx in first..=last {
            let Some(line) = lines.get(line_idx) else {
                break;
            };
            let line_idx = u32::try_from(line_idx).unwrap_or(u32::MAX);
            for (word, word_range) in line_words(line, line_idx, &self.extra_word_chars) {
                if range.contains_range(&word_range) {
                    out.entry(word).or_default().push(word_range);
                }
            }
        }

        out
    }

    /// The word touching `position`, if any.
    pub fn word_at(&self, position: Position) -> Option<(String, Range)> {
        let line = self.buffer.line(position.line)?;
        line_words(line, position.line, &self.extra_word_chars)
            .into_iter()
            .find(|(_, range)| range.contains_position(position))
    }
}

impl WordRangeProvider for BufferWordRanges {
    async fn word_ranges(
        &self,
        document: &DocumentId,
        range: Range,
    ) -> Result<Option<WordRanges>, ProviderError> {
        if document != self.buffer.document() {
            return Err(ProviderError::UnknownDocument(document.0.clone()));
        }
        Ok(Some(self.index(range)))
    }
}
