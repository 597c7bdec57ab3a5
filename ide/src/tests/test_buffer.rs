use pretty_assertions::assert_eq;

use super::common::{CURSOR, buffer, doc, scopes};
use crate::{
    BracketSelectionRanges, BufferWordRanges, DocumentId, Position, ProviderError, Range,
    SelectionRangeProvider, TextBuffer, WordRangeProvider,
};
use std::sync::Arc;

#[test]
fn buffer_splits_lines_and_strips_carriage_returns() {
    let buffer = TextBuffer::new(doc(), "a\r\nbb\n");
    assert_eq!(buffer.lines(), &["a", "bb", ""]);
    assert_eq!(buffer.end_position(), Position::new(2, 0));
    assert!(buffer.contains(Position::new(1, 2)));
    assert!(!buffer.contains(Position::new(1, 3)));
    assert!(!buffer.contains(Position::new(3, 0)));
}

#[test]
fn word_index_covers_requested_range() {
    let index = BufferWordRanges::new(buffer()).index(Range::lines(0, 0, 8, 31));

    assert_eq!(
        index["alpha"],
        vec![Range::lines(1, 8, 1, 13), Range::lines(3, 19, 3, 24)]
    );
    assert_eq!(
        index["beta"],
        vec![Range::lines(3, 12, 3, 16), Range::lines(8, 13, 8, 17)]
    );
    assert_eq!(index["be"], vec![Range::lines(4, 8, 4, 10)]);
    assert_eq!(index["delta"], vec![Range::lines(8, 21, 8, 26)]);
    assert_eq!(index["fn"].len(), 2);
}

#[test]
fn word_index_skips_words_crossing_the_range() {
    let index = BufferWordRanges::new(buffer()).index(Range::lines(1, 10, 3, 22));

    assert!(!index.contains_key("alpha"), "{index:?}");
    assert_eq!(index["ready"], vec![Range::lines(2, 7, 2, 12)]);
    assert_eq!(index["beta"], vec![Range::lines(3, 12, 3, 16)]);
    assert!(!index.contains_key("gamma"));
}

#[test]
fn word_index_of_empty_range_is_empty() {
    let index = BufferWordRanges::new(buffer()).index(Range::point(CURSOR));
    assert!(index.is_empty());
}

#[test]
fn word_columns_count_utf16_units() {
    let buffer = Arc::new(TextBuffer::new(doc(), "😀 naïve $el"));
    let words = BufferWordRanges::new(buffer.clone()).index(Range::lines(0, 0, 0, 20));
    assert_eq!(words["naïve"], vec![Range::lines(0, 3, 0, 8)]);
    assert_eq!(words["el"], vec![Range::lines(0, 10, 0, 12)]);

    let words = BufferWordRanges::new(buffer)
        .with_extra_word_chars(['$'])
        .index(Range::lines(0, 0, 0, 20));
    assert_eq!(words["$el"], vec![Range::lines(0, 9, 0, 12)]);
}

#[test]
fn word_at_touches_word_end() {
    let words = BufferWordRanges::new(buffer());
    assert_eq!(
        words.word_at(CURSOR),
        Some(("be".to_string(), Range::lines(4, 8, 4, 10)))
    );
    assert_eq!(words.word_at(Position::new(4, 2)), None);
    assert_eq!(words.word_at(Position::new(40, 0)), None);
}

#[tokio::test]
async fn word_provider_rejects_other_documents() {
    let words = BufferWordRanges::new(buffer());
    let err = words
        .word_ranges(&DocumentId::new("file:///other.rs"), Range::lines(0, 0, 1, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::UnknownDocument(uri) if uri == "file:///other.rs"));

    let index = words
        .word_ranges(&doc(), Range::lines(0, 0, 0, 12))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(index["outer"], vec![Range::lines(0, 3, 0, 8)]);
}

#[test]
fn bracket_chain_nests_around_cursor() {
    let brackets = BracketSelectionRanges::new(buffer());
    assert_eq!(brackets.chain_at(CURSOR), scopes());
}

#[test]
fn bracket_chain_ignores_mismatched_closers() {
    let buffer = Arc::new(TextBuffer::new(doc(), "f(a ] b) [c"));
    let brackets = BracketSelectionRanges::new(buffer);
    // `]` has no opener on top of the stack; `[` never closes.
    assert_eq!(
        brackets.chain_at(Position::new(0, 3)),
        vec![Range::lines(0, 2, 0, 7), Range::lines(0, 0, 0, 11)]
    );
}

#[test]
fn bracket_chain_outside_brackets_is_whole_document() {
    let brackets = BracketSelectionRanges::new(buffer());
    assert_eq!(
        brackets.chain_at(Position::new(8, 0)),
        vec![Range::lines(0, 0, 8, 31)]
    );
}

#[tokio::test]
async fn bracket_provider_returns_one_tree() {
    let brackets = BracketSelectionRanges::new(buffer());
    let trees = brackets
        .selection_ranges(&doc(), CURSOR)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].to_chain(), scopes());

    let err = brackets
        .selection_ranges(&doc(), Position::new(4, 11))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProviderError::OutOfBounds {
            line: 4,
            character: 11
        }
    ));
}
