//! Fixtures and fake providers shared by the IDE tests.

use std::sync::Arc;
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::{
    DocumentId, Position, ProviderError, Range, SelectionRange, SelectionRangeProvider,
    TextBuffer, WordRangeProvider, WordRanges,
};

/// Cursor sits right after the `be` on line 4.
pub(crate) const SOURCE: &str = "\
fn outer() {
    let alpha = 1;
    if ready {
        let beta = alpha;
        be
    }
    gamma();
}
fn other() { beta(); delta(); }";

pub(crate) const CURSOR: Position = Position::new(4, 10);

pub(crate) fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub(crate) fn doc() -> DocumentId {
    DocumentId::new("file:///outer.rs")
}

pub(crate) fn buffer() -> Arc<TextBuffer> {
    Arc::new(TextBuffer::new(doc(), SOURCE))
}

/// Selection ranges of `SOURCE` around `CURSOR`, innermost first.
pub(crate) fn scopes() -> Vec<Range> {
    vec![
        Range::lines(2, 14, 5, 4),
        Range::lines(0, 12, 7, 0),
        Range::lines(0, 0, 8, 31),
    ]
}

pub(crate) fn scope_tree() -> SelectionRange {
    SelectionRange::from_chain(scopes()).expect("non-empty chain")
}

pub(crate) fn words(entries: &[(&str, &[Range])]) -> WordRanges {
    entries
        .iter()
        .map(|(word, ranges)| (word.to_string(), ranges.to_vec()))
        .collect()
}

/// Answers every request with a fixed value.
pub(crate) struct StaticSelection(pub Option<Vec<SelectionRange>>);

impl SelectionRangeProvider for StaticSelection {
    async fn selection_ranges(
        &self,
        _document: &DocumentId,
        _position: Position,
    ) -> Result<Option<Vec<SelectionRange>>, ProviderError> {
        Ok(self.0.clone())
    }
}

pub(crate) struct FailingSelection;

impl SelectionRangeProvider for FailingSelection {
    async fn selection_ranges(
        &self,
        _document: &DocumentId,
        _position: Position,
    ) -> Result<Option<Vec<SelectionRange>>, ProviderError> {
        Err(ProviderError::Failed("server crashed".into()))
    }
}

/// Never answers.
pub(crate) struct PendingSelection;

impl SelectionRangeProvider for PendingSelection {
    async fn selection_ranges(
        &self,
        _document: &DocumentId,
        _position: Position,
    ) -> Result<Option<Vec<SelectionRange>>, ProviderError> {
        std::future::pending().await
    }
}

/// Answers with a fixed index after `delay`, counting calls.
pub(crate) struct StaticWords {
    pub words: Option<WordRanges>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl StaticWords {
    pub(crate) fn new(words: Option<WordRanges>) -> Self {
        Self {
            words,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WordRangeProvider for StaticWords {
    async fn word_ranges(
        &self,
        _document: &DocumentId,
        _range: Range,
    ) -> Result<Option<WordRanges>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.words.clone())
    }
}

pub(crate) struct FailingWords;

impl WordRangeProvider for FailingWords {
    async fn word_ranges(
        &self,
        document: &DocumentId,
        _range: Range,
    ) -> Result<Option<WordRanges>, ProviderError> {
        Err(ProviderError::UnknownDocument(document.0.clone()))
    }
}
