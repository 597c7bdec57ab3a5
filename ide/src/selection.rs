//! Selection-range trees.
//!
//! A node owns its parent, so one value is a path from the innermost syntactic scope at the
//! cursor out to the outermost one.

use crate::position::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRange {
    pub range: Range,
    pub parent: Option<Box<SelectionRange>>,
}

impl SelectionRange {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: SelectionRange) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Builds a path from ranges ordered innermost first.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_chain(ranges: impl IntoIterator<Item = Range>) -> Option<Self> {
        let ranges: Vec<Range> = ranges.into_iter().collect();
        ranges.into_iter().rev().fold(None, |parent, range| {
            let node = SelectionRange::new(range);
            Some(match parent {
                Some(parent) => node.with_parent(parent),
                None => node,
            })
        })
    }

    /// Walks from this node outward, starting with `self`.
    pub fn ancestors(&self) -> impl Iterator<Item = &SelectionRange> {
        std::iter::successors(Some(self), |node| node.parent.as_deref())
    }

    pub fn outermost(&self) -> &SelectionRange {
        self.ancestors().last().unwrap_or(self)
    }

    /// Ranges from innermost to outermost.
    pub fn to_chain(&self) -> Vec<Range> {
        self.ancestors().map(|node| node.range).collect()
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }
}
