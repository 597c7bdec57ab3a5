/// Half-open byte span into a candidate word: `[start, end)`.
///
/// `start` and `end` are valid UTF-8 slice boundaries for that same word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}
