//! Character classes and word boundaries.
//!
//! A word boundary is where a new sub-word starts:
//! - the first character of the word
//! - the first non-separator after a separator (`foo_bar`, `$el`)
//! - a lowercase letter or digit followed by an uppercase letter (`fooBar`, `v2Api`)

/// Coarse class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Anything that is not alphanumeric (`_`, `-`, `.`, `$`, whitespace, ...).
    Separator,
    Lower,
    Upper,
    Digit,
    /// Alphanumeric without case, e.g. CJK ideographs.
    Other,
}

pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii() {
        return match ch {
            'a'..='z' => CharClass::Lower,
            'A'..='Z' => CharClass::Upper,
            '0'..='9' => CharClass::Digit,
            _ => CharClass::Separator,
        };
    }

    if ch.is_lowercase() {
        CharClass::Lower
    } else if ch.is_uppercase() {
        CharClass::Upper
    } else if ch.is_numeric() {
        CharClass::Digit
    } else if ch.is_alphanumeric() {
        CharClass::Other
    } else {
        CharClass::Separator
    }
}

/// Returns `true` if a sub-word starts at char index `idx` of `word`.
///
/// Out-of-range indices are never boundaries.
pub fn is_boundary(word: &[char], idx: usize) -> bool {
    let Some(&curr) = word.get(idx) else {
        return false;
    };
    if idx == 0 {
        return true;
    }
    let prev = classify(word[idx - 1]);
    let curr = classify(curr);
    match (prev, curr) {
        (CharClass::Separator, CharClass::Separator) => false,
        (CharClass::Separator, _) => true,
        (CharClass::Lower | CharClass::Digit, CharClass::Upper) => true,
        _ => false,
    }
}

/// Case-insensitive comparison of two characters.
///
/// Uses simple (single-char) lowercase mapping; characters whose lowercase form expands to
/// several chars only compare equal to themselves.
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || fold(a) == fold(b)
}

fn fold(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}
