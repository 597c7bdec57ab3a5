/// JS/editor boundary uses UTF-16 code units (CodeMirror positions).
/// Ranges are half-open `[start, end)`; `end` is exclusive.
pub fn byte_offset_to_utf16_offset(source: &str, byte_offset: usize) -> u32 {
    let mut utf16 = 0u32;
    for (byte_idx, ch) in source.char_indices() {
        if byte_idx >= byte_offset {
            break;
        }
        utf16 += ch.len_utf16() as u32;
    }
    utf16
}

/// Maps sorted char indices to UTF-16 offsets in one pass.
pub fn char_indices_to_utf16(source: &str, indices: &[usize]) -> Vec<u32> {
    let mut out = Vec::with_capacity(indices.len());
    let mut wanted = indices.iter().copied().peekable();
    let mut utf16 = 0u32;

    for (char_idx, ch) in source.chars().enumerate() {
        while wanted.next_if_eq(&char_idx).is_some() {
            out.push(utf16);
        }
        if wanted.peek().is_none() {
            break;
        }
        utf16 += ch.len_utf16() as u32;
    }

    out
}
