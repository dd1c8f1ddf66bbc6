//! Snippet extraction helpers
//!
//! All helpers work on byte offsets returned by `regex` and cut the input at
//! `\n` boundaries, so the returned slices are always valid `&str`.

/// Byte offset of the first character of the line containing `pos`.
fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

/// Byte offset of the `\n` ending the line containing `pos`, or the end of
/// the text on the last line.
fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}

/// Slice of whole lines around the match `start..end`.
///
/// The window covers every line the match touches, plus up to `before`
/// lines above and `after` lines below. The newline ending the last line of
/// the window is not part of the slice.
pub fn line_window(text: &str, start: usize, end: usize, before: usize, after: usize) -> &str {
    let mut from = line_start(text, start);
    for _ in 0..before {
        if from == 0 {
            break;
        }
        from = line_start(text, from - 1);
    }

    // A match that swallowed its own newline ends on that line, not the next.
    let mut to = if end > start && text[start..end].ends_with('\n') {
        end - 1
    } else {
        line_end(text, end)
    };
    for _ in 0..after {
        if to >= text.len() {
            break;
        }
        to = line_end(text, to + 1);
    }

    &text[from..to]
}
