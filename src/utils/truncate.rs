//! Line-preserving text truncation
//!
//! Snippets extracted from build logs are bounded in two independent ways:
//! by the width of each line and by the total number of lines. Both
//! operations split on `\n` and keep every newline where it was, so blank
//! lines and a trailing newline survive untouched.
//!
//! # Examples
//!
//! ```rust
//! use bambot::{truncate_lines_count, truncate_lines_width};
//!
//! assert_eq!(truncate_lines_width("12345678\nX\n", 7), "1234...\nX\n");
//! assert_eq!(truncate_lines_count("1\n2\n3", 2), "1\n2\n...");
//! ```

/// Marker appended to a shortened line and used as the final line of a
/// shortened text.
pub const ELLIPSIS: &str = "...";

/// Smallest `max_width` that leaves room for at least one character of
/// content in front of [`ELLIPSIS`].
pub const MIN_LINE_WIDTH: usize = 4;

/// Shorten every line longer than `max_width` characters.
///
/// A long line is replaced by its first `max_width - 3` characters followed
/// by `...`, so the result is exactly `max_width` characters wide. Lines that
/// already fit are returned byte-for-byte.
///
/// `max_width` must be at least [`MIN_LINE_WIDTH`]. Smaller values trip a
/// debug assertion and are raised to the minimum in release builds.
pub fn truncate_lines_width(text: &str, max_width: usize) -> String {
    debug_assert!(
        max_width >= MIN_LINE_WIDTH,
        "max_width {} is below the minimum of {}",
        max_width,
        MIN_LINE_WIDTH
    );
    let max_width = max_width.max(MIN_LINE_WIDTH);
    let keep = max_width - ELLIPSIS.len();

    let mut output = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            output.push('\n');
        }
        if line.chars().count() > max_width {
            output.extend(line.chars().take(keep));
            output.push_str(ELLIPSIS);
        } else {
            output.push_str(line);
        }
    }
    output
}

/// Keep at most `max_lines` lines of `text`.
///
/// When `text` has more lines than allowed, the first `max_lines` lines are
/// kept and a final `...` line is appended; the result then has
/// `max_lines + 1` lines. Otherwise the input is returned unchanged.
pub fn truncate_lines_count(text: &str, max_lines: usize) -> String {
    if line_count(text) <= max_lines {
        return text.to_string();
    }

    let mut kept: Vec<&str> = text.split('\n').take(max_lines).collect();
    kept.push(ELLIPSIS);
    kept.join("\n")
}

/// Number of `\n`-separated lines, counting a trailing empty line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}
