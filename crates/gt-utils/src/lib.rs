//! Shared text and path helpers for goto.

use unicode_width::UnicodeWidthChar;

/// Marker inserted where a path has been shortened.
pub const ELLIPSIS: &str = "...";

/// Smallest number of path columns kept around the ellipsis.
const MIN_KEPT_COLUMNS: usize = 6;

/// Number of terminal columns a character occupies.
///
/// East-Asian wide and fullwidth characters take two columns. Ambiguous,
/// halfwidth, narrow and neutral characters take one. Control and combining
/// characters take none.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Number of terminal columns a string occupies.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Take characters from the front of `text` while they fit in `max_width` columns.
pub fn take_head(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (index, ch) in text.char_indices() {
        let width = char_width(ch);
        if used + width > max_width {
            return &text[..index];
        }
        used += width;
    }
    text
}

/// Take characters from the back of `text` while they fit in `max_width` columns.
pub fn take_tail(text: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (index, ch) in text.char_indices().rev() {
        let width = char_width(ch);
        if used + width > max_width {
            break;
        }
        used += width;
        start = index;
    }
    &text[start..]
}

/// Shorten a path in the middle so it fits in `max_width` columns.
///
/// Paths that already fit are returned unchanged. When there is not enough
/// room to keep a meaningful head and tail, the path is cut at the end instead.
pub fn shorten_path_middle(path: &str, max_width: usize) -> String {
    if display_width(path) <= max_width {
        return path.to_string();
    }
    let keep = max_width.saturating_sub(ELLIPSIS.len());
    if keep < MIN_KEPT_COLUMNS {
        return take_head(path, max_width).to_string();
    }
    let head_budget = keep / 2;
    let tail_budget = keep - head_budget;
    format!(
        "{}{ELLIPSIS}{}",
        take_head(path, head_budget),
        take_tail(path, tail_budget)
    )
}

/// Pad `text` with spaces until it fills `width` columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    let mut padded = String::with_capacity(text.len() + padding);
    padded.push_str(text);
    padded.extend(std::iter::repeat(' ').take(padding));
    padded
}

/// Expand a leading `~` to the home directory.
pub fn expand_path(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };
    expand_path_with_home(path, &home)
}

fn expand_path_with_home(path: &str, home: &std::path::Path) -> String {
    if path == "~" {
        return home.to_string_lossy().to_string();
    }
    match path.strip_prefix("~/") {
        Some(rest) if rest.is_empty() => home.to_string_lossy().to_string(),
        Some(rest) => home.join(rest).to_string_lossy().to_string(),
        None => path.to_string(),
    }
}

/// Whether a destination path is a web URL rather than a directory.
pub fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}
