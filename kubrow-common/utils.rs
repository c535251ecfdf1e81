#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Placeholder text for a value that is not available.
pub const NOT_AVAILABLE: &str = "n/a";

/// Returns the string slice or [`NOT_AVAILABLE`] if it is empty.
pub fn or_not_available(s: &str) -> &str {
    if s.is_empty() { NOT_AVAILABLE } else { s }
}

/// Truncates a string slice to the new length.
pub fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Adds padding to the string slice.
pub fn add_padding(s: &str, width: usize) -> String {
    let text_width = s.chars().count();

    let mut text = String::with_capacity(width);
    text.push_str(truncate(s, width));

    let padding_len = width.saturating_sub(text_width);
    text.extend(std::iter::repeat_n(' ', padding_len));

    text
}

/// Adds padding in front of the string slice, so the text is aligned to the right.
pub fn add_padding_left(s: &str, width: usize) -> String {
    let text = truncate(s, width);
    let padding_len = width.saturating_sub(text.chars().count());

    let mut result = String::with_capacity(width);
    result.extend(std::iter::repeat_n(' ', padding_len));
    result.push_str(text);

    result
}
