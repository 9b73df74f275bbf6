//! Per-format character escaping.

use std::borrow::Cow;

/// Characters that are backslash-escaped in Markdown output.
pub const MARKDOWN_SPECIAL_CHARS: &[char] =
    &['\\', '`', '*', '_', '[', ']', '(', ')', '!', '-', '.', '|'];

/// Escape free text for embedding in HTML.
///
/// `&`, `<`, `>`, `"` and `'` become entities (`'` as `&#x27;`). Everything
/// else, URLs and non-ASCII included, passes through.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Reverse [`escape_html`].
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Backslash-escape every Markdown special character.
///
/// Purely lexical: each occurrence is escaped regardless of context. Apply
/// before any `<br>` substitution so the tag is not escaped itself.
pub fn escape_markdown(text: &str) -> Cow<'_, str> {
    if !text.contains(MARKDOWN_SPECIAL_CHARS) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        if MARKDOWN_SPECIAL_CHARS.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }
    Cow::Owned(result)
}

/// Reverse [`escape_markdown`].
pub fn unescape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if MARKDOWN_SPECIAL_CHARS.contains(&next) {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}
