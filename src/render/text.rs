//! Line-break normalization shared by all renderers.

use std::borrow::Cow;

/// Check whether a character counts as a line break.
pub fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Check whether text contains any line-break character.
pub fn contains_line_break(text: &str) -> bool {
    text.chars().any(is_line_break)
}

/// Normalize text for rendering.
///
/// With `ignore_line_break` every line-break character is removed, embedded
/// ones included. Otherwise the text is returned unchanged.
pub fn normalize(text: &str, ignore_line_break: bool) -> Cow<'_, str> {
    if ignore_line_break && contains_line_break(text) {
        Cow::Owned(text.chars().filter(|&c| !is_line_break(c)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace each line break with `replacement`. `"\r\n"` counts as one break.
pub fn replace_line_breaks<'a>(text: &'a str, replacement: &str) -> Cow<'a, str> {
    if !contains_line_break(text) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + replacement.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' && chars.peek() == Some(&'\n') {
            chars.next();
        }
        if is_line_break(c) {
            result.push_str(replacement);
        } else {
            result.push(c);
        }
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_all_breaks() {
        assert_eq!(normalize("dummy\n", true), "dummy");
        assert_eq!(normalize("a\nb\r\nc", true), "abc");
        assert_eq!(normalize("a\u{2028}b", true), "ab");
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize("dummy\n", false), "dummy\n");
        assert!(matches!(normalize("plain", true), Cow::Borrowed(_)));
    }

    #[test]
    fn test_replace_line_breaks() {
        assert_eq!(replace_line_breaks("dummy\n", "<br>"), "dummy<br>");
        assert_eq!(replace_line_breaks("a\r\nb\rc", "<br>"), "a<br>b<br>c");
        assert_eq!(replace_line_breaks("\n\n", "<br>"), "<br><br>");
        assert_eq!(replace_line_breaks("none", "<br>"), "none");
    }
}
