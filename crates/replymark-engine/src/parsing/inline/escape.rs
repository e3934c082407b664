//! HTML escaping for text and attribute contexts.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for use as HTML text.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).replace('\'', "&#39;")
}

/// Escapes a value for a double-quoted attribute (`&`, `<`, `>`, `"`).
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Reverses entity escaping so a value can be validated as written.
pub fn unescape(text: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(text)
}
