//! Context-aware escaping for values interpolated into the report.
//!
//! Log text is attacker-controlled as far as the report is concerned: a line
//! containing `<script>` must show up as text, never run.

use std::borrow::Cow;

/// Escape for HTML text content and quoted attribute values.
pub fn html(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Serialise `value` as JSON that is safe inside a `<script>` element.
///
/// `<`, `>` and `&` become `\u` escapes so no `</script>` or `<!--` sequence
/// can appear, and the JS line terminators U+2028/U+2029 are escaped too.
/// Those characters can only occur inside JSON strings, where the `\u` forms
/// decode to the same value.
pub fn script_json(value: &serde_json::Value) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
