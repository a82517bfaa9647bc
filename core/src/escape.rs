//! Text escaping for the two contexts generated code lands in.
//!
//! # Design
//! `escape_javascript` makes caller text safe inside a single- or
//! double-quoted JavaScript string literal, using the classic helper rules:
//! backslashes and quotes are backslash-escaped, any line-break form
//! collapses to `\n`, and `</` becomes `<\/` so a fragment can never
//! terminate an enclosing `<script>` block. `html_escape` covers
//! double-quoted attribute values (`&`, `<`, `>`, `"`); generated attributes
//! always use double quotes, so `'` is left alone.
//!
//! Neither function is applied to caller-supplied code fragments (callbacks,
//! conditions, parameter expressions); those are emitted verbatim by
//! contract.

/// Escape `text` for embedding inside a JavaScript string literal.
pub fn escape_javascript(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '<' if chars.peek() == Some(&'/') => {
                chars.next();
                out.push_str("<\\/");
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text` for embedding inside a double-quoted HTML attribute value.
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
