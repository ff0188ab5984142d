//! HTML escaping for values echoed into response bodies.

use std::borrow::Cow;

/// Replace the HTML-significant characters `& < > " '` with entities.
///
/// Returns the input unchanged (and unallocated) when nothing needs escaping.
/// Escaping is not idempotent: `&` in an already escaped string is escaped again.
pub fn escape(input: &str) -> Cow<'_, str> {
    let Some(first) = input.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first]);
    for c in input[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
