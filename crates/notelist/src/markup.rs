//! Turning item text into render-target markup.
//!
//! Item text is escaped by default. [`RenderMode::RawMarkup`] inserts the
//! text verbatim instead, so an item such as `<b>milk</b>` is interpreted as
//! markup by the render target. It exists for hosts that already rely on
//! that behaviour.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How item text is inserted into each rendered entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Escape markup-significant characters before insertion.
    #[default]
    Escaped,
    /// Insert item text as a raw markup fragment.
    RawMarkup,
}

/// Escape `&`, `<`, `>`, `"` and `'` for insertion into markup.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_markup(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Build the markup fragment for one list entry.
pub fn render_entry(item: &str, mode: RenderMode) -> String {
    match mode {
        RenderMode::Escaped => format!("<li>{}</li>", escape_markup(item)),
        RenderMode::RawMarkup => format!("<li>{item}</li>"),
    }
}
