//! Minimal HTML building helpers. Every dynamic string goes through `escape`.

use std::fmt::Write;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<ul>` of escaped items; empty string for an empty list.
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = String::from("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape(item.as_ref()));
    }
    out.push_str("</ul>");
    out
}

/// Heading followed by a bullet list, omitted entirely when the list is empty.
pub fn titled_list<S: AsRef<str>>(title: &str, items: &[S]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!("<h3>{}</h3>{}", escape(title), bullet_list(items))
}

/// Confidence in `[0, 1]` as a whole percentage.
pub fn percent(value: f64) -> String {
    format!("{:.0}%", value.clamp(0.0, 1.0) * 100.0)
}
