//! Output formatting utilities

use crate::domain::{render, Entry};

/// Format a list of entry titles for display
pub fn format_title_list(titles: &[String]) -> String {
    if titles.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for title in titles {
        output.push_str(title);
        output.push('\n');
    }
    output
}

/// Entry body as markdown, or rendered to HTML
pub fn format_body(body: &str, html: bool) -> String {
    if html {
        render(body)
    } else {
        body.to_string()
    }
}

/// Title line followed by the body
pub fn format_entry(entry: &Entry, html: bool) -> String {
    format!("{}\n\n{}", entry.title, format_body(&entry.body, html))
}
