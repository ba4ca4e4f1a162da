use folio_core::ContentBlock;

/// Escapes text for safe insertion as HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Selector for the tab button of `topic` inside `container`.
///
/// The topic is quoted as a CSS string, so keys with quotes or backslashes
/// still select their own button and nothing else.
pub fn tab_selector(container: &str, topic: &str) -> String {
    let mut out = String::with_capacity(container.len() + topic.len() + 16);
    out.push_str(container);
    out.push_str(" [data-topic=\"");
    for ch in topic.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c if c.is_control() => out.push_str(&format!("\\{:x} ", c as u32)),
            c => out.push(c),
        }
    }
    out.push_str("\"]");
    out
}

/// Inner HTML for the panel body. An empty block renders as an empty string.
pub fn content_html(block: &ContentBlock) -> String {
    if block.is_empty() {
        return String::new();
    }
    let mut html = String::new();
    if !block.title.is_empty() {
        html.push_str("<h3>");
        html.push_str(&escape_html(&block.title));
        html.push_str("</h3>");
    }
    for section in &block.sections {
        html.push_str("<section><h4>");
        html.push_str(&escape_html(&section.heading));
        html.push_str("</h4>");
        for meta in &section.meta {
            html.push_str("<p class=\"meta\">");
            html.push_str(&escape_html(meta));
            html.push_str("</p>");
        }
        if !section.items.is_empty() {
            html.push_str("<ul>");
            for item in &section.items {
                html.push_str("<li>");
                html.push_str(&escape_html(item));
                html.push_str("</li>");
            }
            html.push_str("</ul>");
        }
        html.push_str("</section>");
    }
    html
}
