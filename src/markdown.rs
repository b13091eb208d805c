//! Markdown Rendering
//!
//! Static documents (terms, privacy) are authored in Markdown and rendered
//! with pulldown-cmark, with two tweaks:
//! - Raw HTML is shown as text, never injected
//! - External links open in a new tab

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown into HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_HEADING_ATTRIBUTES
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // Links opened as raw HTML need a raw closing tag
    let mut raw_links: Vec<bool> = Vec::new();

    for event in parser {
        match event {
            Event::Html(html) | Event::InlineHtml(html) => events.push(Event::Text(html)),
            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                if is_external(&dest_url) {
                    let html = format!(
                        r#"<a href="{}" title="{}" target="_blank" rel="noopener noreferrer">"#,
                        escape_attr(&dest_url),
                        escape_attr(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    raw_links.push(true);
                } else {
                    events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                    raw_links.push(false);
                }
            }
            Event::End(TagEnd::Link) => {
                if raw_links.pop().unwrap_or(false) {
                    events.push(Event::Html(CowStr::Borrowed("</a>")));
                } else {
                    events.push(Event::End(TagEnd::Link));
                }
            }
            other => events.push(other),
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_tables() {
        let html = parse_markdown("# Terms\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h1>Terms</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_external_links_open_new_tab() {
        let html = parse_markdown("[docs](https://example.com) and [home](/)");
        assert!(html.contains(r#"<a href="https://example.com" title="" target="_blank" rel="noopener noreferrer">docs</a>"#));
        assert!(html.contains(r#"<a href="/">home</a>"#));
    }
}
