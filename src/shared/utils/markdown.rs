use pulldown_cmark::{html, CowStr, Event, Options, Parser};

/// Render content markdown to HTML.
/// Raw HTML in the source is escaped rather than passed through.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_inline_markup() {
        let html = render_markdown("Built with **Rust** and `wasm`");
        assert_eq!(html.trim(), "<p>Built with <strong>Rust</strong> and <code>wasm</code></p>");
    }

    #[test]
    fn test_escapes_raw_html() {
        let html = render_markdown("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
