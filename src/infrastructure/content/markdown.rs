//! Markdown rendering for long-form content.

use pulldown_cmark::{Event, Options, Parser, html as md_html};

/// Renders a Markdown body to HTML.
///
/// Raw HTML in the source is escaped rather than passed through, so the
/// output is safe to embed unescaped in templates.
pub fn render(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    md_html::push_html(&mut out, parser);
    out
}
