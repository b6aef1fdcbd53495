//! HTML backend for markdown rendering.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::state::escape_html;

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<hN id="...">` headings
/// - `<pre><code>` for code blocks
/// - `<blockquote>` for blockquotes
/// - `<img>` for images
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn heading(level: u8, id: &str, html: &str, out: &mut String) {
        write!(out, r#"<h{level} id="{}">{html}</h{level}>"#, escape_html(id)).unwrap();
    }

    fn code_block(lang: Option<&str>, content: &str, out: &mut String) {
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(content)
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
        }
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_escapes_id() {
        let mut out = String::new();
        HtmlBackend::heading(2, r#"a"b"#, "Title", &mut out);
        assert_eq!(out, r#"<h2 id="a&quot;b">Title</h2>"#);
    }

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        HtmlBackend::code_block(Some("vue"), "<template/>", &mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-vue">&lt;template/&gt;</code></pre>"#
        );
    }

    #[test]
    fn test_image_with_title() {
        let mut out = String::new();
        HtmlBackend::image("logo.png", "Logo", "The logo", &mut out);
        assert_eq!(
            out,
            r#"<img src="logo.png" title="The logo" alt="Logo">"#
        );
    }
}
