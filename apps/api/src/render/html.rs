//! HTML projection of rendered blocks. The printable document produced here is
//! what the PDF exporter receives.

use std::fmt::Write;

use crate::render::Block;

const PRINT_STYLESHEET: &str = "\
@page { size: letter portrait; margin: 0.5in; }
body { font-family: sans-serif; font-size: 10.5pt; line-height: 1.4; color: #111; }
h1 { font-size: 22pt; color: #6b21a8; margin: 0 0 4pt; }
h2 { font-size: 13pt; color: #581c87; border-bottom: 2px solid #e9d5ff; margin: 14pt 0 6pt; }
p { margin: 0 0 4pt; }
p.contact { font-size: 8.5pt; color: #4b5563; }
p.summary { background: #faf5ff; border: 1px solid #f3e8ff; padding: 8pt; }
p.label { font-weight: 600; margin-top: 6pt; }
ul { margin: 0 0 6pt; padding-left: 16pt; }
a { color: #2563eb; }";

/// Renders blocks as an HTML fragment, one element per block.
pub fn render_fragment<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> String {
    let mut out = String::new();
    for block in blocks {
        // Writing into a String cannot fail.
        let _ = match block {
            Block::Title { text } => writeln!(out, "<h1>{}</h1>", escape(text)),
            Block::Heading { text, .. } => writeln!(out, "<h2>{}</h2>", escape(text)),
            Block::Contact { text } => writeln!(out, "<p class=\"contact\">{}</p>", escape(text)),
            Block::Summary { text } => writeln!(out, "<p class=\"summary\">{}</p>", escape(text)),
            Block::List { items } => {
                out.push_str("<ul>\n");
                for item in items {
                    let _ = writeln!(out, "<li>{}</li>", escape(item));
                }
                writeln!(out, "</ul>")
            }
            Block::Label { text } => writeln!(out, "<p class=\"label\">{}</p>", escape(text)),
            Block::Link { label, url } => writeln!(
                out,
                "<p><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></p>",
                escape(url),
                escape(label)
            ),
            Block::Paragraph { text } => writeln!(out, "<p>{}</p>", escape(text)),
        };
    }
    out
}

/// Wraps a fragment into a standalone, print-ready document.
pub fn render_document(title: &str, blocks: &[Block]) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n<main class=\"resume\">\n{}</main>\n</body>\n</html>\n",
        escape(title),
        PRINT_STYLESHEET,
        render_fragment(blocks)
    )
}

/// Escapes text for both element content and double-quoted attributes.
fn escape(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_all;

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape("<b>\"R&D\"</b> 'x'"),
            "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt; &#39;x&#39;"
        );
    }

    #[test]
    fn test_fragment_has_one_element_per_block() {
        let blocks = render_all("# Jo\nmail\n## Skills\n* Rust\n* Go\n**Label**");
        let html = render_fragment(&blocks);
        assert!(html.contains("<h1>Jo</h1>"));
        assert!(html.contains("<p class=\"contact\">mail</p>"));
        assert!(html.contains("<h2>Skills</h2>"));
        assert!(html.contains("<ul>\n<li>Rust</li>\n<li>Go</li>\n</ul>"));
        assert!(html.contains("<p class=\"label\">Label</p>"));
    }

    #[test]
    fn test_link_url_is_escaped() {
        let blocks = render_all("[Site](https://a.b/?q=\"x\"&y=1)");
        let html = render_fragment(&blocks);
        assert!(html.contains("href=\"https://a.b/?q=&quot;x&quot;&amp;y=1\""));
        assert!(html.contains(">Site</a>"));
    }

    #[test]
    fn test_document_wraps_fragment() {
        let blocks = render_all("# Jane <Dev>");
        let doc = render_document("Jane <Dev>", &blocks);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Jane &lt;Dev&gt;</title>"));
        assert!(doc.contains("size: letter portrait"));
        assert!(doc.contains("<h1>Jane &lt;Dev&gt;</h1>"));
    }
}
