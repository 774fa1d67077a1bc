//! Markdown rendering and HTML normalization.
//!
//! `render_markdown` turns Markdown into generic HTML; `normalize_html`
//! rewrites that HTML into the constrained vocabulary accepted by rich-text
//! paste targets (WordPress-style editors): sized spans instead of `<p>` and
//! headings, wrapped list items and table cells, `<hr />` breaks, scripts
//! stripped. Everything else passes through verbatim.

use ego_tree::NodeRef;
use pulldown_cmark::{html, Options, Parser};
use scraper::node::Element;
use scraper::{Html, Node};

/// The one inline style the paste target accepts.
const SIZED_SPAN_OPEN: &str = "<span style=\"font-size: 14pt;\">";

/// Marker prepended to flattened heading text.
const HEADING_MARKER: &str = "🔵 ";

/// Elements serialized without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Render Markdown to generic HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Normalize an HTML fragment into the constrained tag vocabulary.
///
/// Single synchronous pass over the parsed tree. Idempotent: running it on
/// already-normalized output changes nothing. Fails closed: if the parser
/// cannot handle the input, the original text is returned unmodified so
/// callers can display it as plain text.
pub fn normalize_html(input: &str) -> String {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let fragment = Html::parse_fragment(input);
        let mut out = String::with_capacity(input.len() + input.len() / 2);
        serialize_children(fragment.tree.root(), &mut out);
        out
    }));

    match result {
        Ok(out) => out,
        Err(_) => {
            tracing::warn!(
                input_len = input.len(),
                "HTML normalization failed, returning input unchanged"
            );
            input.to_string()
        }
    }
}

fn serialize_children(node: NodeRef<Node>, out: &mut String) {
    for child in node.children() {
        serialize_node(child, out);
    }
}

fn serialize_node(node: NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Document | Node::Fragment => serialize_children(node, out),
        Node::Doctype(_) | Node::ProcessingInstruction(_) => {}
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Text(text) => escape_text(text, out),
        Node::Element(element) => serialize_element(node, element, out),
    }
}

fn serialize_element(node: NodeRef<Node>, element: &Element, out: &mut String) {
    match element.name() {
        // The fragment parser wraps parsed content in a synthetic <html>.
        "html" => serialize_children(node, out),

        // Injected content defense.
        "script" => {}

        // Paragraphs become sized spans carrying the same inner content.
        "p" => {
            out.push_str(SIZED_SPAN_OPEN);
            serialize_children(node, out);
            out.push_str("</span>");
        }

        // Headings flatten to marked bold text; inline formatting discarded.
        "h2" | "h3" => {
            out.push_str(SIZED_SPAN_OPEN);
            out.push_str("<strong>");
            out.push_str(HEADING_MARKER);
            let mut text = String::new();
            collect_text(node, &mut text);
            escape_text(&text, out);
            out.push_str("</strong></span>");
        }

        "hr" => out.push_str("<hr />"),

        // List items and table cells get their content wrapped, unless the
        // first element child is already a styled span.
        "li" | "th" | "td" => {
            open_tag(element, out);
            if already_wrapped(node) {
                serialize_children(node, out);
            } else {
                out.push_str(SIZED_SPAN_OPEN);
                serialize_children(node, out);
                out.push_str("</span>");
            }
            close_tag(element, out);
        }

        // Everything else passes through with attributes intact.
        name => {
            open_tag(element, out);
            if !VOID_ELEMENTS.contains(&name) {
                serialize_children(node, out);
                close_tag(element, out);
            }
        }
    }
}

/// The wrap check only inspects the first element child; leading text nodes
/// are skipped, matching `firstElementChild` semantics.
fn already_wrapped(node: NodeRef<Node>) -> bool {
    node.children()
        .find_map(|child| match child.value() {
            Node::Element(element) => Some(element),
            _ => None,
        })
        .is_some_and(|element| element.name() == "span" && element.attr("style").is_some())
}

fn collect_text(node: NodeRef<Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == "script" => {}
            _ => collect_text(child, out),
        }
    }
}

fn open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_attr(value, out);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(markdown: &str) -> String {
        normalize_html(&render_markdown(markdown))
    }

    #[test]
    fn heading_and_paragraph_example() {
        let html = convert("## Title\n\nSome *text*.");

        assert!(html.contains("<span style=\"font-size: 14pt;\"><strong>🔵 Title</strong></span>"));
        assert!(html.contains("<span style=\"font-size: 14pt;\">Some <em>text</em>.</span>"));
        assert!(!html.contains("<h2"));
        assert!(!html.contains("<p>"));
    }

    #[test]
    fn headings_flatten_inline_formatting() {
        let html = normalize_html("<h3>Some <em>fancy</em> title</h3>");

        assert!(html.contains("<strong>🔵 Some fancy title</strong>"));
        assert!(!html.contains("<h3"));
        assert!(!html.contains("<em>"));
    }

    #[test]
    fn exactly_one_marked_span_per_heading() {
        let html = convert("## One\n\n## Two\n");

        assert_eq!(html.matches("🔵 One").count(), 1);
        assert_eq!(html.matches("🔵 Two").count(), 1);
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn paragraphs_preserve_inline_content() {
        let html = normalize_html("<p>keep <strong>bold</strong> and <em>italics</em></p>");

        assert_eq!(
            html,
            "<span style=\"font-size: 14pt;\">keep <strong>bold</strong> and <em>italics</em></span>"
        );
    }

    #[test]
    fn list_items_get_wrapped() {
        let html = convert("- first\n- second\n");

        assert!(html.contains("<li><span style=\"font-size: 14pt;\">first</span></li>"));
        assert!(html.contains("<li><span style=\"font-size: 14pt;\">second</span></li>"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let inputs = [
            "## Title\n\nSome *text*.\n\n- a\n- b\n",
            "| h1 | h2 |\n|---|---|\n| a | b |\n",
            "Paragraph one.\n\n---\n\nParagraph two.\n",
        ];

        for markdown in inputs {
            let once = convert(markdown);
            let twice = normalize_html(&once);
            assert_eq!(once, twice, "double normalization diverged for {markdown:?}");
        }
    }

    #[test]
    fn table_structure_is_preserved() {
        let html = render_markdown("| a | b |\n|---|---|\n| c | d |\n");
        let normalized = normalize_html(&html);

        for tag in ["<table", "<thead", "<tbody", "<tr", "<th", "<td"] {
            assert_eq!(
                html.matches(tag).count(),
                normalized.matches(tag).count(),
                "count changed for {tag}"
            );
        }
        assert!(normalized.contains("<td><span style=\"font-size: 14pt;\">c</span></td>"));
    }

    #[test]
    fn thematic_breaks_become_hr() {
        let html = convert("before\n\n---\n\nafter\n");

        assert!(html.contains("<hr />"));
    }

    #[test]
    fn scripts_are_stripped() {
        let html = normalize_html("<p>hi</p><script>alert('x')</script>");

        assert!(!html.contains("script"));
        assert!(!html.contains("alert"));
        assert!(html.contains("<span style=\"font-size: 14pt;\">hi</span>"));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(normalize_html("no tags here"), "no tags here");
    }

    #[test]
    fn unclosed_markup_does_not_panic() {
        let html = normalize_html("<ul><li>unclosed");

        assert!(html.contains("unclosed"));
    }

    #[test]
    fn text_is_escaped_on_output() {
        let html = normalize_html("<p>1 &lt; 2 &amp; 3 &gt; 2</p>");

        assert!(html.contains("1 &lt; 2 &amp; 3 &gt; 2"));
    }
}
