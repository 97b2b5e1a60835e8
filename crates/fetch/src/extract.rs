// ABOUTME: Text extraction from parsed HTML documents for hedge analysis and audits.
// ABOUTME: Walks the DOM skipping non-content tags and joins trimmed text nodes with spaces.

use scraper::{ElementRef, Html, Node};

/// Tags dropped before extracting the main readable text.
pub const MAIN_TEXT_EXCLUDED: &[&str] = &["script", "style", "noscript", "nav", "footer", "header"];

/// Tags dropped before extracting all visible text.
pub const VISIBLE_TEXT_EXCLUDED: &[&str] = &["script", "style", "noscript"];

/// Containers tried in order when looking for the main content.
const MAIN_CONTAINERS: &[&str] = &["main", "article", "body"];

/// Main readable text: the first `<main>`, else `<article>`, else `<body>`,
/// else the whole document, with navigation chrome and scripts removed.
pub fn main_text(doc: &Html) -> String {
    let root = MAIN_CONTAINERS
        .iter()
        .find_map(|tag| first_element(doc, tag))
        .unwrap_or_else(|| doc.root_element());
    text_of(root, MAIN_TEXT_EXCLUDED)
}

/// All visible text in the document, excluding scripts and styles.
pub fn visible_text(doc: &Html) -> String {
    text_of(doc.root_element(), VISIBLE_TEXT_EXCLUDED)
}

/// Number of elements named `tag` in the document.
pub fn count_tags(doc: &Html, tag: &str) -> usize {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name().eq_ignore_ascii_case(tag))
        .count()
}

fn first_element<'a>(doc: &'a Html, tag: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name().eq_ignore_ascii_case(tag) && !inside_excluded(el))
}

fn inside_excluded(el: &ElementRef) -> bool {
    el.ancestors().any(|node| match node.value() {
        Node::Element(parent) => MAIN_TEXT_EXCLUDED.contains(&parent.name()),
        _ => false,
    })
}

fn text_of(root: ElementRef, excluded: &[&str]) -> String {
    let mut parts = Vec::new();
    push_text(*root, excluded, &mut parts);
    parts.join(" ")
}

fn push_text<'a>(node: ego_tree::NodeRef<'a, Node>, excluded: &[&str], out: &mut Vec<&'a str>) {
    match node.value() {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed);
            }
        }
        Node::Element(el) if excluded.contains(&el.name()) => {}
        Node::Element(_) | Node::Document | Node::Fragment => {
            for child in node.children() {
                push_text(child, excluded, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Title</title><style>p { color: red }</style></head>
<body>
  <header><h1>Site header</h1></header>
  <nav>Home | About</nav>
  <article>
    <p>It might   rain.</p>
    <script>var perhaps = 1;</script>
    <noscript>Enable JS</noscript>
    <p>Bring a <b>coat</b>.</p>
  </article>
  <footer>Copyright</footer>
</body>
</html>"#;

    #[test]
    fn main_text_prefers_article_over_body() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(main_text(&doc), "It might   rain. Bring a coat .");
    }

    #[test]
    fn main_text_prefers_main() {
        let doc = Html::parse_document(
            "<body><article>Article</article><main><p>Main one</p></main></body>",
        );
        assert_eq!(main_text(&doc), "Main one");
    }

    #[test]
    fn main_text_falls_back_to_body_without_chrome() {
        let doc = Html::parse_document(
            "<body><header>Top</header><p>Just text</p><footer>Bottom</footer></body>",
        );
        assert_eq!(main_text(&doc), "Just text");
    }

    #[test]
    fn main_text_ignores_containers_inside_chrome() {
        let doc = Html::parse_document(
            "<body><header><article>Teaser</article></header><p>Body copy</p></body>",
        );
        assert_eq!(main_text(&doc), "Body copy");
    }

    #[test]
    fn visible_text_keeps_chrome() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(
            visible_text(&doc),
            "Title Site header Home | About It might   rain. Bring a coat . Copyright"
        );
    }

    #[test]
    fn counts_script_tags() {
        let doc = Html::parse_document(
            "<html><head><script src=a.js></script></head>\
             <body><script>1</script><SCRIPT>2</SCRIPT></body></html>",
        );
        assert_eq!(count_tags(&doc, "script"), 3);
        assert_eq!(count_tags(&doc, "iframe"), 0);
    }

    #[test]
    fn empty_document_has_no_text() {
        let doc = Html::parse_document("");
        assert_eq!(main_text(&doc), "");
        assert_eq!(visible_text(&doc), "");
    }
}
