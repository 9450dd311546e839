//! Content extraction from fetched page bodies
//!
//! Three independent derivations from the same HTML payload: outbound links,
//! the page title, and a flattened rendering of the visible text. Link
//! extraction reports failures to the caller; title and text extraction are
//! fail-soft and yield empty results instead. Keep that asymmetry: a
//! malformed document never blocks link-discovery reporting, while the
//! fetch path still learns about the failure.

use scraper::node::Node;
use scraper::{Html, Selector};
use url::Url;

/// Magic bytes opening a PDF document
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts every anchor target from an HTML document, in document order
///
/// Each `href` on an `<a>` element is resolved against `base` into an
/// absolute URL. Values that fail to resolve are skipped silently; duplicate
/// targets are kept. No scheme filtering happens here: `mailto:` and
/// `javascript:` targets appear in the output and are filtered by the crawl
/// driver at enqueue time.
///
/// A selector/parse failure is returned as an error so the fetch path can
/// surface it.
pub fn extract_links(html: &str, base: &Url) -> Result<Vec<String>, String> {
    let document = Html::parse_document(html);

    let anchor_selector =
        Selector::parse("a[href]").map_err(|e| format!("invalid anchor selector: {:?}", e))?;

    let mut links = Vec::new();
    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            match base.join(href.trim()) {
                Ok(resolved) => links.push(resolved.to_string()),
                // Unresolvable href values are skipped silently
                Err(_) => continue,
            }
        }
    }

    Ok(links)
}

/// Extracts the text of the first `<title>` element
///
/// Returns `None` when no title element exists or its content is empty.
/// Never fails: malformed markup yields `None`.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extracts a whitespace-normalized rendering of the visible text
///
/// Walks the document body depth-first, skipping comment nodes and the
/// entire subtree of `script` and `style` elements. Every remaining text
/// node is trimmed and, when non-empty, appended with a single separating
/// space. Head-only content such as the title is not visible text.
///
/// Payloads opening with the PDF magic bytes are not HTML; they yield an
/// empty string immediately rather than being parsed as markup. Never fails.
pub fn extract_text(body: &[u8]) -> String {
    if body.starts_with(PDF_MAGIC) {
        return String::new();
    }

    let html = String::from_utf8_lossy(body);
    let document = Html::parse_document(&html);

    let mut buf = String::new();
    let body_root = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());
    match body_root {
        Some(element) => collect_text(*element, &mut buf),
        None => collect_text(document.tree.root(), &mut buf),
    }
    buf.trim_end().to_string()
}

/// Accumulates trimmed text nodes, pruning non-content subtrees
fn collect_text(node: ego_tree::NodeRef<'_, Node>, buf: &mut String) {
    match node.value() {
        Node::Comment(_) => return,
        Node::Element(element) if matches!(element.name(), "script" | "style") => return,
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                buf.push_str(trimmed);
                buf.push(' ');
            }
        }
        _ => {}
    }

    for child in node.children() {
        collect_text(child, buf);
    }
}
