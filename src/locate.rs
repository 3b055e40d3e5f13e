use scraper::{ElementRef, Html, Node};
use serde::Serialize;

use crate::extract;

/// How long the destination element stays highlighted once scrolled to.
pub const HIGHLIGHT_MS: u64 = 2000;

/// First place in a page's content region where the searched text occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextHit {
    /// Tag name of the element containing the text node; this is what a UI
    /// scrolls into view and highlights.
    pub element: String,

    /// The matching text node, verbatim.
    pub text: String,

    /// Byte offset of the match within the lowercased node text.
    pub offset: usize,
}

/// Walk the text nodes of the page's content region in document order and
/// return the first one containing `query`, case-insensitively. No match is
/// a silent `None`.
pub fn locate(html: &str, query: &str) -> Option<TextHit> {
    let document = Html::parse_document(html);
    let root = extract::content_root(&document)?;
    locate_in(root, query)
}

pub fn locate_in(root: ElementRef, query: &str) -> Option<TextHit> {
    let query_lower = query.to_lowercase();

    for node in root.descendants() {
        if let Node::Text(text) = node.value() {
            if let Some(offset) = text.to_lowercase().find(&query_lower) {
                let element = node
                    .parent()
                    .and_then(ElementRef::wrap)
                    .map(|el| el.value().name().to_string())
                    .unwrap_or_default();

                return Some(TextHit {
                    element,
                    text: text.to_string(),
                    offset,
                });
            }
        }
    }

    None
}
