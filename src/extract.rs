use ego_tree::NodeRef;
use scraper::{node::Element, ElementRef, Html, Node};

use crate::index::SearchRecord;

/// Class used for icon glyphs; their text content is ligature names, not prose.
const ICON_CLASS: &str = "material-symbols-outlined";

const NOISE_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "button"];

fn is_noise(element: &Element) -> bool {
    NOISE_TAGS.iter().any(|tag| *tag == element.name())
        || element.classes().any(|class| class == ICON_CLASS)
}

/// The region queries are answered from: `<main>` when the page has one,
/// the whole body otherwise.
pub fn content_root(document: &Html) -> Option<ElementRef> {
    let main_selector = scraper::Selector::parse("main").unwrap();
    let body_selector = scraper::Selector::parse("body").unwrap();

    document
        .select(&main_selector)
        .next()
        .or_else(|| document.select(&body_selector).next())
}

fn push_text(node: NodeRef<Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => {
            out.push_str(text);
            out.push(' ');
        }
        Node::Element(element) if is_noise(element) => return,
        _ => {}
    }

    for child in node.children() {
        push_text(child, out);
    }
}

/// Rendered text of an element subtree with navigational and decorative
/// elements removed.
pub fn visible_text(root: ElementRef) -> String {
    let mut out = String::new();
    push_text(*root, &mut out);
    out
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn page_title(document: &Html) -> Option<String> {
    let title_selector = scraper::Selector::parse("title").unwrap();

    document.select(&title_selector).next().and_then(|element| {
        let title = element.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            None
        } else {
            Some(title)
        }
    })
}

/// One index record for a fetched page. `page` is the relative path the page
/// was requested under; it doubles as the title fallback.
pub fn page_record(html: &str, page: &str) -> SearchRecord {
    let document = Html::parse_document(html);

    let content = match content_root(&document) {
        Some(root) => normalize_whitespace(&visible_text(root)),
        None => String::new(),
    };

    SearchRecord {
        title: page_title(&document).unwrap_or_else(|| page.to_string()),
        url: page.to_string(),
        content,
    }
}
