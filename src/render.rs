use serde::Serialize;
use url::Url;

use crate::index::SearchRecord;
use crate::search::MIN_QUERY_LEN;
use crate::urlenc;

/// How much of a record's content a result entry shows.
pub const SNIPPET_LEN: usize = 60;

/// Query parameter carrying the search text across a navigation so the
/// destination page can resume the locate-and-scroll behavior.
pub const HIGHLIGHT_PARAM: &str = "highlight";

/// What selecting a result does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// The match is on the page the query was issued from: locate the text
    /// in place. The UI also clears the input and hides the panel.
    Locate { query: String },

    /// The match is elsewhere: navigate there, carrying the query.
    Navigate { href: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub title: String,
    pub snippet: String,
    pub action: Action,
}

pub fn snippet(content: &str) -> String {
    let head: String = content.chars().take(SNIPPET_LEN).collect();
    format!("{head}...")
}

/// Target address with the query attached as a highlight parameter.
pub fn highlight_href(url: &str, query: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!(
        "{url}{sep}{HIGHLIGHT_PARAM}={}",
        urlenc::encode_component(query)
    )
}

/// Read the highlight parameter back off an href, absolute or relative.
pub fn highlight_from_href(href: &str) -> Option<String> {
    let parsed = Url::parse(href)
        .or_else(|_| Url::parse("http://localhost/")?.join(href))
        .ok()?;

    parsed
        .query_pairs()
        .find(|(key, _)| key == HIGHLIGHT_PARAM)
        .map(|(_, value)| value.into_owned())
}

pub fn action_for(record: &SearchRecord, current_page: &str, query: &str) -> Action {
    if record.url == current_page {
        Action::Locate {
            query: query.to_string(),
        }
    } else {
        Action::Navigate {
            href: highlight_href(&record.url, query),
        }
    }
}

pub fn render_results(records: &[SearchRecord], current_page: &str, query: &str) -> Vec<ResultEntry> {
    records
        .iter()
        .map(|record| ResultEntry {
            title: record.title.clone(),
            snippet: snippet(&record.content),
            action: action_for(record, current_page, query),
        })
        .collect()
}

/// Visibility of one result panel. `Hidden` and `Showing` are the only
/// states; what the panel shows (results or the empty placeholder) is the
/// search outcome's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    Showing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The input changed. `index_ready` is false until a build has completed.
    QueryChanged { len: usize, index_ready: bool },
    OutsideClick,
    Escape,
    ResultChosen,
    Navigated,
    /// Pointer left the search widget; keeps showing while the input holds
    /// focus.
    PointerLeft { input_focused: bool },
}

impl PanelState {
    pub fn apply(self, event: PanelEvent) -> PanelState {
        match event {
            PanelEvent::QueryChanged { len, index_ready } => {
                if len >= MIN_QUERY_LEN && index_ready {
                    PanelState::Showing
                } else {
                    PanelState::Hidden
                }
            }
            PanelEvent::OutsideClick
            | PanelEvent::Escape
            | PanelEvent::ResultChosen
            | PanelEvent::Navigated => PanelState::Hidden,
            PanelEvent::PointerLeft { input_focused } => {
                if input_focused {
                    self
                } else {
                    PanelState::Hidden
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(title: &str, url: &str, content: &str) -> SearchRecord {
        SearchRecord {
            title: title.to_string(),
            url: url.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_snippet_truncates_at_sixty_chars() {
        let content = "a".repeat(100);
        let s = snippet(&content);
        assert_eq!(s.len(), SNIPPET_LEN + 3);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn test_snippet_is_char_safe() {
        let content = "ă".repeat(80);
        let s = snippet(&content);
        assert_eq!(s.chars().count(), SNIPPET_LEN + 3);
    }

    #[test]
    fn test_same_page_locates() {
        let record = make_record("Contact", "contact.html", "contact us today");
        let action = action_for(&record, "contact.html", "cont");
        assert_eq!(
            action,
            Action::Locate {
                query: "cont".to_string()
            }
        );
    }

    #[test]
    fn test_other_page_navigates_with_highlight() {
        let record = make_record("Contact", "contact.html", "contact us today");
        let action = action_for(&record, "index.html", "contact us");
        assert_eq!(
            action,
            Action::Navigate {
                href: "contact.html?highlight=contact%20us".to_string()
            }
        );
    }

    #[test]
    fn test_blog_record_href_appends_with_ampersand() {
        let record = make_record("My Post", "post.html?id=My%20Post", "my post body");
        let action = action_for(&record, "blog.html", "post");
        assert_eq!(
            action,
            Action::Navigate {
                href: "post.html?id=My%20Post&highlight=post".to_string()
            }
        );
    }

    #[test]
    fn test_highlight_roundtrip() {
        let href = highlight_href("despre.html", "echipa noastră");
        assert_eq!(highlight_from_href(&href).as_deref(), Some("echipa noastră"));
    }

    #[test]
    fn test_highlight_from_absolute_href() {
        let found = highlight_from_href("https://example.com/contact.html?highlight=cont");
        assert_eq!(found.as_deref(), Some("cont"));
    }

    #[test]
    fn test_highlight_missing_is_none() {
        assert_eq!(highlight_from_href("contact.html"), None);
        assert_eq!(highlight_from_href("contact.html?id=x"), None);
    }

    #[test]
    fn test_render_carries_title_and_snippet() {
        let records = vec![make_record("Contact", "contact.html", "contact us today")];
        let entries = render_results(&records, "index.html", "cont");
        assert_eq!(entries[0].title, "Contact");
        assert_eq!(entries[0].snippet, "contact us today...");
    }

    // --- panel state machine ---

    #[test]
    fn test_panel_shows_on_valid_query_with_ready_index() {
        let state = PanelState::Hidden.apply(PanelEvent::QueryChanged {
            len: 4,
            index_ready: true,
        });
        assert_eq!(state, PanelState::Showing);
    }

    #[test]
    fn test_panel_stays_hidden_for_short_query() {
        let state = PanelState::Hidden.apply(PanelEvent::QueryChanged {
            len: 2,
            index_ready: true,
        });
        assert_eq!(state, PanelState::Hidden);
    }

    #[test]
    fn test_panel_stays_hidden_before_index_ready() {
        let state = PanelState::Hidden.apply(PanelEvent::QueryChanged {
            len: 10,
            index_ready: false,
        });
        assert_eq!(state, PanelState::Hidden);
    }

    #[test]
    fn test_panel_hides_when_query_shortens() {
        let state = PanelState::Showing.apply(PanelEvent::QueryChanged {
            len: 2,
            index_ready: true,
        });
        assert_eq!(state, PanelState::Hidden);
    }

    #[test]
    fn test_panel_hides_on_dismissal_events() {
        for event in [
            PanelEvent::OutsideClick,
            PanelEvent::Escape,
            PanelEvent::ResultChosen,
            PanelEvent::Navigated,
        ] {
            assert_eq!(PanelState::Showing.apply(event), PanelState::Hidden);
        }
    }

    #[test]
    fn test_pointer_leave_respects_focus() {
        let showing = PanelState::Showing;
        assert_eq!(
            showing.apply(PanelEvent::PointerLeft { input_focused: true }),
            PanelState::Showing
        );
        assert_eq!(
            showing.apply(PanelEvent::PointerLeft {
                input_focused: false
            }),
            PanelState::Hidden
        );
    }
}
