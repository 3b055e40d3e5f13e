use crate::index::{SearchRecord, SiteIndex};

/// Queries below this length match nothing; single characters would light up
/// the whole index.
pub const MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query under the length threshold. The caller keeps its results hidden.
    TooShort,

    /// Valid query, nothing matched. A normal state, not an error.
    Empty,

    /// Matches in index order.
    Results(Vec<SearchRecord>),
}

fn record_matches(record: &SearchRecord, query_lower: &str) -> bool {
    record.title.to_lowercase().contains(query_lower)
        || record.content.to_lowercase().contains(query_lower)
}

/// Case-insensitive substring search over title and content.
/// Matches preserve insertion order; there is no ranking.
pub fn search(index: &SiteIndex, query: &str) -> SearchOutcome {
    if query.chars().count() < MIN_QUERY_LEN {
        return SearchOutcome::TooShort;
    }

    let query_lower = query.to_lowercase();

    let results: Vec<SearchRecord> = index
        .records()
        .iter()
        .filter(|record| record_matches(record, &query_lower))
        .cloned()
        .collect();

    if results.is_empty() {
        SearchOutcome::Empty
    } else {
        SearchOutcome::Results(results)
    }
}
