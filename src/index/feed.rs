use crate::config::Config;
use crate::fetch::Fetcher;
use crate::index::{SearchRecord, SourceReport};
use crate::urlenc;

/// Columns of the published feed. Anything between title and body is
/// publishing metadata the index does not use.
const COL_TITLE: usize = 0;
const COL_BODY: usize = 3;

/// Fetch the blog feed and turn each row into a record. The whole source is
/// skipped when the feed is unconfigured or unreachable.
pub fn index_feed(fetcher: &dyn Fetcher, config: &Config) -> (Vec<SearchRecord>, SourceReport) {
    if config.feed_url.is_empty() {
        log::debug!("feed: not configured, skipping");
        return (Vec::new(), SourceReport::default());
    }

    let body = match fetcher.fetch_text(&config.feed_url) {
        Some(body) => body,
        None => {
            log::warn!("feed: fetch failed, skipping source");
            return (Vec::new(), SourceReport::default());
        }
    };

    parse_feed(&body, &config.post_page)
}

/// Parse CSV feed text. The header row is skipped; rows may have ragged
/// lengths. A row without a title is dropped.
pub fn parse_feed(body: &str, post_page: &str) -> (Vec<SearchRecord>, SourceReport) {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut attempted = 0;
    let mut records = Vec::new();

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                log::warn!("feed: dropping malformed row: {err}");
                attempted += 1;
                continue;
            }
        };

        attempted += 1;

        let title = row.get(COL_TITLE).unwrap_or_default();
        if title.is_empty() {
            log::debug!("feed: dropping row without title");
            continue;
        }

        let post_body = row.get(COL_BODY).unwrap_or_default();

        records.push(SearchRecord {
            title: title.to_string(),
            url: format!("{post_page}?id={}", urlenc::encode_component(title.trim())),
            content: format!("{title} {post_body}").trim_end().to_lowercase(),
        });
    }

    let indexed = records.len();
    (records, SourceReport { attempted, indexed })
}
