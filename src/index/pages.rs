use std::thread;

use crate::config::Config;
use crate::extract;
use crate::fetch::Fetcher;
use crate::index::{SearchRecord, SourceReport};

/// Fetch and extract every configured page, in parallel. Records come back in
/// configured page order regardless of which fetch finishes first. A page
/// whose fetch fails is skipped.
pub fn index_pages(fetcher: &dyn Fetcher, config: &Config) -> (Vec<SearchRecord>, SourceReport) {
    let results: Vec<Option<SearchRecord>> = thread::scope(|scope| {
        let handles: Vec<_> = config
            .pages
            .iter()
            .map(|page| {
                scope.spawn(move || {
                    let url = match config.page_url(page) {
                        Ok(url) => url,
                        Err(err) => {
                            log::warn!("page={page} outcome=skip err={err}");
                            return None;
                        }
                    };

                    let html = match fetcher.fetch_text(&url) {
                        Some(html) => html,
                        None => {
                            log::warn!("page={page} outcome=skip (fetch failed)");
                            return None;
                        }
                    };

                    let record = extract::page_record(&html, page);
                    log::debug!("page={page} outcome=indexed content_len={}", record.content.len());
                    Some(record)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().ok().flatten())
            .collect()
    });

    let attempted = results.len();
    let records: Vec<SearchRecord> = results.into_iter().flatten().collect();
    let indexed = records.len();

    (records, SourceReport { attempted, indexed })
}
