pub mod feed;
pub mod pages;

use std::thread;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::fetch::Fetcher;

/// One searchable unit: a site page or a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchRecord {
    pub title: String,

    /// Relative address the record navigates to. Blog records carry a
    /// synthetic `post.html?id=...` address.
    pub url: String,

    /// Whitespace-collapsed text used for matching.
    pub content: String,
}

/// Per-source outcome of a build. `attempted` counts pages configured or feed
/// rows seen; the difference to `indexed` is how many were dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    pub attempted: usize,
    pub indexed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub pages: SourceReport,
    pub feed: SourceReport,
}

/// The in-memory index for one site. Built once, immutable afterwards;
/// a caller holding a `SiteIndex` knows the build has completed.
#[derive(Debug, Clone, Serialize)]
pub struct SiteIndex {
    records: Vec<SearchRecord>,
    report: BuildReport,
}

impl SiteIndex {
    /// Index over already-known records, bypassing the fetch pass.
    pub fn from_records(records: Vec<SearchRecord>) -> Self {
        Self {
            records,
            report: BuildReport::default(),
        }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Build the index from both sources. The page pass and the feed pass run
/// concurrently; the result is pages first (configured order), then feed rows
/// (feed order). A failed source contributes nothing, never an error.
pub fn build(fetcher: &dyn Fetcher, config: &Config) -> SiteIndex {
    let (page_outcome, feed_outcome) = thread::scope(|scope| {
        let page_handle = scope.spawn(|| pages::index_pages(fetcher, config));
        let feed_handle = scope.spawn(|| feed::index_feed(fetcher, config));

        (
            page_handle.join().unwrap_or_default(),
            feed_handle.join().unwrap_or_default(),
        )
    });

    let (mut records, page_report) = page_outcome;
    let (mut feed_records, feed_report) = feed_outcome;
    records.append(&mut feed_records);

    log::info!(
        "index built: pages {}/{}, feed {}/{}",
        page_report.indexed,
        page_report.attempted,
        feed_report.indexed,
        feed_report.attempted
    );

    SiteIndex {
        records,
        report: BuildReport {
            pages: page_report,
            feed: feed_report,
        },
    }
}
