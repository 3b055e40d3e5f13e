use anyhow::bail;
use clap::Parser;

mod cli;
mod config;
mod errors;
mod extract;
mod fetch;
mod index;
mod locate;
mod render;
mod search;
mod urlenc;

use config::Config;
use fetch::{Fetcher, HttpFetcher};
use search::SearchOutcome;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();

    let config = Config::load_with(&args.config)?;

    match args.command {
        cli::Command::Index { report } => {
            let fetcher = HttpFetcher::new(config.fetch.clone());
            let site_index = index::build(&fetcher, &config);

            if report {
                println!("{}", serde_json::to_string_pretty(site_index.report())?);
            } else {
                println!("{}", serde_json::to_string_pretty(&site_index)?);
            }
            Ok(())
        }

        cli::Command::Search { query, page, count } => {
            let fetcher = HttpFetcher::new(config.fetch.clone());
            let site_index = index::build(&fetcher, &config);

            match search::search(&site_index, &query) {
                SearchOutcome::TooShort => {
                    println!(
                        "query too short, minimum is {} characters",
                        search::MIN_QUERY_LEN
                    );
                }
                SearchOutcome::Empty => {
                    if count {
                        println!("0 results found");
                    } else {
                        println!("{}", serde_json::to_string_pretty(&Vec::<render::ResultEntry>::new())?);
                    }
                }
                SearchOutcome::Results(records) => {
                    if count {
                        println!("{} results found", records.len());
                    } else {
                        let entries = render::render_results(&records, &page, &query);
                        println!("{}", serde_json::to_string_pretty(&entries)?);
                    }
                }
            }
            Ok(())
        }

        cli::Command::Locate {
            query,
            page,
            file,
            from_href,
        } => {
            let query = match query.or_else(|| {
                from_href
                    .as_deref()
                    .and_then(render::highlight_from_href)
            }) {
                Some(query) => query,
                None => bail!("no search text: pass a query or --from-href with a highlight parameter"),
            };

            let html = match (file, page) {
                (Some(file), _) => std::fs::read_to_string(&file)?,
                (None, Some(page)) => {
                    let url = config.page_url(&page)?;
                    let fetcher = HttpFetcher::new(config.fetch.clone());
                    match fetcher.fetch_text(&url) {
                        Some(html) => html,
                        None => {
                            // fail-open: an unreachable page simply has no match
                            log::warn!("page={page} fetch failed");
                            String::new()
                        }
                    }
                }
                (None, None) => bail!("pass either --page or --file"),
            };

            match locate::locate(&html, &query) {
                Some(hit) => {
                    log::debug!(
                        "match in <{}>, highlight for {}ms",
                        hit.element,
                        locate::HIGHLIGHT_MS
                    );
                    println!("{}", serde_json::to_string_pretty(&hit)?);
                }
                None => println!("no match"),
            }
            Ok(())
        }
    }
}
