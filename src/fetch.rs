use reqwest::StatusCode;
use std::{error::Error, thread::sleep, time::Duration};

use crate::config::FetchConfig;

const USER_AGENT_DEFAULT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:124.0) Gecko/20100101 Firefox/124.0";

/// Seam between the index sources and the network.
/// A failed fetch is `None`; the source decides what that means.
pub trait Fetcher: Send + Sync {
    fn fetch_text(&self, url: &str) -> Option<String>;
}

pub struct HttpFetcher {
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }
}

fn get_error(error: &reqwest::Error) -> String {
    match error.source() {
        Some(e) => match e.source() {
            Some(e) => e.to_string(),
            None => e.to_string(),
        },
        None => error.to_string(),
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Option<String> {
        let url_parsed = match reqwest::Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                log::warn!("{url}: invalid URL: {e}");
                return None;
            }
        };

        let host = url_parsed.host_str().unwrap_or_default();
        let path = url_parsed.path();
        let iden = format!("{host}{path}");

        let mut r = 0;
        loop {
            if r >= self.config.max_retries {
                return None;
            }

            if r > 0 {
                log::debug!("{iden}: retrying");
            }

            r += 1;

            let client = match reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT_DEFAULT)
                .danger_accept_invalid_certs(self.config.accept_invalid_certs)
                .danger_accept_invalid_hostnames(self.config.accept_invalid_certs)
                .timeout(Duration::from_secs(self.config.timeout_secs))
                .pool_idle_timeout(Duration::from_secs(10))
                .build()
            {
                Ok(c) => c,
                Err(err) => {
                    log::error!("{iden}: failed to build client: {err}");
                    return None;
                }
            };

            log::debug!("{iden}: requesting");

            let resp = match client.get(url).send() {
                Ok(resp) => resp,
                Err(err) => {
                    log::error!("{iden}: {err}: {:#?}", get_error(&err));
                    continue;
                }
            };

            let status = resp.status();

            if status == StatusCode::OK {
                // we might get OK, but no usable body
                match resp.text() {
                    Ok(text) => return Some(text),
                    Err(err) => {
                        log::debug!("{iden}: body read failed (timeout={})", err.is_timeout());
                        continue;
                    }
                }
            }

            log::debug!("{iden}: {:?}", status.to_string());

            if status == StatusCode::TOO_MANY_REQUESTS {
                sleep(Duration::from_secs(u64::from(r) * 4));
            }

            if status.is_client_error() {
                // no need to try again, it's over...
                return None;
            }
        }
    }
}
