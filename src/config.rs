use crate::errors::SitefindError;
use serde::{Deserialize, Serialize};
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: u32 = 5;
const DEFAULT_POST_PAGE: &str = "post.html";

/// Pages indexed when the config does not name its own set.
const DEFAULT_PAGES: [&str; 5] = [
    "index.html",
    "domenii-activitate.html",
    "despre.html",
    "blog.html",
    "contact.html",
];

/// Configuration for the HTTP fetch layer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How many times a request is attempted before the source is skipped
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            accept_invalid_certs: false,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_pages() -> Vec<String> {
    DEFAULT_PAGES.iter().map(|p| p.to_string()).collect()
}

fn default_post_page() -> String {
    DEFAULT_POST_PAGE.to_string()
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Origin the relative page paths are fetched against
    #[serde(default)]
    pub base_url: String,

    /// Relative paths of the site pages that feed the index
    #[serde(default = "default_pages")]
    pub pages: Vec<String>,

    /// CSV-published blog feed; empty disables the feed source
    #[serde(default)]
    pub feed_url: String,

    /// Page that renders a single blog post, targeted by synthetic record urls
    #[serde(default = "default_post_page")]
    pub post_page: String,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(skip_serializing, skip_deserializing)]
    path: String,
}

impl Config {
    fn validate(&self) -> Result<(), SitefindError> {
        if !self.base_url.is_empty() {
            Url::parse(&self.base_url)?;
        }

        if self.pages.is_empty() {
            return Err(SitefindError::InvalidConfig(
                "pages must name at least one page".to_string(),
            ));
        }

        if self.post_page.is_empty() {
            return Err(SitefindError::InvalidConfig(
                "post_page must not be empty".to_string(),
            ));
        }

        if self.fetch.timeout_secs == 0 {
            return Err(SitefindError::InvalidConfig(
                "fetch.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.fetch.max_retries == 0 {
            return Err(SitefindError::InvalidConfig(
                "fetch.max_retries must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn load_with(path: &str) -> Result<Self, SitefindError> {
        // create new if does not exist
        if std::fs::metadata(path).is_err() {
            log::info!("Creating new config at {path}");
            let defaults = Self {
                pages: default_pages(),
                post_page: default_post_page(),
                ..Self::default()
            };
            std::fs::write(path, serde_yml::to_string(&defaults)?)?;
        }

        let config_str = String::from_utf8_lossy(&std::fs::read(path)?).to_string();
        let mut config: Self = serde_yml::from_str(&config_str)?;
        config.path = path.to_string();

        config.validate()?;

        // resave in case config version needs an upgrade
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<(), SitefindError> {
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;
        Ok(())
    }

    pub fn base(&self) -> Result<Url, SitefindError> {
        if self.base_url.is_empty() {
            return Err(SitefindError::InvalidConfig(
                "base_url is not set".to_string(),
            ));
        }
        Ok(Url::parse(&self.base_url)?)
    }

    /// Absolute fetch url for a relative page path.
    pub fn page_url(&self, page: &str) -> Result<String, SitefindError> {
        Ok(self.base()?.join(page)?.to_string())
    }
}
