#[derive(thiserror::Error, Debug)]
pub enum SitefindError {
    #[error("config error: {0}")]
    InvalidConfig(String),

    #[error("yaml error: {0:?}")]
    Yaml(#[from] serde_yml::Error),

    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),

    #[error("invalid url: {0:?}")]
    Url(#[from] url::ParseError),
}
