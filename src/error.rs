use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
