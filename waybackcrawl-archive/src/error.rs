use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CDX response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("CDX row {index} has no original-URL column")]
    MalformedRow { index: usize },

    #[error("Invalid CDX query URL: {0}")]
    InvalidQuery(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, FetchError>;
