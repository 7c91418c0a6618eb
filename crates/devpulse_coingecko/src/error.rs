use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoingeckoError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),
    #[error("Error decoding response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}
