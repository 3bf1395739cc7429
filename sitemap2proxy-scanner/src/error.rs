use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to connect to the proxy: {0}")]
    ProxyConnection(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Sitemap parse error: {0}")]
    Parse(String),

    #[error("Fetching the sitemap returned status {0}")]
    SitemapStatus(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
