pub mod error;
pub mod fetcher;
pub mod sitemap;
pub mod source;
pub mod tally;

pub use error::FetchError;
pub use fetcher::{CancelFlag, DEFAULT_USER_AGENT, ProxiedFetcher};
pub use sitemap::parse_sitemap;
pub use source::SitemapSource;
pub use tally::{RequestOutcome, ResponseTally};
