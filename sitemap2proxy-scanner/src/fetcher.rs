use crate::error::{FetchError, Result};
use crate::source::ensure_http_scheme;
use crate::tally::{RequestOutcome, ResponseTally};
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;
use url::Url;

/// Default User-Agent, mimicking a well-known crawler bot.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

/// Fired before each request with `(index, url)`.
pub type RequestCallback = Arc<dyn Fn(usize, &str) + Send + Sync>;
/// Fired after each request with `(index, outcome)`.
pub type OutcomeCallback = Arc<dyn Fn(usize, &RequestOutcome) + Send + Sync>;

/// Cooperative cancellation flag, checked between requests.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Replays URLs through a forward proxy, one request in flight at a time.
///
/// TLS peer verification is disabled on purpose: the downstream
/// inspection proxy is expected to man-in-the-middle HTTPS targets.
/// Redirects are not followed, so 3xx codes land in the tally as-is.
pub struct ProxiedFetcher {
    client: Client,
    request_callback: Option<RequestCallback>,
    outcome_callback: Option<OutcomeCallback>,
}

impl ProxiedFetcher {
    /// Build a fetcher for the given proxy address. A bare `host[:port]`
    /// is normalized to an `http://` URI.
    pub fn new(proxy_addr: &str, user_agent: &str) -> Result<Self> {
        let proxy_url = ensure_http_scheme(proxy_addr);
        let proxy = reqwest::Proxy::all(&proxy_url)
            .map_err(|e| FetchError::InvalidUrl(format!("proxy {}: {}", proxy_url, e)))?;

        let client = Client::builder()
            .user_agent(user_agent)
            .proxy(proxy)
            .danger_accept_invalid_certs(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            request_callback: None,
            outcome_callback: None,
        })
    }

    pub fn with_request_callback(mut self, callback: RequestCallback) -> Self {
        self.request_callback = Some(callback);
        self
    }

    pub fn with_outcome_callback(mut self, callback: OutcomeCallback) -> Self {
        self.outcome_callback = Some(callback);
        self
    }

    /// Replay `urls` in order, recording every outcome into `tally`.
    ///
    /// A connect-level failure means the proxy itself is unreachable and
    /// aborts the run without recording the failed request; outcomes
    /// tallied so far are left intact for the caller to report. Every
    /// other per-request error is recorded as a failed outcome and the
    /// loop continues. Cancellation is honored between iterations.
    pub async fn fetch_all(
        &self,
        urls: &[String],
        tally: &mut ResponseTally,
        cancel: &CancelFlag,
    ) -> Result<()> {
        for (idx, url) in urls.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!("Cancelled after {} of {} requests", idx, urls.len());
                break;
            }

            if let Some(ref callback) = self.request_callback {
                callback(idx, url);
            }

            let outcome = match self.fetch_one(url).await {
                Ok(code) => RequestOutcome::Status(code),
                Err(e @ FetchError::ProxyConnection(_)) => return Err(e),
                Err(e) => RequestOutcome::Failed(e.to_string()),
            };

            tally.record(&outcome);

            if let Some(ref callback) = self.outcome_callback {
                callback(idx, &outcome);
            }
        }
        Ok(())
    }

    async fn fetch_one(&self, url: &str) -> Result<u16> {
        let target = Url::parse(url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("Requesting {} via proxy", target);
        let response = self.client.get(target).send().await.map_err(|e| {
            if e.is_connect() {
                FetchError::ProxyConnection(e)
            } else {
                FetchError::Http(e)
            }
        })?;

        Ok(response.status().as_u16())
    }
}
