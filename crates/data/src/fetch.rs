use crate::load_catalog_from_str;
use dilemmo_core::ParseReport;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Every variant is a retryable "load failed" state: the fetch is fire-once
/// at startup and the caller decides whether to try again.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("feed returned status {0}")]
    Status(u16),
    #[error("feed could not be decoded: {0}")]
    Decode(String),
}

/// One-shot client for the remote feed. The timeout is the hardening the
/// original design lacked: a dead feed must surface as a failure, not as an
/// endless loading state.
#[derive(Debug, Clone)]
pub struct FeedClient {
    url: String,
    timeout: Duration,
}

impl FeedClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn fetch(&self) -> Result<ParseReport, FetchError> {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let response = agent.get(&self.url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => FetchError::Status(code),
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        })?;
        let raw = response
            .into_string()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        load_catalog_from_str(&raw).map_err(|err| FetchError::Decode(err.to_string()))
    }
}
