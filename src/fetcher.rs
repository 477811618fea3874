//! Page fetcher abstraction for retrieving HTML through a proxy.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use crate::{Result, SearchError};

/// A fetched page: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Exactly 200 OK.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Settings for one client context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientProfile {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum simultaneous in-flight requests on this client.
    pub max_connections: usize,
    pub user_agent: String,
}

/// Trait for fetching a URL through an established client context.
///
/// Transport failures are errors; any HTTP status, including 4xx and 5xx,
/// is a successful fetch carried in [`FetchedPage::status`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// Fetches `url`, giving up with [`SearchError::Timeout`] once `budget` elapses.
pub async fn fetch_within(
    fetcher: &dyn PageFetcher,
    url: &str,
    budget: Duration,
) -> Result<FetchedPage> {
    timeout(budget, fetcher.fetch(url))
        .await
        .map_err(|_| SearchError::Timeout)?
}

/// Trait for opening a client context routed through one proxy.
///
/// Each call yields a fresh context; it is released once every handle is dropped.
pub trait Connector: Send + Sync {
    fn connect(&self, proxy: &str, profile: &ClientProfile) -> Result<Arc<dyn PageFetcher>>;
}

impl<C: Connector + ?Sized> Connector for Arc<C> {
    fn connect(&self, proxy: &str, profile: &ClientProfile) -> Result<Arc<dyn PageFetcher>> {
        (**self).connect(proxy, profile)
    }
}
