//! HTTP-based page fetcher using reqwest.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Proxy};
use tokio::sync::Semaphore;

use crate::fetcher::{ClientProfile, Connector, FetchedPage, PageFetcher};
use crate::{Result, SearchError};

/// A page fetcher that routes plain HTTP requests through one proxy.
///
/// The semaphore caps how many requests the client has in flight at once.
pub struct HttpFetcher {
    client: Client,
    permits: Semaphore,
}

impl HttpFetcher {
    /// Creates a fetcher whose every request goes through `proxy`.
    pub fn new(proxy: &str, profile: &ClientProfile) -> Result<Self> {
        let proxy = Proxy::all(proxy).map_err(|_| SearchError::Proxy(proxy.to_string()))?;
        let client = Client::builder()
            .user_agent(&profile.user_agent)
            .timeout(profile.timeout)
            .pool_max_idle_per_host(profile.max_connections)
            .proxy(proxy)
            .build()
            .map_err(|e| SearchError::Other(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, profile.max_connections))
    }

    /// Creates an `HttpFetcher` with a custom reqwest client.
    pub fn with_client(client: Client, max_connections: usize) -> Self {
        Self {
            client,
            permits: Semaphore::new(max_connections.max(1)),
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| SearchError::Other(e.to_string()))?;
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedPage { status, body })
    }
}

/// Opens reqwest-backed client contexts.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl Connector for HttpConnector {
    fn connect(&self, proxy: &str, profile: &ClientProfile) -> Result<Arc<dyn PageFetcher>> {
        Ok(Arc::new(HttpFetcher::new(proxy, profile)?))
    }
}
