//! Proxy normalization and liveness probing.
//!
//! Candidates arrive as `host:port` or `scheme://host:port`. Every candidate
//! is probed through its own short-lived client against a fixed echo endpoint;
//! a probe either yields a latency measurement or nothing at all. Dead proxies
//! are the common case in public pools, so a failed probe is never an error.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};

use crate::fetcher::{fetch_within, ClientProfile, Connector};

const HTTP_SCHEME: &str = "http://";

/// Prefixes `http://` unless the endpoint already carries it.
pub fn normalize(raw: &str) -> String {
    if raw.starts_with(HTTP_SCHEME) {
        raw.to_string()
    } else {
        format!("{}{}", HTTP_SCHEME, raw)
    }
}

/// Normalizes a whole pool, one output per input, order kept.
pub fn normalize_all<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter().map(|p| normalize(p.as_ref())).collect()
}

/// A successful liveness measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyHealth {
    pub proxy: String,
    pub latency: Duration,
}

impl ProxyHealth {
    /// Latency in seconds.
    pub fn latency_secs(&self) -> f64 {
        self.latency.as_secs_f64()
    }
}

/// Probes single proxies against a liveness endpoint.
#[derive(Clone)]
pub struct ProxyChecker {
    connector: Arc<dyn Connector>,
    check_url: String,
    profile: ClientProfile,
}

impl ProxyChecker {
    pub fn new(
        connector: Arc<dyn Connector>,
        check_url: impl Into<String>,
        profile: ClientProfile,
    ) -> Self {
        Self {
            connector,
            check_url: check_url.into(),
            profile,
        }
    }

    /// Probe time budget.
    pub fn timeout(&self) -> Duration {
        self.profile.timeout
    }

    /// Measures one proxy. `None` on transport error, non-200 status or timeout.
    pub async fn check(&self, proxy: &str) -> Option<ProxyHealth> {
        let start = Instant::now();

        let fetcher = match self.connector.connect(proxy, &self.profile) {
            Ok(fetcher) => fetcher,
            Err(e) => {
                debug!("Proxy {} is not working: {}", proxy, e);
                return None;
            }
        };

        match fetch_within(fetcher.as_ref(), &self.check_url, self.profile.timeout).await {
            Ok(page) if page.is_ok() => {
                let latency = start.elapsed();
                info!(
                    "Proxy {} is working with latency {:.2} seconds",
                    proxy,
                    latency.as_secs_f64()
                );
                Some(ProxyHealth {
                    proxy: proxy.to_string(),
                    latency,
                })
            }
            Ok(page) => {
                debug!("Proxy {} is not working: status {}", proxy, page.status);
                None
            }
            Err(e) => {
                debug!("Proxy {} is not working: {}", proxy, e);
                None
            }
        }
    }
}
