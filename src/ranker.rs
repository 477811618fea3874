//! Concurrent proxy ranking.

use futures::future::join_all;
use tracing::info;

use crate::proxy::{ProxyChecker, ProxyHealth};

/// Probes a proxy pool and orders the survivors by latency.
#[derive(Clone)]
pub struct ProxyRanker {
    checker: ProxyChecker,
}

impl ProxyRanker {
    pub fn new(checker: ProxyChecker) -> Self {
        Self { checker }
    }

    /// Live measurements, fastest first.
    ///
    /// All probes run at once. The sort is stable, so proxies with equal
    /// latency keep their input order.
    pub async fn measure(&self, proxies: &[String]) -> Vec<ProxyHealth> {
        let probes = proxies.iter().map(|proxy| self.checker.check(proxy));
        let mut live: Vec<ProxyHealth> = join_all(probes).await.into_iter().flatten().collect();

        live.sort_by(|a, b| a.latency.cmp(&b.latency));

        info!(
            "Proxies checked: {}, working found: {}",
            proxies.len(),
            live.len()
        );
        live
    }

    /// Live proxies, fastest first, without their measurements.
    pub async fn rank(&self, proxies: &[String]) -> Vec<String> {
        self.measure(proxies)
            .await
            .into_iter()
            .map(|health| health.proxy)
            .collect()
    }
}
