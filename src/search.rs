//! Search orchestration: proxy ranking, sequential failover and enrichment.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::enrich::Enricher;
use crate::fetcher::{fetch_within, Connector, FetchedPage, PageFetcher};
use crate::fetcher_http::HttpConnector;
use crate::layout::Layout;
use crate::proxy::{normalize_all, ProxyChecker};
use crate::ranker::ProxyRanker;
use crate::{Result, ScoutConfig, SearchItem, SearchRequest};

/// Outcome of walking the ranked proxies.
pub enum Failover {
    /// A proxy answered the search request with 200.
    Adopted {
        proxy: String,
        fetcher: Arc<dyn PageFetcher>,
        page: FetchedPage,
    },
    /// Every proxy failed.
    Exhausted,
}

/// Scrapes one search results page through the fastest working proxy.
pub struct Scout {
    config: Arc<ScoutConfig>,
    connector: Arc<dyn Connector>,
    layout: Arc<Layout>,
    ranker: ProxyRanker,
    base: Url,
    endpoint: Url,
}

impl Scout {
    /// Creates a scout that talks HTTP through reqwest.
    pub fn new(config: ScoutConfig) -> Result<Self> {
        Self::with_connector(config, HttpConnector)
    }

    /// Creates a scout with a custom connector.
    pub fn with_connector<C: Connector + 'static>(
        config: ScoutConfig,
        connector: C,
    ) -> Result<Self> {
        let base = Url::parse(&config.base_url)?;
        let endpoint = Url::parse(&config.search_url)?;
        let connector: Arc<dyn Connector> = Arc::new(connector);
        let checker = ProxyChecker::new(
            Arc::clone(&connector),
            config.check_url.clone(),
            config.probe_profile(),
        );
        Ok(Self {
            base,
            endpoint,
            config: Arc::new(config),
            connector,
            layout: Arc::new(Layout::github()?),
            ranker: ProxyRanker::new(checker),
        })
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Runs a search. Only an invalid request is an error; an unusable proxy
    /// pool or a failed search page yields an empty list.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchItem>> {
        request.validate()?;

        debug!("Start proxy checking...");
        let proxies = normalize_all(&request.proxies);
        let ranked = self.ranker.rank(&proxies).await;
        if ranked.is_empty() {
            warn!("No working proxies available");
            return Ok(Vec::new());
        }

        let search_url = self.search_url(request);
        let (fetcher, page) = match self.failover(&ranked, &search_url).await {
            Failover::Adopted {
                proxy,
                fetcher,
                page,
            } => {
                info!("Request success with proxy {} to url {}", proxy, search_url);
                (fetcher, page)
            }
            Failover::Exhausted => {
                warn!("All {} proxies failed for {}", ranked.len(), search_url);
                return Ok(Vec::new());
            }
        };

        let urls = self.layout.item_urls(&page.body, &self.base);
        debug!("Found {} result links", urls.len());

        if !request.category.is_enriched() {
            return Ok(urls.into_iter().map(SearchItem::link).collect());
        }

        let enricher = Enricher::new(
            fetcher,
            Arc::clone(&self.layout),
            self.config.timeout_duration(),
        );
        Ok(enricher.enrich_all(urls).await)
    }

    /// Tries the search request through each proxy in rank order, stopping at
    /// the first 200. Later proxies are never contacted once one succeeds.
    pub async fn failover(&self, ranked: &[String], search_url: &str) -> Failover {
        let profile = self.config.content_profile();

        for proxy in ranked {
            debug!("Using proxy {}", proxy);
            let fetcher = match self.connector.connect(proxy, &profile) {
                Ok(fetcher) => fetcher,
                Err(e) => {
                    warn!("Request failed with proxy {}: {}", proxy, e);
                    continue;
                }
            };

            match fetch_within(fetcher.as_ref(), search_url, profile.timeout).await {
                Ok(page) if page.is_ok() => {
                    return Failover::Adopted {
                        proxy: proxy.clone(),
                        fetcher,
                        page,
                    };
                }
                Ok(page) => {
                    warn!("Request with proxy {} returned status {}", proxy, page.status);
                }
                Err(e) => {
                    warn!("Request failed with proxy {}: {}", proxy, e);
                }
            }
        }

        Failover::Exhausted
    }

    /// Search endpoint with the `q` and `type` parameters appended.
    fn search_url(&self, request: &SearchRequest) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", &request.query())
            .append_pair("type", request.category.as_str());
        url.into()
    }
}
