//! Repository enrichment: one secondary fetch per repository result.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{info, warn};

use crate::fetcher::{fetch_within, PageFetcher};
use crate::layout::Layout;
use crate::result::{RepositoryExtra, SearchItem};

/// Fetches repository pages through an already-adopted client context.
pub struct Enricher {
    fetcher: Arc<dyn PageFetcher>,
    layout: Arc<Layout>,
    timeout: Duration,
}

impl Enricher {
    pub fn new(fetcher: Arc<dyn PageFetcher>, layout: Arc<Layout>, timeout: Duration) -> Self {
        Self {
            fetcher,
            layout,
            timeout,
        }
    }

    /// Extra data for one repository, or `None` if its page is unobtainable.
    pub async fn fetch_extra(&self, url: &str) -> Option<RepositoryExtra> {
        info!("Getting extra data from repository {}", url);
        let page = match fetch_within(self.fetcher.as_ref(), url, self.timeout).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to get extra data {}: {}", url, e);
                return None;
            }
        };

        if !page.is_success() {
            warn!("Failed to get extra data {}: status {}", url, page.status);
            return None;
        }

        Some(self.layout.repository_extra(&page.body))
    }

    /// Enriches every URL concurrently. Output position `i` belongs to `urls[i]`.
    pub async fn enrich_all(&self, urls: Vec<String>) -> Vec<SearchItem> {
        let extras = join_all(urls.iter().map(|url| self.fetch_extra(url))).await;
        urls.into_iter()
            .zip(extras)
            .map(|(url, extra)| SearchItem::repository(url, extra))
            .collect()
    }
}
