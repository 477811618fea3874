//! # a3s-scout
//!
//! Proxied, failure-tolerant scraping of GitHub search results.
//!
//! A search runs in three stages:
//!
//! - Rank: every candidate proxy is probed concurrently against a liveness
//!   endpoint; survivors are ordered by latency.
//! - Failover: the search page is requested through the ranked proxies one at
//!   a time until one answers with 200.
//! - Enrich: for repository searches, every result page is fetched
//!   concurrently through the winning proxy to read its owner and language
//!   usage. A failed page only nulls that one item.
//!
//! ## Example
//!
//! ```rust,no_run
//! use a3s_scout::{Category, Scout, ScoutConfig, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let scout = Scout::new(ScoutConfig::default())?;
//!     let request = SearchRequest::new(["openstack", "nova", "css"], Category::Repositories)
//!         .with_proxies(["127.0.0.1:8080", "http://10.0.0.2:3128"]);
//!
//!     for item in scout.search(&request).await? {
//!         println!("{}", item.url());
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod enrich;
mod error;
mod layout;
mod ranker;
mod request;
mod result;
mod search;

pub mod extract;
pub mod fetcher;
pub mod fetcher_http;
pub mod proxy;

pub use config::ScoutConfig;
pub use enrich::Enricher;
pub use error::{Result, SearchError};
pub use layout::Layout;
pub use ranker::ProxyRanker;
pub use request::{Category, SearchRequest};
pub use result::{LanguageStats, RepositoryExtra, SearchItem};
pub use search::{Failover, Scout};
