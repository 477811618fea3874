//! Integration tests using real HTTP requests.
//!
//! These tests are marked with `#[ignore]` by default because they require
//! network access and a working proxy, and may be slow or flaky.
//!
//! Run with: `SCOUT_PROXY=host:port cargo test --test integration -- --ignored`

use std::sync::Arc;

use a3s_scout::fetcher_http::HttpConnector;
use a3s_scout::proxy::{normalize, ProxyChecker};
use a3s_scout::{Category, ProxyRanker, Scout, ScoutConfig, SearchItem, SearchRequest};

fn proxy_from_env() -> Option<String> {
    std::env::var("SCOUT_PROXY").ok()
}

#[tokio::test]
#[ignore]
async fn test_live_proxy_probe() {
    let Some(proxy) = proxy_from_env() else {
        println!("SCOUT_PROXY not set, skipping");
        return;
    };
    let config = ScoutConfig::default();
    let checker = ProxyChecker::new(
        Arc::new(HttpConnector),
        config.check_url.clone(),
        config.probe_profile(),
    );

    match checker.check(&normalize(&proxy)).await {
        Some(health) => println!("{} answered in {:.2}s", health.proxy, health.latency_secs()),
        None => println!("{} is not working", proxy),
    }
}

#[tokio::test]
#[ignore]
async fn test_live_rank_unroutable_pool() {
    let config = ScoutConfig::default().with_probe_timeout(1);
    let checker = ProxyChecker::new(
        Arc::new(HttpConnector),
        config.check_url.clone(),
        config.probe_profile(),
    );
    let ranker = ProxyRanker::new(checker);

    // TEST-NET-1 addresses never route.
    let pool = vec!["http://192.0.2.1:8080".to_string(), "http://192.0.2.2:3128".to_string()];
    assert!(ranker.rank(&pool).await.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_live_repository_search() {
    let Some(proxy) = proxy_from_env() else {
        println!("SCOUT_PROXY not set, skipping");
        return;
    };
    let scout = Scout::new(ScoutConfig::default()).unwrap();
    let request = SearchRequest::new(["openstack", "nova", "css"], Category::Repositories)
        .with_proxies([proxy]);

    let items = scout.search(&request).await.unwrap();
    println!("Repository search returned {} results", items.len());
    for item in items.iter().take(3) {
        println!("  {} -> {:?}", item.url(), item.extra());
    }
    assert!(items.iter().all(|item| matches!(item, SearchItem::Repository { .. })));
}

#[tokio::test]
#[ignore]
async fn test_live_wiki_search() {
    let Some(proxy) = proxy_from_env() else {
        println!("SCOUT_PROXY not set, skipping");
        return;
    };
    let scout = Scout::new(ScoutConfig::default()).unwrap();
    let request = SearchRequest::new(["openstack", "nova", "css"], Category::Wikis)
        .with_proxies([proxy]);

    let items = scout.search(&request).await.unwrap();
    println!("Wiki search returned {} results", items.len());
    assert!(items.iter().all(|item| item.url().starts_with("https://github.com/")));
}
