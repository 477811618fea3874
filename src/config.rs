//! Scout configuration: target site endpoints, timeouts and connection limits.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fetcher::ClientProfile;
use crate::Result;

/// Configuration shared by the proxy ranker and the search orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Origin that relative item links are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Search endpoint receiving the `q` and `type` parameters.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Liveness endpoint probed through every candidate proxy.
    #[serde(default = "default_check_url")]
    pub check_url: String,
    /// Timeout in seconds for search and enrichment requests.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Timeout in seconds for a single liveness probe.
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout: u64,
    /// Maximum simultaneous connections held by one client.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://github.com".to_string()
}

fn default_search_url() -> String {
    "https://github.com/search".to_string()
}

fn default_check_url() -> String {
    "https://icanhazip.com/".to_string()
}

fn default_timeout() -> u64 {
    5
}

fn default_probe_timeout() -> u64 {
    3
}

fn default_max_connections() -> usize {
    20
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; a3s-scout/0.1)".to_string()
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_url: default_search_url(),
            check_url: default_check_url(),
            timeout: default_timeout(),
            probe_timeout: default_probe_timeout(),
            max_connections: default_max_connections(),
            user_agent: default_user_agent(),
        }
    }
}

impl ScoutConfig {
    /// Loads a configuration from a JSON file. Missing keys take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Sets the content request timeout in seconds.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = secs;
        self
    }

    /// Sets the liveness probe timeout in seconds.
    pub fn with_probe_timeout(mut self, secs: u64) -> Self {
        self.probe_timeout = secs;
        self
    }

    /// Sets the per-client connection ceiling.
    pub fn with_max_connections(mut self, max: usize) -> Self {
        self.max_connections = max;
        self
    }

    /// Points the scout at another site origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the search endpoint.
    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    /// Overrides the liveness endpoint.
    pub fn with_check_url(mut self, check_url: impl Into<String>) -> Self {
        self.check_url = check_url.into();
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn probe_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.probe_timeout)
    }

    /// Client settings for one liveness probe. Probes issue a single request.
    pub fn probe_profile(&self) -> ClientProfile {
        ClientProfile {
            timeout: self.probe_timeout_duration(),
            max_connections: 1,
            user_agent: self.user_agent.clone(),
        }
    }

    /// Client settings for the search request and the enrichment fan-out.
    pub fn content_profile(&self) -> ClientProfile {
        ClientProfile {
            timeout: self.timeout_duration(),
            max_connections: self.max_connections,
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ScoutConfig::default();
        assert_eq!(config.base_url, "https://github.com");
        assert_eq!(config.search_url, "https://github.com/search");
        assert_eq!(config.check_url, "https://icanhazip.com/");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.probe_timeout, 3);
        assert_eq!(config.max_connections, 20);
    }

    #[test]
    fn test_probe_timeout_shorter_than_content_timeout() {
        let config = ScoutConfig::default();
        assert!(config.probe_timeout_duration() < config.timeout_duration());
    }

    #[test]
    fn test_config_builders() {
        let config = ScoutConfig::default()
            .with_timeout(10)
            .with_probe_timeout(2)
            .with_max_connections(4)
            .with_base_url("http://localhost")
            .with_search_url("http://localhost/search")
            .with_check_url("http://localhost/ip");
        assert_eq!(config.timeout, 10);
        assert_eq!(config.probe_timeout, 2);
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.base_url, "http://localhost");
        assert_eq!(config.search_url, "http://localhost/search");
        assert_eq!(config.check_url, "http://localhost/ip");
    }

    #[test]
    fn test_config_profiles() {
        let config = ScoutConfig::default();
        let probe = config.probe_profile();
        assert_eq!(probe.timeout, Duration::from_secs(3));
        assert_eq!(probe.max_connections, 1);

        let content = config.content_profile();
        assert_eq!(content.timeout, Duration::from_secs(5));
        assert_eq!(content.max_connections, 20);
        assert_eq!(content.user_agent, config.user_agent);
    }

    #[test]
    fn test_config_deserialization_partial() {
        let json = r#"{"timeout": 8, "max_connections": 5}"#;
        let config: ScoutConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeout, 8);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.probe_timeout, 3); // default
        assert_eq!(config.base_url, "https://github.com"); // default
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_string(&ScoutConfig::default()).unwrap();
        assert!(json.contains("\"check_url\":\"https://icanhazip.com/\""));
    }
}
