//! Search result types.
//!
//! Three output shapes stay distinct: an item without an `extra`
//! key (non-repository categories), an item whose `extra` is `null`
//! (enrichment failed), and an item with a populated `extra` object.

use serde::{Deserialize, Serialize};

/// Language usage values read from a repository page, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    #[serde(rename = "CSS")]
    pub css: Option<String>,
    #[serde(rename = "JavaScript")]
    pub javascript: Option<String>,
    #[serde(rename = "HTML")]
    pub html: Option<String>,
}

/// Supplementary repository data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryExtra {
    /// Owning account login.
    pub owner: Option<String>,
    pub language_stats: LanguageStats,
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum SearchItem {
    /// A repository result; `extra` is `None` when its page could not be fetched.
    Repository {
        url: String,
        // Required on input so `{"url"}` never reads back as a repository.
        #[serde(deserialize_with = "Option::deserialize")]
        extra: Option<RepositoryExtra>,
    },
    /// Any other result: URL only.
    Link { url: String },
}

impl SearchItem {
    /// Creates a URL-only result.
    pub fn link(url: impl Into<String>) -> Self {
        Self::Link { url: url.into() }
    }

    /// Creates a repository result with the given enrichment.
    pub fn repository(url: impl Into<String>, extra: Option<RepositoryExtra>) -> Self {
        Self::Repository {
            url: url.into(),
            extra,
        }
    }

    /// Result URL.
    pub fn url(&self) -> &str {
        match self {
            Self::Repository { url, .. } | Self::Link { url } => url,
        }
    }

    /// Enrichment data, if this is a repository result that has any.
    pub fn extra(&self) -> Option<&RepositoryExtra> {
        match self {
            Self::Repository { extra, .. } => extra.as_ref(),
            Self::Link { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_extra() -> RepositoryExtra {
        RepositoryExtra {
            owner: Some("atuldjadhav".to_string()),
            language_stats: LanguageStats {
                css: Some("52.0%".to_string()),
                javascript: Some("47.2%".to_string()),
                html: None,
            },
        }
    }

    #[test]
    fn test_link_serializes_without_extra_key() {
        let item = SearchItem::link("https://github.com/westurner/tools/wiki/index");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"url": "https://github.com/westurner/tools/wiki/index"}));
    }

    #[test]
    fn test_failed_repository_serializes_null_extra() {
        let item = SearchItem::repository("https://github.com/test/repo", None);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"url": "https://github.com/test/repo", "extra": null}));
    }

    #[test]
    fn test_repository_serializes_language_keys() {
        let item = SearchItem::repository("https://github.com/a/b", Some(sample_extra()));
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"url":"https://github.com/a/b","extra":{"owner":"atuldjadhav","language_stats":{"CSS":"52.0%","JavaScript":"47.2%","HTML":null}}}"#
        );
    }

    #[test]
    fn test_deserialize_keeps_shapes_apart() {
        let items: Vec<SearchItem> = serde_json::from_value(json!([
            {"url": "https://github.com/a/wiki"},
            {"url": "https://github.com/b/repo", "extra": null},
            {"url": "https://github.com/c/repo", "extra": {
                "owner": null,
                "language_stats": {"CSS": null, "JavaScript": null, "HTML": null}
            }},
        ]))
        .unwrap();

        assert!(matches!(items[0], SearchItem::Link { .. }));
        assert!(matches!(items[1], SearchItem::Repository { extra: None, .. }));
        assert_eq!(items[2].extra(), Some(&RepositoryExtra::default()));
    }

    #[test]
    fn test_deserialize_rejects_malformed_extra() {
        let result = serde_json::from_value::<SearchItem>(json!({
            "url": "https://github.com/a/b",
            "extra": {"bogus": 1}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result = serde_json::from_value::<SearchItem>(json!({
            "url": "https://github.com/a/wiki",
            "title": "Home"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_preserves_order_and_nulls() {
        let items = vec![
            SearchItem::repository("https://github.com/one/repo", Some(sample_extra())),
            SearchItem::repository("https://github.com/two/repo", None),
            SearchItem::link("https://github.com/three/wiki"),
        ];
        let json = serde_json::to_string(&items).unwrap();
        let back: Vec<SearchItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, items);
    }

    #[test]
    fn test_accessors() {
        let repo = SearchItem::repository("https://github.com/a/b", Some(sample_extra()));
        assert_eq!(repo.url(), "https://github.com/a/b");
        assert_eq!(repo.extra().and_then(|e| e.owner.as_deref()), Some("atuldjadhav"));

        let link = SearchItem::link("https://github.com/a/b/issues/1");
        assert_eq!(link.url(), "https://github.com/a/b/issues/1");
        assert!(link.extra().is_none());
    }
}
