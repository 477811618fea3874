//! Search request representation.

use serde::{Deserialize, Serialize};

use crate::{Result, SearchError};

/// Result category requested from the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Repositories,
    Issues,
    Wikis,
}

impl Category {
    /// Literal sent as the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Repositories => "Repositories",
            Category::Issues => "Issues",
            Category::Wikis => "Wikis",
        }
    }

    /// Whether items of this category are enriched from their own page.
    pub fn is_enriched(&self) -> bool {
        matches!(self, Category::Repositories)
    }
}

/// A search request as read from the input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search terms, joined with spaces to form the query.
    pub keywords: Vec<String>,
    /// Result category.
    #[serde(rename = "type")]
    pub category: Category,
    /// Raw proxy endpoints, `host:port` or `scheme://host:port`.
    pub proxies: Vec<String>,
}

impl SearchRequest {
    /// Creates a new request with no proxies.
    pub fn new<I, S>(keywords: I, category: Category) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            category,
            proxies: Vec::new(),
        }
    }

    /// Sets the candidate proxy pool.
    pub fn with_proxies<I, S>(mut self, proxies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.proxies = proxies.into_iter().map(Into::into).collect();
        self
    }

    /// Space-joined keywords.
    pub fn query(&self) -> String {
        self.keywords.join(" ")
    }

    /// Rejects requests without any usable keyword.
    pub fn validate(&self) -> Result<()> {
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(SearchError::InvalidRequest(
                "keywords must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates an input document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let request: SearchRequest = serde_json::from_str(raw)?;
        request.validate()?;
        Ok(request)
    }
}
