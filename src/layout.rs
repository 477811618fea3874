//! Extraction rules for GitHub search and repository pages.

use url::Url;

use crate::extract::{Document, Rule};
use crate::result::{LanguageStats, RepositoryExtra};
use crate::Result;

/// Compiled rules locating data on the target site's pages.
#[derive(Debug, Clone)]
pub struct Layout {
    item_link: Rule,
    owner: Rule,
    css: Rule,
    javascript: Rule,
    html: Rule,
}

impl Layout {
    /// Rules matching GitHub's server-rendered markup.
    pub fn github() -> Result<Self> {
        Ok(Self {
            item_link: Rule::attr(r#"div[class*="search-title"] > a"#, "href")?,
            owner: Rule::attr(r#"meta[name="octolytics-dimension-user_login"]"#, "content")?,
            css: language_rule("css")?,
            javascript: language_rule("javascript")?,
            html: language_rule("html")?,
        })
    }

    /// Item links of a search page, resolved against `base` and kept in page order.
    ///
    /// Links that cannot be resolved are skipped.
    pub fn item_urls(&self, html: &str, base: &Url) -> Vec<String> {
        Document::parse(html)
            .all(&self.item_link)
            .iter()
            .filter_map(|href| base.join(href).ok())
            .map(String::from)
            .collect()
    }

    /// Owner and language usage of a repository page.
    pub fn repository_extra(&self, html: &str) -> RepositoryExtra {
        let doc = Document::parse(html);
        RepositoryExtra {
            owner: doc.first(&self.owner),
            language_stats: LanguageStats {
                css: doc.first(&self.css),
                javascript: doc.first(&self.javascript),
                html: doc.first(&self.html),
            },
        }
    }
}

fn language_rule(lang: &str) -> Result<Rule> {
    Rule::text(&format!(r#"a[href*="search?l={}"] > span:nth-of-type(2)"#, lang))
}
