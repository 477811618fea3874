//! Structural value extraction from parsed HTML documents.

use scraper::{ElementRef, Html, Selector};

use crate::{Result, SearchError};

/// What to read from a matched element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Value of the named attribute.
    Attr(String),
    /// First text node directly under the element.
    Text,
}

/// A compiled selector paired with the value it reads.
#[derive(Debug, Clone)]
pub struct Rule {
    selector: Selector,
    target: Target,
}

impl Rule {
    /// Compiles a rule reading an attribute of every matched element.
    pub fn attr(css: &str, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            selector: compile(css)?,
            target: Target::Attr(name.into()),
        })
    }

    /// Compiles a rule reading the text of every matched element.
    pub fn text(css: &str) -> Result<Self> {
        Ok(Self {
            selector: compile(css)?,
            target: Target::Text,
        })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    fn read(&self, element: ElementRef<'_>) -> Option<String> {
        match &self.target {
            Target::Attr(name) => element.value().attr(name).map(str::to_string),
            Target::Text => element
                .children()
                .find_map(|node| node.value().as_text().map(|t| t.text.to_string())),
        }
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector '{}': {:?}", css, e)))
}

/// A parsed document that rules are evaluated against.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML document. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// First value located by the rule, if any.
    pub fn first(&self, rule: &Rule) -> Option<String> {
        self.html
            .select(&rule.selector)
            .find_map(|element| rule.read(element))
    }

    /// Every value located by the rule, in document order.
    pub fn all(&self, rule: &Rule) -> Vec<String> {
        self.html
            .select(&rule.selector)
            .filter_map(|element| rule.read(element))
            .collect()
    }
}
