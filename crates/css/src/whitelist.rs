//! Shared selector whitelist

use crate::matcher::selector_matches;
use crate::split::split_selector_group;

/// Base selectors used when no whitelist file is supplied
pub const DEFAULT_SELECTORS: &[&str] = &[
    ".btn",
    ".btn-primary",
    ".btn-secondary",
    ".btn-outline",
    ".footer",
    ".footer-content",
    ".footer-links",
    ".footer-bottom",
    ".nav-container",
    ".mobile-nav",
    ".tab-btn",
    ".pricing-grid",
    ".packs-grid",
    ".price-card",
    ".card",
    ".container",
    ".auth-buttons",
    ".user-section",
    ".link-group",
];

/// Ordered list of base selectors whose rules are shared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    selectors: Vec<String>,
}

impl Whitelist {
    /// Create a whitelist from explicit base selectors
    pub fn new<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse whitelist file contents: one selector per line, blank lines and
    /// `#` comments ignored. Falls back to the defaults when nothing remains.
    pub fn parse(text: &str) -> Self {
        let selectors: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();

        if selectors.is_empty() {
            log::debug!("Whitelist text has no selectors, using defaults");
            return Self::default();
        }
        Self { selectors }
    }

    /// Base selectors in load order
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// True if any selector of the group is covered by any base selector
    pub fn should_extract(&self, selector_group: &str) -> bool {
        split_selector_group(selector_group).iter().any(|selector| {
            self.selectors
                .iter()
                .any(|base| selector_matches(selector, base))
        })
    }
}

impl Default for Whitelist {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTORS.iter().copied())
    }
}
