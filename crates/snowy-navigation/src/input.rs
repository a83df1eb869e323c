//! Input resolution for the address bar
//!
//! Coercion runs first. Only input that does not coerce to something with a
//! scheme is handed to the search engine.

use std::net::IpAddr;
use url::form_urlencoded;
use url::Url;

use crate::error::NavigationError;
use crate::Result;

pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=%s";

/// Schemes that never carry `//` but are still complete URLs.
const OPAQUE_SCHEMES: &[&str] = &["about", "data", "javascript", "mailto", "blob", "view-source"];

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// Navigate to a URL
    Navigate(String),
    /// Navigate to a search results page
    Search(String),
}

impl InputResolution {
    /// URL the page should load either way.
    pub fn target(&self) -> &str {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn into_target(self) -> String {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, InputResolution::Search(_))
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Result<Self> {
        let mut resolver = Self::new();
        resolver.set_search_engine(template)?;
        Ok(resolver)
    }

    pub fn set_search_engine(&mut self, template: String) -> Result<()> {
        if !template.contains("%s") {
            return Err(NavigationError::InvalidSearchTemplate(template));
        }
        self.search_template = template;
        Ok(())
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into a navigation target
    pub fn resolve(&self, input: &str) -> InputResolution {
        let input = input.trim();

        if input.is_empty() {
            return InputResolution::Navigate("about:blank".to_string());
        }

        if let Some(url) = self.coerce(input) {
            return InputResolution::Navigate(url);
        }

        let search_url = self.build_search_url(input);
        tracing::debug!(query = %input, url = %search_url, "Input resolved to search");
        InputResolution::Search(search_url)
    }

    /// Turn input into a URL with a scheme, or give up.
    fn coerce(&self, input: &str) -> Option<String> {
        if let Ok(url) = Url::parse(input) {
            let scheme = url.scheme();
            if input.contains("://") || OPAQUE_SCHEMES.contains(&scheme) {
                return Some(input.to_string());
            }
        }

        if input.contains(' ') {
            return None;
        }

        if self.looks_like_host(input) {
            let (host, rest) = Self::split_host_and_rest(input);
            let with_https = if self.is_ipv6_host(host) && !host.starts_with('[') {
                format!("https://[{}]{}", host, rest)
            } else {
                format!("https://{}{}", host, rest)
            };

            if Url::parse(&with_https).is_ok() {
                return Some(with_https);
            }
        }

        None
    }

    /// Heuristic check if schemeless input names a host
    fn looks_like_host(&self, input: &str) -> bool {
        let (host, _) = Self::split_host_and_rest(input);

        if host == "localhost" || host.starts_with("localhost:") || self.is_ip_address(host) {
            return true;
        }

        let host = host.split(':').next().unwrap_or(host);
        let mut labels = host.split('.');
        let Some(first) = labels.next() else {
            return false;
        };
        let Some(tld) = labels.next_back() else {
            return false;
        };

        !first.is_empty()
            && tld.len() >= 2
            && tld.len() <= 6
            && tld.chars().all(|c| c.is_ascii_alphabetic())
    }

    fn is_ip_address(&self, host: &str) -> bool {
        self.parse_ip_host(host).is_some()
    }

    fn is_ipv6_host(&self, host: &str) -> bool {
        matches!(self.parse_ip_host(host), Some(IpAddr::V6(_)))
    }

    fn parse_ip_host(&self, host: &str) -> Option<IpAddr> {
        let host = host.trim();
        if host.is_empty() {
            return None;
        }

        let host = if let Some(stripped) = host.strip_prefix('[') {
            stripped.split(']').next().unwrap_or(stripped)
        } else if host.matches(':').count() == 1 {
            host.split(':').next().unwrap_or(host)
        } else {
            host
        };

        host.parse().ok()
    }

    fn split_host_and_rest(input: &str) -> (&str, &str) {
        let cut = input
            .find(|c| matches!(c, '/' | '?' | '#'))
            .unwrap_or(input.len());
        input.split_at(cut)
    }

    /// Build search URL from query
    fn build_search_url(&self, query: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}
