//! In-page links whose URL is filled from the request context

use super::keys::{replace_keys_filtered, KeyValueMap, UrlArgFilter};

const DEFAULT_TARGET: &str = "_blank";

/// A menu or page link pointing at an external URL template
///
/// Placeholder values in the URL are encoded as query arguments, so
/// `http://host/?u=${userID}` stays a valid URL whatever the user name holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    url: String,
    target: String,
}

impl PageLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            target: DEFAULT_TARGET.to_string(),
        }
    }

    /// Set the browser target, blank resets to `_blank`
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = if target.trim().is_empty() {
            DEFAULT_TARGET.to_string()
        } else {
            target.to_string()
        };
        self
    }

    /// The unexpanded URL template
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Expand the URL template, encoding each resolved value
    pub fn encode_url(&self, ctx: &dyn KeyValueMap) -> String {
        replace_keys_filtered(&self.url, ctx, Some(&UrlArgFilter)).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::RequestContext;

    #[test]
    fn test_encode_url_escapes_values() {
        let link = PageLink::new("http://maps.example/?acct=${accountID}&user=${userID}");
        let ctx = RequestContext::new()
            .with("accountID", "acme fleet")
            .with("userID", "ops/1");
        assert_eq!(
            link.encode_url(&ctx),
            "http://maps.example/?acct=acme+fleet&user=ops%2F1"
        );
    }

    #[test]
    fn test_target_defaults() {
        let link = PageLink::new("http://x/");
        assert_eq!(link.target(), "_blank");
        assert_eq!(link.clone().with_target("  ").target(), "_blank");
        assert_eq!(link.with_target("main").target(), "main");
    }
}
