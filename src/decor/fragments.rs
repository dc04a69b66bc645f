//! Per-site fragment overrides with a fallback provider

use std::sync::Arc;

use super::{PageDecorations, Region, Resolution};

/// Trim every line of `text` and join the lines with `\n`
///
/// `\r\n`, `\r` and `\n` all end a line. The result is trimmed as a whole,
/// so `""` normalizes to `""`, which is still a defined fragment.
pub fn normalize_fragment(text: &str) -> String {
    text.split("\r\n")
        .flat_map(|chunk| chunk.split(['\r', '\n']))
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Fragment overrides for the six page regions
///
/// Regions left unset are delegated to the default decorations. The
/// fallback is shared, never owned or mutated through this store. Not safe
/// for concurrent mutation.
#[derive(Debug, Clone, Default)]
pub struct PageFragments {
    fallback: Option<Arc<dyn PageDecorations>>,
    jsp_uri: Option<String>,
    fragments: [Option<String>; 6],
}

impl PageFragments {
    /// Create a store with no fragments and no fallback
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that delegates unset regions to `fallback`
    pub fn with_default(fallback: Arc<dyn PageDecorations>) -> Self {
        Self {
            fallback: Some(fallback),
            ..Self::default()
        }
    }

    /// The provider consulted for unset regions
    pub fn default_decorations(&self) -> Option<&Arc<dyn PageDecorations>> {
        self.fallback.as_ref()
    }

    /// The normalized fragment stored for `region`
    pub fn fragment(&self, region: Region) -> Option<&str> {
        self.fragments[region.index()].as_deref()
    }

    pub fn page_style(&self) -> Option<&str> {
        self.fragment(Region::Style)
    }

    pub fn page_header(&self) -> Option<&str> {
        self.fragment(Region::Header)
    }

    pub fn page_navigation(&self) -> Option<&str> {
        self.fragment(Region::Navigation)
    }

    pub fn page_footer(&self) -> Option<&str> {
        self.fragment(Region::Footer)
    }

    pub fn page_left(&self) -> Option<&str> {
        self.fragment(Region::Left)
    }

    pub fn page_right(&self) -> Option<&str> {
        self.fragment(Region::Right)
    }
}

impl PageDecorations for PageFragments {
    fn set_default_decorations(&mut self, fallback: Arc<dyn PageDecorations>) {
        self.fallback = Some(fallback);
    }

    fn set_fragment(&mut self, region: Region, text: Option<&str>) {
        self.fragments[region.index()] = text.map(normalize_fragment);
    }

    fn set_jsp_uri(&mut self, uri: Option<&str>) {
        self.jsp_uri = uri
            .filter(|u| !u.trim().is_empty())
            .map(str::to_string);
    }

    fn jsp_uri(&self) -> Option<&str> {
        self.jsp_uri.as_deref()
    }

    fn resolve(&self, region: Region) -> Resolution<'_> {
        match self.fragment(region) {
            Some(text) => Resolution::Fragment(text),
            None => Resolution::Fallback(self.fallback.as_deref()),
        }
    }
}
