//! Page decorations: the style, header, navigation, footer and banner
//! fragments wrapped around every console page
//!
//! A [`PageFragments`] store holds per-site overrides and falls back to
//! another provider for regions it leaves unset. Chains end at a root such
//! as [`DefaultDecorations`], which defines content for every region.
//!
//! ```rust
//! use std::sync::Arc;
//! use fleet_view::decor::{DefaultDecorations, PageDecorations, PageFragments};
//! use fleet_view::template::RequestContext;
//! use fleet_view::SiteLabel;
//!
//! let root = Arc::new(DefaultDecorations::new(SiteLabel::new("Fleet", "(c) Fleet")));
//! let mut site = PageFragments::with_default(root);
//! site.set_page_header(Some("<h1>${title}</h1>"));
//!
//! let ctx = RequestContext::new().with("title", "Dispatch");
//! let mut out = Vec::new();
//! site.write_header(&mut out, &ctx).unwrap();
//! assert_eq!(out, b"<h1>Dispatch</h1>");
//! ```

mod compose;
mod defaults;
mod error;
mod fragments;
mod region;

use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::template::KeyValueMap;

pub use compose::{compose, MAX_CHAIN_DEPTH};
pub use defaults::DefaultDecorations;
pub use error::DecorError;
pub use fragments::{normalize_fragment, PageFragments};
pub use region::Region;

/// What a provider holds for one region
#[derive(Debug)]
pub enum Resolution<'a> {
    /// A configured fragment; placeholders are substituted when written
    /// (except for the style region)
    Fragment(&'a str),
    /// Content generated by a root provider, written as-is
    Content(Cow<'a, str>),
    /// Nothing local; continue with the fallback provider, if any
    Fallback(Option<&'a dyn PageDecorations>),
}

/// A source of page decorations
///
/// Providers are shared between sites as `Arc<dyn PageDecorations>`, so
/// they must be thread-safe for reads. Mutation happens while a site is
/// being configured, before it is shared.
pub trait PageDecorations: fmt::Debug + Send + Sync {
    /// Set the provider consulted for regions without a local fragment
    fn set_default_decorations(&mut self, fallback: Arc<dyn PageDecorations>);

    /// Set (or clear with `None`) the fragment for a region
    fn set_fragment(&mut self, region: Region, text: Option<&str>);

    /// Set the URI of a JSP page backing this decoration set; blank clears it
    fn set_jsp_uri(&mut self, uri: Option<&str>);

    /// URI of the backing JSP page, if any
    fn jsp_uri(&self) -> Option<&str>;

    /// Decide what this provider contributes for `region`
    fn resolve(&self, region: Region) -> Resolution<'_>;

    fn has_jsp_uri(&self) -> bool {
        self.jsp_uri().is_some()
    }

    fn set_page_style(&mut self, style: Option<&str>) {
        self.set_fragment(Region::Style, style);
    }

    fn set_page_header(&mut self, header: Option<&str>) {
        self.set_fragment(Region::Header, header);
    }

    fn set_page_navigation(&mut self, navigation: Option<&str>) {
        self.set_fragment(Region::Navigation, navigation);
    }

    fn set_page_footer(&mut self, footer: Option<&str>) {
        self.set_fragment(Region::Footer, footer);
    }

    fn set_page_left(&mut self, left: Option<&str>) {
        self.set_fragment(Region::Left, left);
    }

    fn set_page_right(&mut self, right: Option<&str>) {
        self.set_fragment(Region::Right, right);
    }

    /// Write `region` to `out`, following the fallback chain as needed
    ///
    /// The sink is neither flushed nor closed.
    fn write_region(
        &self,
        region: Region,
        out: &mut dyn Write,
        ctx: &dyn KeyValueMap,
    ) -> Result<(), DecorError> {
        compose(self.resolve(region), region, out, ctx)
    }

    fn write_style(&self, out: &mut dyn Write, ctx: &dyn KeyValueMap) -> Result<(), DecorError> {
        self.write_region(Region::Style, out, ctx)
    }

    fn write_header(&self, out: &mut dyn Write, ctx: &dyn KeyValueMap) -> Result<(), DecorError> {
        self.write_region(Region::Header, out, ctx)
    }

    fn write_navigation(
        &self,
        out: &mut dyn Write,
        ctx: &dyn KeyValueMap,
    ) -> Result<(), DecorError> {
        self.write_region(Region::Navigation, out, ctx)
    }

    fn write_footer(&self, out: &mut dyn Write, ctx: &dyn KeyValueMap) -> Result<(), DecorError> {
        self.write_region(Region::Footer, out, ctx)
    }

    fn write_left(&self, out: &mut dyn Write, ctx: &dyn KeyValueMap) -> Result<(), DecorError> {
        self.write_region(Region::Left, out, ctx)
    }

    fn write_right(&self, out: &mut dyn Write, ctx: &dyn KeyValueMap) -> Result<(), DecorError> {
        self.write_region(Region::Right, out, ctx)
    }
}
