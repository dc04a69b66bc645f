//! Fleet View - page scaffolding for a server-rendered fleet-tracking console
//!
//! This library provides the page decorations (style, header, navigation,
//! footer and side banners) wrapped around every console page, the
//! `${key}` substitution used to fill them, option lists for select
//! controls, a registry of map providers, and an in-memory response body.
//!
//! # Example
//!
//! ```rust
//! use fleet_view::template::RequestContext;
//! use fleet_view::{render_page, SiteConfig};
//!
//! let config = SiteConfig::from_str(r#"
//!     [site]
//!     title = "Acme Fleet"
//!     copyright = "(c) Acme"
//! "#).unwrap();
//!
//! let ctx = RequestContext::new().with("pageTitle", "Devices");
//! let html = render_page(&config, &ctx, "<p>3 devices</p>").unwrap();
//! assert!(html.contains("<title>Devices</title>"));
//! assert!(html.contains("<b>Acme Fleet</b>"));
//! ```

pub mod combo;
pub mod config;
pub mod decor;
pub mod maps;
pub mod output;
pub mod page;
pub mod template;

pub use combo::{ComboMap, ComboOption};
pub use config::{ConfigError, SiteConfig, SiteLabel};
pub use decor::{DecorError, DefaultDecorations, PageDecorations, PageFragments, Region};
pub use maps::{MapProvider, MapProviderFactory, ProviderError};
pub use output::{OutputError, ResponseBuffer};
pub use page::write_page;
pub use template::{replace_keys, KeyValueMap, RequestContext};

use thiserror::Error;

/// Errors that can occur while producing a page
#[derive(Debug, Error)]
pub enum ViewError {
    /// Site configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A region could not be composed
    #[error("decoration error: {0}")]
    Decor(#[from] DecorError),

    /// A map provider could not be resolved
    #[error("map provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The response body was claimed the wrong way
    #[error("response error: {0}")]
    Output(#[from] OutputError),

    /// The rendered page could not be delivered
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a complete page for a site
///
/// Builds the site's decoration chain and wraps `body` in it.
pub fn render_page(
    config: &SiteConfig,
    ctx: &dyn KeyValueMap,
    body: &str,
) -> Result<String, ViewError> {
    let decor = config.build_decorations();
    Ok(page::render_page(&decor, ctx, body)?)
}
