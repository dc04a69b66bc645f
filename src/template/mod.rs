//! Key substitution for page fragments
//!
//! Fragments and link URLs may carry `${key}` placeholders that are filled
//! from a request-scoped lookup when the page is written.
//!
//! # Example
//!
//! ```rust
//! use fleet_view::template::{replace_keys, RequestContext};
//!
//! let ctx = RequestContext::new().with("title", "Fleet");
//! assert_eq!(replace_keys("<b>${title}</b>", &ctx), "<b>Fleet</b>");
//! ```

mod context;
mod keys;
mod link;

pub use context::RequestContext;
pub use keys::{
    replace_keys, replace_keys_filtered, KeyValueMap, UrlArgFilter, ValueFilter, ARG_DELIM,
    DEFAULT_DELIM, KEY_END, KEY_START,
};
pub use link::PageLink;
