//! Map providers and the factory that hands them out
//!
//! Providers are registered by name at startup. Pages ask the factory for a
//! provider by short name (`OpenLayers`) or fully qualified name
//! (`com.example.maps.Tiles`) and receive the same shared instance on every
//! call.

mod error;
mod factory;
mod provider;

pub use error::ProviderError;
pub use factory::{qualified_name, MapProviderFactory, ProviderCtor, MAP_PROVIDER_NAMESPACE};
pub use provider::{
    BasicMapProvider, MapDimension, MapProvider, PushpinScope, MAP_HEIGHT, MAP_WIDTH,
    MAX_PUSHPIN_LIMIT,
};
