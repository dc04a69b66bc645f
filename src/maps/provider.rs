//! The map provider capability and a property-driven implementation

use std::collections::BTreeMap;
use std::fmt;

/// Default map frame width in pixels
pub const MAP_WIDTH: u32 = 680;
/// Default map frame height in pixels
pub const MAP_HEIGHT: u32 = 470;
/// Pushpin cap used when a provider does not set one
pub const MAX_PUSHPIN_LIMIT: u64 = 1000;

const PROP_MAP_WIDTH: &str = "map.width";
const PROP_MAP_HEIGHT: &str = "map.height";
const PROP_MAP_FILL_FRAME: &str = "map.fillFrame";
const PROP_MAX_PUSHPINS: &str = "map.maxPushpins";

/// Size of the map frame in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapDimension {
    pub width: u32,
    pub height: u32,
}

impl MapDimension {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for MapDimension {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT)
    }
}

impl fmt::Display for MapDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.width, self.height)
    }
}

/// Which page a pushpin limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushpinScope {
    Device,
    Fleet,
    Report,
}

impl PushpinScope {
    fn property(self) -> &'static str {
        match self {
            PushpinScope::Device => "map.maxPushpins.device",
            PushpinScope::Fleet => "map.maxPushpins.fleet",
            PushpinScope::Report => "map.maxPushpins.report",
        }
    }
}

/// A map rendering backend
pub trait MapProvider: fmt::Debug + Send + Sync {
    /// Provider name as registered
    fn name(&self) -> &str;

    /// API key or other authorization token
    fn authorization(&self) -> Option<&str>;

    /// Provider properties (`map.width`, `map.maxPushpins`, ...)
    fn properties(&self) -> &BTreeMap<String, String>;

    fn property(&self, key: &str) -> Option<&str> {
        self.properties().get(key).map(|s| s.as_str())
    }

    /// Frame size, or `None` when the map fills its frame
    fn dimension(&self) -> Option<MapDimension> {
        if self.property(PROP_MAP_FILL_FRAME).and_then(parse_bool) == Some(true) {
            return None;
        }
        let width = self.property(PROP_MAP_WIDTH).and_then(|v| v.trim().parse::<u32>().ok());
        let height = self.property(PROP_MAP_HEIGHT).and_then(|v| v.trim().parse::<u32>().ok());
        match (width, height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(MapDimension::new(w, h)),
            _ => Some(MapDimension::default()),
        }
    }

    /// Largest number of pushpins shown at once for `scope`
    ///
    /// The scope-specific property wins over `map.maxPushpins`; missing or
    /// non-positive values fall back to [`MAX_PUSHPIN_LIMIT`].
    fn max_pushpins(&self, scope: PushpinScope) -> u64 {
        self.property(scope.property())
            .or_else(|| self.property(PROP_MAX_PUSHPINS))
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(MAX_PUSHPIN_LIMIT)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// A provider defined entirely by configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicMapProvider {
    name: String,
    authorization: Option<String>,
    properties: BTreeMap<String, String>,
}

impl BasicMapProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_authorization(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization.filter(|a| !a.trim().is_empty());
        self
    }

    pub fn with_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

impl MapProvider for BasicMapProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}
