//! Name-keyed registry of map provider singletons

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

use super::{MapProvider, ProviderError};

/// Namespace prefixed to provider names that are not already qualified
pub const MAP_PROVIDER_NAMESPACE: &str = "fleetview.maps";

const NAMESPACE_SEPARATOR: char = '.';

/// Builds a provider instance
pub type ProviderCtor =
    Arc<dyn Fn() -> Result<Arc<dyn MapProvider>, ProviderError> + Send + Sync>;

/// Expand a short provider name into its qualified form
///
/// Names that already contain a `.` are taken as qualified.
pub fn qualified_name(name: &str) -> Cow<'_, str> {
    if name.contains(NAMESPACE_SEPARATOR) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{MAP_PROVIDER_NAMESPACE}{NAMESPACE_SEPARATOR}{name}"))
    }
}

/// Hands out one shared instance per provider name
///
/// Constructors are registered under qualified names. Instances are cached
/// under the name the caller asked for, and each is built at most once even
/// when several threads ask for an unseen name at the same moment.
///
/// Failed resolutions are not cached: every call for a name that failed
/// tries again, so a constructor registered later is picked up.
/// Constructors run while the cache entry is locked and must not call back
/// into the factory.
#[derive(Default)]
pub struct MapProviderFactory {
    constructors: DashMap<String, ProviderCtor>,
    instances: DashMap<String, Arc<dyn MapProvider>>,
}

impl MapProviderFactory {
    /// Create a factory with nothing registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under `name` (qualified if short)
    ///
    /// Replaces any previous constructor for the same name; instances
    /// already handed out stay cached.
    pub fn register<F>(&self, name: &str, ctor: F)
    where
        F: Fn() -> Result<Arc<dyn MapProvider>, ProviderError> + Send + Sync + 'static,
    {
        let qualified = qualified_name(name).into_owned();
        tracing::debug!(provider = %qualified, "registering map provider");
        self.constructors.insert(qualified, Arc::new(ctor));
    }

    /// Whether a constructor exists for `name`
    pub fn is_registered(&self, name: &str) -> bool {
        self.constructors.contains_key(qualified_name(name).as_ref())
    }

    /// Number of provider instances created so far
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Get the provider for `name`, creating it on first use
    pub fn try_get_map_provider(&self, name: &str) -> Result<Arc<dyn MapProvider>, ProviderError> {
        if let Some(existing) = self.instances.get(name) {
            return Ok(Arc::clone(existing.value()));
        }

        let entry = self
            .instances
            .entry(name.to_string())
            .or_try_insert_with(|| self.create(name))?;
        Ok(Arc::clone(entry.value()))
    }

    /// Get the provider for `name`, logging and returning `None` on failure
    pub fn get_map_provider(&self, name: &str) -> Option<Arc<dyn MapProvider>> {
        match self.try_get_map_provider(name) {
            Ok(provider) => Some(provider),
            Err(err) => {
                tracing::error!(provider = name, error = %err, "map provider creation error");
                None
            }
        }
    }

    fn create(&self, name: &str) -> Result<Arc<dyn MapProvider>, ProviderError> {
        let qualified = qualified_name(name);
        let ctor = self
            .constructors
            .get(qualified.as_ref())
            .map(|c| Arc::clone(c.value()))
            .ok_or_else(|| ProviderError::Unknown {
                name: qualified.to_string(),
            })?;
        let provider = ctor()?;
        tracing::debug!(provider = %qualified, "created map provider");
        Ok(provider)
    }
}

impl fmt::Debug for MapProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut registered: Vec<String> =
            self.constructors.iter().map(|e| e.key().clone()).collect();
        registered.sort();
        f.debug_struct("MapProviderFactory")
            .field("registered", &registered)
            .field("instances", &self.instances.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maps::BasicMapProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn basic(name: &'static str) -> impl Fn() -> Result<Arc<dyn MapProvider>, ProviderError> {
        move || Ok(Arc::new(BasicMapProvider::new(name)) as Arc<dyn MapProvider>)
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name("OpenLayers"), "fleetview.maps.OpenLayers");
        assert_eq!(qualified_name("foo.bar.Baz"), "foo.bar.Baz");
        assert!(matches!(qualified_name("foo.bar.Baz"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_same_instance_for_repeated_lookups() {
        let factory = MapProviderFactory::new();
        factory.register("OpenLayers", basic("OpenLayers"));

        let first = factory.get_map_provider("OpenLayers").expect("registered");
        let second = factory.get_map_provider("OpenLayers").expect("registered");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.instance_count(), 1);
    }

    #[test]
    fn test_short_name_gets_namespace_prefix() {
        let factory = MapProviderFactory::new();
        factory.register("fleetview.maps.Baz", basic("short"));
        factory.register("foo.bar.Baz", basic("qualified"));

        assert_eq!(factory.get_map_provider("Baz").unwrap().name(), "short");
        assert_eq!(
            factory.get_map_provider("foo.bar.Baz").unwrap().name(),
            "qualified"
        );
    }

    #[test]
    fn test_cache_keyed_by_requested_name() {
        let factory = MapProviderFactory::new();
        factory.register("OpenLayers", basic("OpenLayers"));

        let short = factory.get_map_provider("OpenLayers").unwrap();
        let long = factory
            .get_map_provider("fleetview.maps.OpenLayers")
            .unwrap();
        assert!(!Arc::ptr_eq(&short, &long));
        assert_eq!(factory.instance_count(), 2);
    }

    #[test]
    fn test_unknown_name_is_retried_on_every_call() {
        let factory = MapProviderFactory::new();
        assert!(factory.get_map_provider("Missing").is_none());
        assert!(factory.get_map_provider("Missing").is_none());
        assert_eq!(factory.instance_count(), 0);

        let err = factory.try_get_map_provider("Missing").unwrap_err();
        assert!(matches!(err, ProviderError::Unknown { ref name } if name == "fleetview.maps.Missing"));

        factory.register("Missing", basic("late"));
        assert_eq!(factory.get_map_provider("Missing").unwrap().name(), "late");
    }

    #[test]
    fn test_construction_failure_is_not_cached() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let factory = MapProviderFactory::new();
        factory.register("Flaky", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(ProviderError::construction("Flaky", "missing api key"))
        });

        assert!(factory.get_map_provider("Flaky").is_none());
        assert!(factory.get_map_provider("Flaky").is_none());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_concurrent_lookups_build_once() {
        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        let factory = Arc::new(MapProviderFactory::new());
        factory.register("Shared", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(5));
            Ok(Arc::new(BasicMapProvider::new("Shared")) as Arc<dyn MapProvider>)
        });

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let factory = Arc::clone(&factory);
                std::thread::spawn(move || factory.get_map_provider("Shared").unwrap())
            })
            .collect();
        let providers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(built.load(Ordering::SeqCst), 1);
        assert!(providers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_is_registered() {
        let factory = MapProviderFactory::new();
        factory.register("OpenLayers", basic("OpenLayers"));
        assert!(factory.is_registered("OpenLayers"));
        assert!(factory.is_registered("fleetview.maps.OpenLayers"));
        assert!(!factory.is_registered("GoogleMaps"));
        assert!(format!("{factory:?}").contains("fleetview.maps.OpenLayers"));
    }
}
