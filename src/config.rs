//! Site configuration
//!
//! A site is described by a TOML file: the label shown by the default
//! decorations, optional fragment overrides for each page region, and the
//! map providers the console may hand out.
//!
//! ```toml
//! [site]
//! title = "Acme Fleet"
//! copyright = "Copyright (C) Acme"
//!
//! [decorations]
//! header = "<h1>${pageTitle}</h1>"
//!
//! [maps]
//! default = "OpenLayers"
//!
//! [[maps.provider]]
//! name = "OpenLayers"
//! properties = { "map.width" = "680" }
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use ariadne::{Color, Label, Report, ReportKind, Source};
use serde::Deserialize;
use thiserror::Error;

use crate::decor::{DefaultDecorations, PageDecorations, PageFragments, Region};
use crate::maps::{BasicMapProvider, MapProviderFactory};

/// Errors that can occur when loading a site configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read site configuration: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse site configuration TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

impl ConfigError {
    /// Format the error with source context using ariadne
    ///
    /// Errors without a source location fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let ConfigError::ParseError(err) = self else {
            return self.to_string();
        };
        let Some(span) = err.span() else {
            return self.to_string();
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid site configuration")
            .with_label(
                Label::new((filename, span))
                    .with_message(err.message())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Branding shown by the default decorations
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteLabel {
    /// Page title, shown in the default header
    pub title: String,
    /// Copyright line, shown in the default footer
    pub copyright: String,
}

impl SiteLabel {
    pub fn new(title: impl Into<String>, copyright: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            copyright: copyright.into(),
        }
    }
}

/// Fragment overrides, one optional string per region
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecorationsConfig {
    pub jsp_uri: Option<String>,
    pub style: Option<String>,
    pub header: Option<String>,
    pub navigation: Option<String>,
    pub footer: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl DecorationsConfig {
    /// The configured fragment for `region`
    pub fn fragment(&self, region: Region) -> Option<&str> {
        match region {
            Region::Style => self.style.as_deref(),
            Region::Header => self.header.as_deref(),
            Region::Navigation => self.navigation.as_deref(),
            Region::Footer => self.footer.as_deref(),
            Region::Left => self.left.as_deref(),
            Region::Right => self.right.as_deref(),
        }
    }
}

/// A map provider registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Short or fully qualified provider name
    pub name: String,
    /// Provider API key, if the provider needs one
    pub authorization: Option<String>,
    pub properties: BTreeMap<String, String>,
}

/// Map provider section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapsConfig {
    /// Provider used when a page does not ask for one
    pub default: Option<String>,
    #[serde(rename = "provider")]
    pub providers: Vec<ProviderConfig>,
}

/// A complete site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteLabel,
    pub decorations: DecorationsConfig,
    pub maps: MapsConfig,
}

impl SiteConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the site label
    pub fn with_label(mut self, label: SiteLabel) -> Self {
        self.site = label;
        self
    }

    /// Set a fragment override
    pub fn with_fragment(mut self, region: Region, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match region {
            Region::Style => self.decorations.style = text,
            Region::Header => self.decorations.header = text,
            Region::Navigation => self.decorations.navigation = text,
            Region::Footer => self.decorations.footer = text,
            Region::Left => self.decorations.left = text,
            Region::Right => self.decorations.right = text,
        }
        self
    }

    /// Register a map provider
    pub fn with_provider(mut self, provider: ProviderConfig) -> Self {
        self.maps.providers.push(provider);
        self
    }

    /// Build the decoration chain: site fragments over the default root
    pub fn build_decorations(&self) -> PageFragments {
        let root: Arc<dyn PageDecorations> = DefaultDecorations::shared(self.site.clone());
        let mut fragments = PageFragments::with_default(root);
        for region in Region::ALL {
            if let Some(text) = self.decorations.fragment(region) {
                fragments.set_fragment(region, Some(text));
            }
        }
        fragments.set_jsp_uri(self.decorations.jsp_uri.as_deref());
        fragments
    }

    /// Build a provider factory with every configured provider registered
    pub fn build_map_factory(&self) -> MapProviderFactory {
        let factory = MapProviderFactory::new();
        for provider in &self.maps.providers {
            let template = BasicMapProvider::new(&provider.name)
                .with_authorization(provider.authorization.clone())
                .with_properties(provider.properties.clone());
            factory.register(&provider.name, move || Ok(Arc::new(template.clone())));
        }
        factory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::RequestContext;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
[site]
title = "Acme Fleet"
copyright = "Copyright Acme"

[decorations]
jsp_uri = "/jsp/acme.jsp"
header = """
    <h1>${pageTitle}</h1>
    <hr>
"""

[maps]
default = "OpenLayers"

[[maps.provider]]
name = "OpenLayers"
properties = { "map.width" = "680" }

[[maps.provider]]
name = "com.example.maps.Tiles"
authorization = "secret"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = SiteConfig::from_str(SAMPLE).expect("Should parse");
        assert_eq!(config.site, SiteLabel::new("Acme Fleet", "Copyright Acme"));
        assert_eq!(config.decorations.jsp_uri.as_deref(), Some("/jsp/acme.jsp"));
        assert_eq!(config.maps.default.as_deref(), Some("OpenLayers"));
        assert_eq!(config.maps.providers.len(), 2);
        assert_eq!(
            config.maps.providers[0].properties.get("map.width"),
            Some(&"680".to_string())
        );
        assert_eq!(
            config.maps.providers[1].authorization.as_deref(),
            Some("secret")
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SiteConfig::from_str("").expect("Should parse");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        let result = SiteConfig::from_str("[decorations]\nsidebar = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_build_decorations_layers_fragments() {
        let config = SiteConfig::from_str(SAMPLE).expect("Should parse");
        let decor = config.build_decorations();
        assert_eq!(decor.page_header(), Some("<h1>${pageTitle}</h1>\n<hr>"));
        assert_eq!(decor.jsp_uri(), Some("/jsp/acme.jsp"));

        let ctx = RequestContext::new().with("pageTitle", "Devices");
        let mut out = Vec::new();
        decor.write_header(&mut out, &ctx).unwrap();
        decor.write_footer(&mut out, &ctx).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<h1>Devices</h1>\n<hr><center><hr><span style='font-size:7pt;'>Copyright Acme</span></center>"
        );
    }

    #[test]
    fn test_builder_setters() {
        let config = SiteConfig::new()
            .with_label(SiteLabel::new("T", "C"))
            .with_fragment(Region::Left, "<td>menu</td>")
            .with_provider(ProviderConfig {
                name: "OpenLayers".to_string(),
                ..ProviderConfig::default()
            });
        assert_eq!(config.decorations.fragment(Region::Left), Some("<td>menu</td>"));
        assert_eq!(config.decorations.fragment(Region::Right), None);
        assert_eq!(config.maps.providers.len(), 1);
    }

    #[test]
    fn test_build_map_factory_registers_providers() {
        let config = SiteConfig::from_str(SAMPLE).expect("Should parse");
        let factory = config.build_map_factory();
        let provider = factory.get_map_provider("OpenLayers").expect("registered");
        assert_eq!(provider.name(), "OpenLayers");
        assert_eq!(provider.property("map.width"), Some("680"));

        let tiles = factory
            .get_map_provider("com.example.maps.Tiles")
            .expect("registered");
        assert_eq!(tiles.authorization(), Some("secret"));
    }

    #[test]
    fn test_format_parse_error_with_context() {
        let source = "[site]\ntitle = \n";
        let err = SiteConfig::from_str(source).unwrap_err();
        let report = err.format(source, "site.toml");
        assert!(report.contains("site.toml"));
        assert!(report.contains("invalid site configuration"));
    }
}
