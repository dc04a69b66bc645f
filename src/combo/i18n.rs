//! Localized display text lookup

use std::collections::HashMap;

/// Resolves a message key to text in the user's language
pub trait Localizer {
    /// The localized text for `key`, or `default` when there is none
    fn text(&self, key: &str, default: &str) -> String;
}

impl<T: Localizer + ?Sized> Localizer for &T {
    fn text(&self, key: &str, default: &str) -> String {
        (**self).text(key, default)
    }
}

/// Always answers with the built-in (English) default
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {
    fn text(&self, _key: &str, default: &str) -> String {
        default.to_string()
    }
}

/// A fixed message table for one locale
#[derive(Debug, Clone, Default)]
pub struct TableLocalizer {
    locale: String,
    messages: HashMap<String, String>,
}

impl TableLocalizer {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Add a message, builder style
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(key.into(), text.into());
        self
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Localizer for TableLocalizer {
    fn text(&self, key: &str, default: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
