//! Ordered key/description map

use std::fmt;

use super::{BooleanText, ComboOption, IdDescription, Localizer};
use super::{BOOLEAN_NAME_FALSE, BOOLEAN_NAME_TRUE};

/// Insertion-ordered map from option key to description
///
/// Keys are unique. Adding a key that is already present replaces its
/// description in place; inserting one moves it to the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboMap {
    entries: Vec<(String, String)>,
    default_selection: Option<ComboOption>,
}

impl ComboMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map whose entries describe themselves
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for key in keys {
            map.add_key(key.as_ref());
        }
        map
    }

    /// A map holding one entry
    pub fn single(key: &str, description: &str) -> Self {
        let mut map = Self::new();
        map.add(key, description);
        map
    }

    /// One entry per item, described by its display text
    pub fn from_id_descriptions(items: &[IdDescription]) -> Self {
        let mut map = Self::new();
        for item in items {
            map.add(item.id(), &item.to_string());
        }
        map
    }

    /// `false`/`true` keyed map with localized Yes/No labels
    pub fn yes_no_map(l10n: &dyn Localizer) -> Self {
        Self::boolean_map(BooleanText::YesNo, l10n)
    }

    /// `false`/`true` keyed map with localized True/False labels
    pub fn true_false_map(l10n: &dyn Localizer) -> Self {
        Self::boolean_map(BooleanText::TrueFalse, l10n)
    }

    /// `false`/`true` keyed map with localized On/Off labels
    pub fn on_off_map(l10n: &dyn Localizer) -> Self {
        Self::boolean_map(BooleanText::OnOff, l10n)
    }

    fn boolean_map(text: BooleanText, l10n: &dyn Localizer) -> Self {
        let mut map = Self::new();
        map.add(BOOLEAN_NAME_FALSE, &text.text(l10n, false));
        map.add(BOOLEAN_NAME_TRUE, &text.text(l10n, true));
        map
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn normalize<'a>(key: &'a str, description: &'a str) -> (&'a str, &'a str) {
        let key = key.trim();
        let description = description.trim();
        if description.is_empty() {
            (key, key)
        } else {
            (key, description)
        }
    }

    /// Append an entry; a blank description defaults to the key
    pub fn add(&mut self, key: &str, description: &str) {
        let (key, description) = Self::normalize(key, description);
        match self.position(key) {
            Some(idx) => self.entries[idx].1 = description.to_string(),
            None => self
                .entries
                .push((key.to_string(), description.to_string())),
        }
    }

    /// Append an entry described by its own key
    pub fn add_key(&mut self, key: &str) {
        self.add(key, key);
    }

    /// Append an option; options without a key are ignored
    pub fn add_option(&mut self, option: &ComboOption) {
        if let Some(key) = option.key() {
            self.add(key, option.description().unwrap_or(""));
        }
    }

    /// Put an entry first; a blank description defaults to the key
    pub fn insert(&mut self, key: &str, description: &str) {
        let (key, description) = Self::normalize(key, description);
        if let Some(idx) = self.position(key) {
            self.entries.remove(idx);
        }
        self.entries
            .insert(0, (key.to_string(), description.to_string()));
    }

    /// Put an entry described by its own key first
    pub fn insert_key(&mut self, key: &str) {
        self.insert(key, key);
    }

    /// Put an option first; options without a key are ignored
    pub fn insert_option(&mut self, option: &ComboOption) {
        if let Some(key) = option.key() {
            self.insert(key, option.description().unwrap_or(""));
        }
    }

    /// Remove an entry, returning its description
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.position(key.trim())?;
        Some(self.entries.remove(idx).1)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, d)| d.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key.trim()).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries as `(key, description)` in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), d.as_str()))
    }

    /// The option for `key`; the description is absent if the key is not present
    pub fn combo_option(&self, key: &str) -> ComboOption {
        match self.get(key) {
            Some(description) => ComboOption::new(key, description),
            None => ComboOption::unresolved(key),
        }
    }

    /// The first entry as an option, or an empty option for an empty map
    pub fn first_combo_option(&self) -> ComboOption {
        self.entries
            .first()
            .map(|(k, d)| ComboOption::new(k, d))
            .unwrap_or_default()
    }

    pub fn default_selection(&self) -> Option<&ComboOption> {
        self.default_selection.as_ref()
    }

    /// Option preselected when the caller has no selection of its own
    pub fn set_default_selection(&mut self, selection: Option<ComboOption>) {
        self.default_selection = selection;
    }

    /// Set the default selection, builder style
    pub fn with_default_selection(mut self, selection: ComboOption) -> Self {
        self.default_selection = Some(selection);
        self
    }
}

impl<'a> IntoIterator for &'a ComboMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Display for ComboMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, description) in self {
            writeln!(f, "{key}|{description}")?;
        }
        Ok(())
    }
}
