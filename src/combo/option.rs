//! A single key/description choice and the boolean choice helpers

use std::fmt;

use super::Localizer;

/// Key used for the "false" entry of boolean lists
pub const BOOLEAN_NAME_FALSE: &str = "false";
/// Key used for the "true" entry of boolean lists
pub const BOOLEAN_NAME_TRUE: &str = "true";

/// One entry of a select control
///
/// Both parts are absent only for the "nothing to select" option; the
/// description alone is absent when a key was looked up but not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboOption {
    key: Option<String>,
    description: Option<String>,
}

impl ComboOption {
    /// Create an option; a blank description defaults to the key
    pub fn new(key: &str, description: &str) -> Self {
        let key = key.trim();
        let description = if description.trim().is_empty() {
            key
        } else {
            description.trim()
        };
        Self {
            key: Some(key.to_string()),
            description: Some(description.to_string()),
        }
    }

    /// Create an option whose description is its key
    pub fn from_key(key: &str) -> Self {
        Self::new(key, "")
    }

    /// An option with neither key nor description
    pub fn empty() -> Self {
        Self::default()
    }

    /// An option for a key that has no description
    pub(crate) fn unresolved(key: &str) -> Self {
        Self {
            key: Some(key.trim().to_string()),
            description: None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Case-insensitive comparison against the key
    pub fn is_key(&self, key: &str) -> bool {
        self.key
            .as_deref()
            .is_some_and(|k| eq_ignore_case(k, key.trim()))
    }

    /// Case-insensitive comparison against the key or the description
    pub fn is_match(&self, text: &str) -> bool {
        let text = text.trim();
        self.is_key(text)
            || self
                .description
                .as_deref()
                .is_some_and(|d| eq_ignore_case(d, text))
    }
}

impl fmt::Display for ComboOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}",
            self.key.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or("")
        )
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// The three boolean wordings used in the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanText {
    YesNo,
    TrueFalse,
    OnOff,
}

impl BooleanText {
    /// Message keys and English defaults for (false, true)
    fn labels(self) -> [(&'static str, &'static str); 2] {
        match self {
            BooleanText::YesNo => [("ComboOption.no", "No"), ("ComboOption.yes", "Yes")],
            BooleanText::TrueFalse => [
                ("ComboOption.false", "False"),
                ("ComboOption.true", "True"),
            ],
            BooleanText::OnOff => [("ComboOption.off", "Off"), ("ComboOption.on", "On")],
        }
    }

    /// Localized label for `state`
    pub fn text(self, l10n: &dyn Localizer, state: bool) -> String {
        let (key, default) = self.labels()[usize::from(state)];
        l10n.text(key, default)
    }

    /// Option keyed `"true"`/`"false"` carrying the localized label
    pub fn option(self, l10n: &dyn Localizer, state: bool) -> ComboOption {
        let key = if state {
            BOOLEAN_NAME_TRUE
        } else {
            BOOLEAN_NAME_FALSE
        };
        ComboOption::new(key, &self.text(l10n, state))
    }

    /// Interpret user input as a boolean
    ///
    /// Blank input yields `default`. The literal keys `true`/`false` are
    /// checked first, then the localized labels, then the usual spellings
    /// (`yes`, `on`, `1`, ...). Anything else yields `default`.
    pub fn parse(self, l10n: &dyn Localizer, text: &str, default: bool) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return default;
        }
        if text.eq_ignore_ascii_case(BOOLEAN_NAME_FALSE) {
            return false;
        }
        if text.eq_ignore_ascii_case(BOOLEAN_NAME_TRUE) {
            return true;
        }
        if eq_ignore_case(text, &self.text(l10n, false)) {
            return false;
        }
        if eq_ignore_case(text, &self.text(l10n, true)) {
            return true;
        }
        parse_boolean(text, default)
    }
}

/// Parse a Yes/No answer, see [`BooleanText::parse`]
pub fn parse_yes_no(l10n: &dyn Localizer, text: &str, default: bool) -> bool {
    BooleanText::YesNo.parse(l10n, text, default)
}

/// Parse a True/False answer, see [`BooleanText::parse`]
pub fn parse_true_false(l10n: &dyn Localizer, text: &str, default: bool) -> bool {
    BooleanText::TrueFalse.parse(l10n, text, default)
}

/// Parse an On/Off answer, see [`BooleanText::parse`]
pub fn parse_on_off(l10n: &dyn Localizer, text: &str, default: bool) -> bool {
    BooleanText::OnOff.parse(l10n, text, default)
}

fn parse_boolean(text: &str, default: bool) -> bool {
    match text.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => true,
        "false" | "f" | "no" | "n" | "off" | "0" => false,
        _ => default,
    }
}
