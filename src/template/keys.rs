//! `${key[:arg][=default]}` placeholder replacement

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Opening delimiter of a placeholder
pub const KEY_START: &str = "${";
/// Closing delimiter of a placeholder
pub const KEY_END: &str = "}";
/// Separates the key from its argument: `${key:arg}`
pub const ARG_DELIM: char = ':';
/// Separates the key from its default value: `${key=default}`
pub const DEFAULT_DELIM: char = '=';

const KEY_ESCAPE: char = '\\';

/// Source of placeholder values
pub trait KeyValueMap {
    /// Look up the value for `key`, with the optional `arg` from `${key:arg}`
    fn key_value(&self, key: &str, arg: Option<&str>) -> Option<String>;
}

impl<S: BuildHasher> KeyValueMap for HashMap<String, String, S> {
    fn key_value(&self, key: &str, _arg: Option<&str>) -> Option<String> {
        self.get(key).cloned()
    }
}

impl KeyValueMap for BTreeMap<String, String> {
    fn key_value(&self, key: &str, _arg: Option<&str>) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: KeyValueMap + ?Sized> KeyValueMap for &T {
    fn key_value(&self, key: &str, arg: Option<&str>) -> Option<String> {
        (**self).key_value(key, arg)
    }
}

/// Transforms a resolved value before it is inserted into the text
pub trait ValueFilter {
    fn filter(&self, value: &str) -> String;
}

impl<F: Fn(&str) -> String> ValueFilter for F {
    fn filter(&self, value: &str) -> String {
        self(value)
    }
}

/// Encodes values as URL query arguments (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlArgFilter;

impl ValueFilter for UrlArgFilter {
    fn filter(&self, value: &str) -> String {
        url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
    }
}

/// A parsed `key:arg=default` placeholder body
#[derive(Debug, PartialEq, Eq)]
struct Placeholder<'a> {
    key: &'a str,
    arg: Option<&'a str>,
    default: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    fn parse(body: &'a str) -> Self {
        // the default is kept as written, only the key side is trimmed
        let (key_arg, default) = match body.split_once(DEFAULT_DELIM) {
            Some((key_arg, default)) => (key_arg, Some(default)),
            None => (body, None),
        };
        let (key, arg) = match key_arg.split_once(ARG_DELIM) {
            Some((key, arg)) => (key.trim(), Some(arg.trim())),
            None => (key_arg.trim(), None),
        };
        Self { key, arg, default }
    }
}

/// Replace every `${key}` in `text` with its value from `map`
///
/// Unresolved keys are replaced by their declared default (`${key=default}`),
/// or by the empty string when there is none.
pub fn replace_keys<'a>(text: &'a str, map: &dyn KeyValueMap) -> Cow<'a, str> {
    replace_keys_filtered(text, map, None)
}

/// Replace every `${key}` in `text`, passing resolved values through `filter`
///
/// Defaults are inserted unfiltered. A backslash written directly before a
/// placeholder (`\${key}`) is consumed and the placeholder is still
/// replaced. An unterminated `${` ends substitution and
/// the rest of the text is copied unchanged. Inserted values are never
/// scanned for further placeholders.
pub fn replace_keys_filtered<'a>(
    text: &'a str,
    map: &dyn KeyValueMap,
    filter: Option<&dyn ValueFilter>,
) -> Cow<'a, str> {
    if !text.contains(KEY_START) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(KEY_START) {
        let body_start = start + KEY_START.len();
        let Some(body_len) = rest[body_start..].find(KEY_END) else {
            break;
        };
        let body_end = body_start + body_len;
        let next = body_end + KEY_END.len();

        // a backslash directly before the placeholder is dropped
        let prefix = &rest[..start];
        out.push_str(prefix.strip_suffix(KEY_ESCAPE).unwrap_or(prefix));

        let placeholder = Placeholder::parse(&rest[body_start..body_end]);
        match map.key_value(placeholder.key, placeholder.arg) {
            Some(value) => match filter {
                Some(filter) => out.push_str(&filter.filter(&value)),
                None => out.push_str(&value),
            },
            None => {
                tracing::trace!(key = placeholder.key, "unresolved placeholder");
                out.push_str(placeholder.default.unwrap_or(""));
            }
        }
        rest = &rest[next..];
    }

    out.push_str(rest);
    Cow::Owned(out)
}
