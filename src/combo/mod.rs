//! Key/description option lists for select controls
//!
//! ```rust
//! use fleet_view::combo::{ComboMap, DefaultLocalizer};
//!
//! let mut units = ComboMap::new();
//! units.add("mph", "Miles/Hour");
//! units.insert("kph", "");
//! assert_eq!(units.keys().collect::<Vec<_>>(), ["kph", "mph"]);
//! assert_eq!(units.get("kph"), Some("kph"));
//!
//! let yes_no = ComboMap::yes_no_map(&DefaultLocalizer);
//! assert_eq!(yes_no.to_string(), "false|No\ntrue|Yes\n");
//! ```

mod i18n;
mod listing;
mod map;
mod option;
mod select;

pub use i18n::{DefaultLocalizer, Localizer, TableLocalizer};
pub use listing::{IdDescription, SortBy};
pub use map::ComboMap;
pub use option::{
    parse_on_off, parse_true_false, parse_yes_no, BooleanText, ComboOption, BOOLEAN_NAME_FALSE,
    BOOLEAN_NAME_TRUE,
};
pub use select::{ComboBox, CSS_COMBO_BOX};

pub(crate) use select::escape_html;
