//! The named areas of a decorated page

use std::fmt;

/// One of the six page areas filled by decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    Style,
    Header,
    Navigation,
    Footer,
    Left,
    Right,
}

impl Region {
    /// All regions, in page order
    pub const ALL: [Region; 6] = [
        Region::Style,
        Region::Header,
        Region::Navigation,
        Region::Left,
        Region::Right,
        Region::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Style => "style",
            Region::Header => "header",
            Region::Navigation => "navigation",
            Region::Footer => "footer",
            Region::Left => "left",
            Region::Right => "right",
        }
    }

    /// Whether `${key}` placeholders are expanded in this region's fragments
    pub fn substitutes_keys(self) -> bool {
        !matches!(self, Region::Style)
    }

    /// Slot used by fixed-size per-region tables
    pub(crate) fn index(self) -> usize {
        match self {
            Region::Style => 0,
            Region::Header => 1,
            Region::Navigation => 2,
            Region::Footer => 3,
            Region::Left => 4,
            Region::Right => 5,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
