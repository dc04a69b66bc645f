//! Sortable id/description records for list pages

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which field a list is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    #[default]
    Id,
    Description,
    Name,
}

impl FromStr for SortBy {
    type Err = Infallible;

    /// Lenient parse: `name`, anything starting with `desc`, otherwise `Id`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Ok(if s == "name" {
            SortBy::Name
        } else if s.starts_with("desc") {
            SortBy::Description
        } else {
            SortBy::Id
        })
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortBy::Id => "id",
            SortBy::Description => "description",
            SortBy::Name => "name",
        };
        f.write_str(s)
    }
}

/// An entity id with optional description and short name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdDescription {
    id: String,
    description: Option<String>,
    name: Option<String>,
}

impl IdDescription {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Lowercased value of the field `sort_by` selects
    pub fn sort_key(&self, sort_by: SortBy) -> String {
        match sort_by {
            SortBy::Id => self.id(),
            SortBy::Description => self.description(),
            SortBy::Name => self.name(),
        }
        .to_lowercase()
    }

    /// Sort records case-insensitively by one field, keeping ties in order
    pub fn sort(items: &mut [IdDescription], sort_by: SortBy) {
        items.sort_by_cached_key(|item| item.sort_key(sort_by));
    }
}

impl fmt::Display for IdDescription {
    /// The description, else the name, else the id
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = [self.description(), self.name()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(self.id());
        f.write_str(text)
    }
}
