//! Searchable records
//!
//! The engine reads candidates only through the [`Searchable`] trait, so any
//! host type can be ranked without copying it into an engine-owned struct.

use serde::{Deserialize, Serialize};

/// A record that can be ranked against a query.
///
/// Absent text is reported as `None` and scored as the empty string.
pub trait Searchable {
    /// Human readable title
    fn title(&self) -> Option<&str>;
    /// Longer description text
    fn description(&self) -> Option<&str>;
    /// Name of the group or category the record belongs to
    fn group_name(&self) -> &str;
    /// The record's own name or key within its group
    fn item_name(&self) -> &str;
    /// Unique identifier of the record
    fn path(&self) -> &str;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }

    fn group_name(&self) -> &str {
        (**self).group_name()
    }

    fn item_name(&self) -> &str {
        (**self).item_name()
    }

    fn path(&self) -> &str {
        (**self).path()
    }
}

/// One configurable setting, flattened out of a settings schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingCandidate {
    pub group_name: String,
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub path: String,
}

impl SettingCandidate {
    /// Create a candidate whose path is `group_name.item_name`
    pub fn new(group_name: impl Into<String>, item_name: impl Into<String>) -> Self {
        let group_name = group_name.into();
        let item_name = item_name.into();
        let path = format!("{}.{}", group_name, item_name);
        Self {
            group_name,
            item_name,
            title: None,
            description: None,
            path,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Searchable for SettingCandidate {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn group_name(&self) -> &str {
        &self.group_name
    }

    fn item_name(&self) -> &str {
        &self.item_name
    }

    fn path(&self) -> &str {
        &self.path
    }
}
