//! Default display and group configuration.
//!
//! Defaults are plain values; callers' settings are layered on top with
//! [`DisplayConfig::merged`] and [`Groups::merged`], which never touch shared
//! state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::item::UNDEFINED_GROUP;

/// Title of the group items fall into when they declare none.
pub const DEFAULT_GROUP_TITLE: &str = "General";

/// Access levels displayed unless configured otherwise.
pub const DEFAULT_ACCESS: [&str; 2] = ["public", "private"];

/// Resolved display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Access levels that are displayed
    pub access: Vec<String>,

    /// Whether aliases are displayed
    pub alias: bool,

    /// Whether the generator watermark is shown in the footer
    pub watermark: bool,

    /// Any other keys the caller supplied
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            access: DEFAULT_ACCESS.iter().map(|s| s.to_string()).collect(),
            alias: false,
            watermark: true,
            extra: Map::new(),
        }
    }
}

/// Display settings as supplied by the caller. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watermark: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DisplayConfig {
    /// Layer caller settings over the defaults. Caller keys win.
    pub fn merged(overrides: Option<DisplayOverrides>) -> Self {
        let defaults = Self::default();
        let Some(overrides) = overrides else {
            return defaults;
        };

        let mut extra = defaults.extra;
        extra.extend(overrides.extra);

        Self {
            access: overrides.access.unwrap_or(defaults.access),
            alias: overrides.alias.unwrap_or(defaults.alias),
            watermark: overrides.watermark.unwrap_or(defaults.watermark),
            extra,
        }
    }

    /// Whether items with the given access level are displayed.
    pub fn shows_access(&self, access: &str) -> bool {
        self.access.iter().any(|a| a == access)
    }
}

/// Mapping from group slug to display title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Groups(BTreeMap<String, String>);

impl Default for Groups {
    fn default() -> Self {
        let mut groups = BTreeMap::new();
        groups.insert(UNDEFINED_GROUP.to_string(), DEFAULT_GROUP_TITLE.to_string());
        Self(groups)
    }
}

impl Groups {
    /// Layer caller titles over the defaults. Caller slugs win.
    pub fn merged(overrides: Option<BTreeMap<String, String>>) -> Self {
        let mut groups = Self::default();
        if let Some(overrides) = overrides {
            groups.0.extend(overrides);
        }
        groups
    }

    /// Title for a slug, falling back to the slug itself.
    pub fn title<'a>(&'a self, slug: &'a str) -> &'a str {
        self.0.get(slug).map(String::as_str).unwrap_or(slug)
    }
}
