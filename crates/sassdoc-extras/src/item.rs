//! Documentation items as produced by the extractor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Group slug used for items that declare no group.
pub const UNDEFINED_GROUP: &str = "undefined";

/// Access level assumed when an item does not declare one.
pub const IMPLICIT_ACCESS: &str = "public";

/// A single documentation item.
///
/// Items are opaque records: only a handful of fields are interpreted while
/// preparing the context, everything else is handed to the templates as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a field mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Whether a field is present.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Group slugs of this item.
    ///
    /// `group` may be a single string or an array of strings. Items without a
    /// group belong to the `undefined` group.
    pub fn group_slugs(&self) -> Vec<String> {
        let slugs: Vec<String> = match self.0.get("group") {
            Some(Value::String(slug)) => vec![slug.clone()],
            Some(Value::Array(slugs)) => slugs
                .iter()
                .filter_map(|s| s.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        if slugs.is_empty() {
            vec![UNDEFINED_GROUP.to_string()]
        } else {
            slugs
        }
    }

    /// The group the item is indexed under.
    pub fn primary_group(&self) -> String {
        self.group_slugs()
            .into_iter()
            .next()
            .unwrap_or_else(|| UNDEFINED_GROUP.to_string())
    }

    /// Item type (`function`, `mixin`, `variable`, ...).
    ///
    /// A top-level `type` wins over the extractor's `context.type`.
    pub fn item_type(&self) -> &str {
        self.0
            .get("type")
            .and_then(Value::as_str)
            .or_else(|| {
                self.0
                    .get("context")
                    .and_then(|c| c.get("type"))
                    .and_then(Value::as_str)
            })
            .unwrap_or(UNDEFINED_GROUP)
    }

    /// Declared access level, `public` when absent.
    pub fn access(&self) -> &str {
        self.0
            .get("access")
            .and_then(Value::as_str)
            .unwrap_or(IMPLICIT_ACCESS)
    }

    /// Whether the item is an alias of another item.
    pub fn is_alias(&self) -> bool {
        match self.0.get("alias") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

impl From<Map<String, Value>> for Item {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
