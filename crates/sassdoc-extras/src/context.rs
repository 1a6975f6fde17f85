//! Raw and prepared documentation contexts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::defaults::{DisplayConfig, DisplayOverrides, Groups};
use crate::index::{by_group_and_type, ByGroupAndType};
use crate::item::Item;
use crate::{display, group_name, markdown};

/// Keys the prepared context owns; callers cannot supply them.
const RESERVED_KEYS: &[&str] = &["_data", "byGroupAndType"];

/// Context as handed over by the documentation extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawContext {
    /// Display settings (merged over the defaults)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayOverrides>,

    /// Group titles by slug (merged over the defaults)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<BTreeMap<String, String>>,

    /// Flat list of documentation items
    pub data: Vec<Item>,

    /// Everything else (`package`, `description`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Context ready for the templates.
///
/// There is no `data` field: templates see the flat list as
/// `_data` and the indexed form as `byGroupAndType`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedContext {
    pub display: DisplayConfig,

    pub groups: Groups,

    #[serde(rename = "_data")]
    pub items: Vec<Item>,

    #[serde(rename = "byGroupAndType")]
    pub by_group_and_type: ByGroupAndType,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Errors that can occur when reading a context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Invalid context JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Context has no `data` key")]
    MissingData,

    #[error("Malformed context: {0}")]
    Malformed(String),
}

impl RawContext {
    /// Parse a context from JSON text.
    pub fn from_json(source: &str) -> Result<Self, ContextError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Build a context from a JSON value, checking its overall shape.
    pub fn from_value(value: Value) -> Result<Self, ContextError> {
        let Value::Object(map) = &value else {
            return Err(ContextError::Malformed(
                "context must be a JSON object".to_string(),
            ));
        };

        match map.get("data") {
            None => return Err(ContextError::MissingData),
            Some(Value::Array(items)) => {
                if let Some(pos) = items.iter().position(|i| !i.is_object()) {
                    return Err(ContextError::Malformed(format!(
                        "data[{}] is not an object",
                        pos
                    )));
                }
            }
            Some(_) => {
                return Err(ContextError::Malformed(
                    "`data` must be an array".to_string(),
                ))
            }
        }

        Ok(serde_json::from_value(value)?)
    }
}

/// Prepare a raw context for rendering.
///
/// Merges default display and group settings, renders Markdown fields, flags
/// items for display, resolves group titles, and indexes the items by group
/// and type.
pub fn prepare(raw: RawContext) -> PreparedContext {
    let RawContext {
        display,
        groups,
        data: mut items,
        mut extra,
    } = raw;

    let display = DisplayConfig::merged(display);
    let groups = Groups::merged(groups);

    for key in RESERVED_KEYS {
        if extra.remove(*key).is_some() {
            tracing::warn!("Ignoring reserved context key `{}`", key);
        }
    }

    if let Some(Value::Object(package)) = extra.get_mut("package") {
        markdown::apply_to_record(package);
    }
    markdown::apply_to_record(&mut extra);
    for item in items.iter_mut() {
        markdown::apply_to_item(item);
    }
    tracing::debug!("Rendered markdown for {} items", items.len());

    display::apply(&mut items, &display);
    group_name::apply(&mut items, &groups);

    let by_group_and_type = by_group_and_type(&items);
    tracing::debug!(
        "Indexed {} items into {} groups",
        by_group_and_type.len(),
        by_group_and_type.groups().len()
    );

    PreparedContext {
        display,
        groups,
        items,
        by_group_and_type,
        extra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn prepared(value: Value) -> PreparedContext {
        prepare(RawContext::from_value(value).unwrap())
    }

    #[test]
    fn applies_defaults_when_omitted() {
        let ctx = prepared(json!({ "data": [] }));

        assert_eq!(ctx.display, DisplayConfig::default());
        assert_eq!(ctx.groups, Groups::default());
        assert!(ctx.by_group_and_type.is_empty());
    }

    #[test]
    fn partial_groups_keep_defaults() {
        let ctx = prepared(json!({
            "groups": { "colors": "Colors" },
            "display": { "watermark": false },
            "data": []
        }));

        assert_eq!(ctx.groups.title("undefined"), "General");
        assert_eq!(ctx.groups.title("colors"), "Colors");
        assert!(!ctx.display.watermark);
        assert_eq!(ctx.display.access, vec!["public", "private"]);
    }

    #[test]
    fn renames_data_key() {
        let data = json!([
            { "name": "primary", "type": "variable", "group": ["colors"] },
            { "name": "rem", "type": "function" }
        ]);
        let ctx = prepared(json!({ "data": data.clone() }));

        let value = serde_json::to_value(&ctx).unwrap();

        assert!(value.get("data").is_none());
        assert_eq!(value["_data"].as_array().unwrap().len(), 2);
        assert_eq!(value["_data"][0]["name"], data[0]["name"]);
        assert_eq!(value["_data"][1]["name"], data[1]["name"]);
        assert_eq!(value["byGroupAndType"]["colors"]["variable"][0]["name"], json!("primary"));
        assert_eq!(value["byGroupAndType"]["undefined"]["function"][0]["name"], json!("rem"));
    }

    #[test]
    fn enriches_items() {
        let ctx = prepared(json!({
            "display": { "access": ["public"] },
            "data": [
                { "name": "a", "access": "private", "description": "Hidden" },
                { "name": "b", "group": "colors" }
            ]
        }));

        assert_eq!(ctx.items[0].get("display"), Some(&json!(false)));
        assert_eq!(ctx.items[0].get("htmlDescription"), Some(&json!("<p>Hidden</p>\n")));
        assert_eq!(ctx.items[1].get("display"), Some(&json!(true)));
        assert_eq!(ctx.items[1].get("groupName"), Some(&json!({ "colors": "colors" })));
    }

    #[test]
    fn renders_package_description() {
        let ctx = prepared(json!({
            "package": { "name": "tokens", "description": "Design *tokens*" },
            "data": []
        }));

        assert_eq!(
            ctx.extra["package"]["htmlDescription"],
            json!("<p>Design <em>tokens</em></p>\n")
        );
    }

    #[test]
    fn drops_reserved_keys() {
        let ctx = prepared(json!({ "data": [], "_data": "bogus" }));
        assert!(!ctx.extra.contains_key("_data"));
    }

    #[test]
    fn rejects_missing_data() {
        assert!(matches!(
            RawContext::from_value(json!({ "groups": {} })),
            Err(ContextError::MissingData)
        ));
    }

    #[test]
    fn rejects_malformed_data() {
        assert!(matches!(
            RawContext::from_value(json!({ "data": {} })),
            Err(ContextError::Malformed(_))
        ));
        assert!(matches!(
            RawContext::from_value(json!({ "data": [1] })),
            Err(ContextError::Malformed(_))
        ));
        assert!(matches!(
            RawContext::from_json("[]"),
            Err(ContextError::Malformed(_))
        ));
        assert!(matches!(
            RawContext::from_json("{"),
            Err(ContextError::Json(_))
        ));
    }
}
