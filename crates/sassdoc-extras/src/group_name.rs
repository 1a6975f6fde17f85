//! Group titles.
//!
//! Items refer to groups by slug (`@group colors`). The theme configuration
//! maps slugs to titles; each item gets a `groupName` object with the title of
//! every group it belongs to.

use serde_json::{Map, Value};

use crate::defaults::Groups;
use crate::item::Item;

/// Normalize `group` to an array of slugs and attach `groupName`.
pub fn apply(items: &mut [Item], groups: &Groups) {
    for item in items.iter_mut() {
        let slugs = item.group_slugs();

        let mut names = Map::new();
        for slug in &slugs {
            names.insert(slug.clone(), Value::String(groups.title(slug).to_string()));
        }

        item.insert(
            "group",
            Value::Array(slugs.into_iter().map(Value::String).collect()),
        );
        item.insert("groupName", Value::Object(names));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn resolves_titles_with_fallback() {
        let mut titles = BTreeMap::new();
        titles.insert("colors".to_string(), "Colors".to_string());
        let groups = Groups::merged(Some(titles));

        let mut items: Vec<Item> = vec![
            serde_json::from_value(json!({ "group": ["colors", "legacy"] })).unwrap(),
            serde_json::from_value(json!({ "name": "ungrouped" })).unwrap(),
        ];

        apply(&mut items, &groups);

        assert_eq!(
            items[0].get("groupName"),
            Some(&json!({ "colors": "Colors", "legacy": "legacy" }))
        );
        assert_eq!(items[1].get("group"), Some(&json!(["undefined"])));
        assert_eq!(items[1].get("groupName"), Some(&json!({ "undefined": "General" })));
    }
}
