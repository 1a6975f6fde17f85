//! Per-item display flags.

use serde_json::Value;

use crate::defaults::DisplayConfig;
use crate::item::Item;

/// Whether an item is displayed under the given configuration.
///
/// Items are shown when their access level is listed in `config.access` and,
/// for aliases, when `config.alias` is enabled.
pub fn is_displayed(item: &Item, config: &DisplayConfig) -> bool {
    config.shows_access(item.access()) && (config.alias || !item.is_alias())
}

/// Attach a boolean `display` field to every item.
pub fn apply(items: &mut [Item], config: &DisplayConfig) {
    for item in items.iter_mut() {
        let shown = is_displayed(item, config);
        item.insert("display", Value::Bool(shown));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn shows_public_and_private_by_default() {
        let config = DisplayConfig::default();

        assert!(is_displayed(&item(json!({})), &config));
        assert!(is_displayed(&item(json!({ "access": "private" })), &config));
        assert!(!is_displayed(&item(json!({ "access": "internal" })), &config));
    }

    #[test]
    fn hides_aliases_unless_enabled() {
        let alias = item(json!({ "alias": "original" }));

        assert!(!is_displayed(&alias, &DisplayConfig::default()));

        let config = DisplayConfig {
            alias: true,
            ..Default::default()
        };
        assert!(is_displayed(&alias, &config));
    }

    #[test]
    fn respects_restricted_access() {
        let config = DisplayConfig {
            access: vec!["public".to_string()],
            ..Default::default()
        };
        let mut items = vec![item(json!({ "access": "public" })), item(json!({ "access": "private" }))];

        apply(&mut items, &config);

        assert_eq!(items[0].get("display"), Some(&json!(true)));
        assert_eq!(items[1].get("display"), Some(&json!(false)));
    }
}
