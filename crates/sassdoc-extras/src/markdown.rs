//! Markdown rendering of descriptive fields.
//!
//! Rendered HTML is stored next to the source field under an `html`-prefixed
//! key: `description` becomes `htmlDescription`, `output` becomes
//! `htmlOutput`, and so on. Source fields are left untouched.

use pulldown_cmark::{html, Options, Parser};
use serde_json::{Map, Value};

use crate::item::Item;

/// Item fields holding Markdown text.
const TEXT_FIELDS: &[&str] = &["description", "output", "deprecated"];

/// Item fields holding records (or arrays of records) with a `description`.
const RECORD_FIELDS: &[&str] = &[
    "parameter",
    "property",
    "example",
    "since",
    "return",
    "throw",
    "values",
];

/// Item fields holding a string or an array of strings.
const LIST_FIELDS: &[&str] = &["todo"];

/// Render Markdown source to HTML.
pub fn render(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(source, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// `description` -> `htmlDescription`.
pub fn html_key(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) => format!("html{}{}", c.to_uppercase(), chars.as_str()),
        None => "html".to_string(),
    }
}

/// Add `html*` fields to a single item.
pub fn apply_to_item(item: &mut Item) {
    for field in TEXT_FIELDS {
        if let Some(Value::String(text)) = item.get(field) {
            let rendered = render(text);
            item.insert(html_key(field), Value::String(rendered));
        }
    }

    for field in RECORD_FIELDS {
        match item.get_mut(field) {
            Some(Value::Object(record)) => apply_to_record(record),
            Some(Value::Array(records)) => {
                for record in records.iter_mut() {
                    if let Value::Object(record) = record {
                        apply_to_record(record);
                    }
                }
            }
            _ => {}
        }
    }

    for field in LIST_FIELDS {
        let rendered = match item.get(field) {
            Some(Value::String(text)) => Value::String(render(text)),
            Some(Value::Array(entries)) => Value::Array(
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(|text| Value::String(render(text)))
                    .collect(),
            ),
            _ => continue,
        };
        item.insert(html_key(field), rendered);
    }
}

/// Add `htmlDescription` to a context-level object such as `package`.
pub fn apply_to_record(record: &mut Map<String, Value>) {
    if let Some(Value::String(text)) = record.get("description") {
        let rendered = render(text);
        record.insert(html_key("description"), Value::String(rendered));
    }
}
