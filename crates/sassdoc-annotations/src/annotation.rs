//! Annotation parsers and their descriptors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One `@values` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueAnnotation {
    /// Allowed value
    pub value: String,
    /// What the value means, if documented
    pub description: Option<String>,
}

/// The annotations this theme understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
    /// `@values value - description`
    Values,
    /// `@file path`
    File,
}

/// What the documentation extractor needs to know about an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationDescriptor {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_on: Option<&'static [&'static str]>,
    pub multiple: bool,
}

impl Annotation {
    /// Every annotation, in registration order.
    pub const ALL: [Annotation; 2] = [Annotation::Values, Annotation::File];

    /// Annotation name as written after `@`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Values => "values",
            Self::File => "file",
        }
    }

    /// Look up an annotation by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Item types the annotation may appear on; `None` means any.
    pub fn allowed_on(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::Values => Some(&["variable"]),
            Self::File => None,
        }
    }

    /// Whether the annotation may repeat on one item.
    pub fn multiple(&self) -> bool {
        matches!(self, Self::Values)
    }

    /// Whether the annotation may appear on items of the given type.
    pub fn is_allowed_on(&self, item_type: &str) -> bool {
        self.allowed_on()
            .map_or(true, |types| types.iter().any(|t| *t == item_type))
    }

    /// Parse the text of one occurrence.
    pub fn parse(&self, text: &str) -> Value {
        match self {
            Self::Values => {
                let parsed = parse_values(text);
                serde_json::json!({
                    "value": parsed.value,
                    "description": parsed.description,
                })
            }
            Self::File => Value::String(parse_file(text)),
        }
    }

    pub fn descriptor(&self) -> AnnotationDescriptor {
        AnnotationDescriptor {
            name: self.name(),
            allowed_on: self.allowed_on(),
            multiple: self.multiple(),
        }
    }
}

/// Descriptors for every annotation.
pub fn descriptors() -> Vec<AnnotationDescriptor> {
    Annotation::ALL.iter().map(Annotation::descriptor).collect()
}

/// Parse `value - description`.
///
/// Splits on the first `-`. The description is `None` when there is no `-`
/// or nothing but whitespace follows it.
pub fn parse_values(text: &str) -> ValueAnnotation {
    let (value, description) = match text.split_once('-') {
        Some((value, rest)) => (value, Some(rest.trim())),
        None => (text, None),
    };

    ValueAnnotation {
        value: value.trim().to_string(),
        description: description
            .filter(|d| !d.is_empty())
            .map(str::to_string),
    }
}

/// Parse `@file`: the text is the file name.
pub fn parse_file(text: &str) -> String {
    text.to_string()
}
