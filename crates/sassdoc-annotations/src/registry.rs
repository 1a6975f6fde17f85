//! Registry applying annotations to documentation items.

use serde_json::Value;

use sassdoc_extras::Item;

use crate::annotation::{Annotation, AnnotationDescriptor};
use crate::docblock::scan_docblock;

/// Errors raised while applying an annotation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("Unknown annotation: @{0}")]
    Unknown(String),

    #[error("@{name} is not allowed on {item_type} items")]
    NotAllowedOn { name: String, item_type: String },
}

/// The set of annotations registered with the extractor.
#[derive(Debug, Clone)]
pub struct AnnotationRegistry {
    annotations: Vec<Annotation>,
}

impl Default for AnnotationRegistry {
    fn default() -> Self {
        Self {
            annotations: Annotation::ALL.to_vec(),
        }
    }
}

impl AnnotationRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            annotations: Vec::new(),
        }
    }

    /// Register an annotation. Registering twice is a no-op.
    pub fn register(&mut self, annotation: Annotation) -> &mut Self {
        if !self.annotations.contains(&annotation) {
            self.annotations.push(annotation);
        }
        self
    }

    /// Look up a registered annotation by name.
    pub fn get(&self, name: &str) -> Option<Annotation> {
        self.annotations.iter().copied().find(|a| a.name() == name)
    }

    /// Descriptors of the registered annotations.
    pub fn descriptors(&self) -> Vec<AnnotationDescriptor> {
        self.annotations.iter().map(Annotation::descriptor).collect()
    }

    /// Parse one occurrence of `@name text` and store it on the item.
    ///
    /// Repeatable annotations accumulate in an array; a second occurrence of a
    /// single annotation replaces the first.
    pub fn apply(&self, item: &mut Item, name: &str, text: &str) -> Result<(), AnnotationError> {
        let annotation = self
            .get(name)
            .ok_or_else(|| AnnotationError::Unknown(name.to_string()))?;

        let item_type = item.item_type();
        if !annotation.is_allowed_on(item_type) {
            return Err(AnnotationError::NotAllowedOn {
                name: name.to_string(),
                item_type: item_type.to_string(),
            });
        }

        let parsed = annotation.parse(text);

        if annotation.multiple() {
            match item.get_mut(name) {
                Some(Value::Array(values)) => values.push(parsed),
                _ => {
                    item.insert(name, Value::Array(vec![parsed]));
                }
            }
        } else if item.insert(name, parsed).is_some() {
            tracing::warn!("@{} appears more than once; keeping the last one", name);
        }

        Ok(())
    }

    /// Apply every registered annotation found in a docblock.
    ///
    /// Annotations this registry does not know are left to the extractor.
    /// Returns the number of annotations applied.
    pub fn annotate(&self, item: &mut Item, comment: &str) -> Result<usize, AnnotationError> {
        let mut applied = 0;
        for raw in scan_docblock(comment) {
            if self.get(&raw.name).is_none() {
                continue;
            }
            self.apply(item, &raw.name, &raw.text)?;
            applied += 1;
        }
        Ok(applied)
    }
}
