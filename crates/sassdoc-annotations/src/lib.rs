//! Custom annotations for the documentation theme.
//!
//! Two annotations are provided:
//!
//! - `@values value - description`: allowed values of a variable, repeatable.
//! - `@file path/to/file.scss`: the file an item lives in.
//!
//! Parsers are exposed as descriptors for the documentation extractor, and a
//! small [`AnnotationRegistry`] applies them to items directly.

pub mod annotation;
pub mod docblock;
pub mod registry;

pub use annotation::{
    descriptors, parse_file, parse_values, Annotation, AnnotationDescriptor, ValueAnnotation,
};
pub use docblock::{scan_docblock, RawAnnotation};
pub use registry::{AnnotationError, AnnotationRegistry};
