//! Annotation descriptors for the documentation extractor.

use anyhow::{anyhow, bail, Result};
use sassdoc_annotations::AnnotationRegistry;
use serde_json::Value;

/// Describe the registered annotations, or parse one occurrence.
pub fn describe(registry: &AnnotationRegistry, parse: Option<&[String]>) -> Result<Value> {
    match parse {
        None => Ok(serde_json::to_value(registry.descriptors())?),
        Some([name, text]) => {
            let annotation = registry
                .get(name)
                .ok_or_else(|| anyhow!("Unknown annotation: @{}", name))?;
            Ok(annotation.parse(text))
        }
        Some(_) => bail!("--parse takes an annotation name and its text"),
    }
}

/// Run the annotations command.
pub fn run(parse: Option<Vec<String>>) -> Result<()> {
    let registry = AnnotationRegistry::default();
    let output = describe(&registry, parse.as_deref())?;

    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
