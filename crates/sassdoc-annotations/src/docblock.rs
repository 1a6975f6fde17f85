//! Extraction of `@name text` annotations from a docblock.

use std::sync::LazyLock;

use regex::Regex;

/// An annotation occurrence before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnnotation {
    /// Annotation name without the `@`
    pub name: String,
    /// Text following the name, trimmed
    pub text: String,
    /// 1-based line within the comment
    pub line: usize,
}

static ANNOTATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:///|//|/\*\*|\*)?([ \t]*)@([A-Za-z][\w-]*)(?:\s+(.*?))?\s*(?:\*/)?\s*$")
        .expect("Invalid annotation regex")
});

/// Annotation whose following lines are code, not annotations.
const EXAMPLE: &str = "example";

/// Find every annotation line in a comment block.
///
/// Accepts `///` and `//` line comments as well as `/** ... */` blocks.
/// Lines that do not start with an annotation are description text and are
/// skipped. After `@example`, lines indented deeper than the `@example`
/// itself are example code, so `@include` or `@values` there is ignored.
pub fn scan_docblock(comment: &str) -> Vec<RawAnnotation> {
    let mut found = Vec::new();
    let mut example_indent: Option<usize> = None;

    for (idx, line) in comment.lines().enumerate() {
        let Some(caps) = ANNOTATION_RE.captures(line) else {
            continue;
        };

        let indent = caps[1].len();
        if example_indent.is_some_and(|outer| indent > outer) {
            continue;
        }

        let name = caps[2].to_string();
        example_indent = (name == EXAMPLE).then_some(indent);

        found.push(RawAnnotation {
            name,
            text: caps
                .get(3)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default(),
            line: idx + 1,
        });
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(name: &str, text: &str, line: usize) -> RawAnnotation {
        RawAnnotation {
            name: name.to_string(),
            text: text.to_string(),
            line,
        }
    }

    #[test]
    fn scans_line_comments() {
        let comment = "/// Border widths.\n/// @values 1px - hairline\n/// @values 2px\n/// @file tokens/_borders.scss\n";

        assert_eq!(
            scan_docblock(comment),
            vec![
                raw("values", "1px - hairline", 2),
                raw("values", "2px", 3),
                raw("file", "tokens/_borders.scss", 4),
            ]
        );
    }

    #[test]
    fn scans_block_comments() {
        let comment = "/**\n * Spacing scale.\n * @group spacing\n * @values 4px - small */";

        assert_eq!(
            scan_docblock(comment),
            vec![raw("group", "spacing", 3), raw("values", "4px - small", 4)]
        );
    }

    #[test]
    fn annotation_without_text() {
        assert_eq!(scan_docblock("/// @deprecated"), vec![raw("deprecated", "", 1)]);
    }

    #[test]
    fn skips_code_inside_examples() {
        let comment = "/// Button styles.\n/// @example scss\n///   .btn {\n///   @include button;\n///   @values 1px - not an annotation\n///   }\n/// @file buttons/_button.scss\n";

        assert_eq!(
            scan_docblock(comment),
            vec![
                raw("example", "scss", 2),
                raw("file", "buttons/_button.scss", 7),
            ]
        );
    }

    #[test]
    fn ignores_description_lines() {
        assert!(scan_docblock("/// Mentions an email me@example.com inline").is_empty());
    }
}
