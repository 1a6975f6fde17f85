//! Template engine for rendering theme pages.

use minijinja::{AutoEscape, Environment, Error, ErrorKind, Value};
use serde::Serialize;

use crate::theme::Theme;

/// A page of the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Index,
    Grid,
    Theme,
    View,
    Utils,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Index, Page::Grid, Page::Theme, Page::View, Page::Utils];

    /// View the page renders from.
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Grid => "grid",
            Self::Theme => "theme",
            Self::View => "view",
            Self::Utils => "utils",
        }
    }

    /// File written to the output directory.
    pub fn output_file(&self) -> &'static str {
        match self {
            Self::Index => "index.html",
            Self::Grid => "grid.html",
            Self::Theme => "theme.html",
            Self::View => "view.html",
            Self::Utils => "utils.html",
        }
    }
}

/// Partial slots available to every page.
///
/// Pages include partials by slot name (`{% include "item" %}`); each slot
/// points at a view of the theme. Several slots may share a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partials {
    slots: Vec<(&'static str, &'static str)>,
}

impl Default for Partials {
    fn default() -> Self {
        Self {
            slots: vec![
                ("head", "includes/head"),
                ("header", "includes/header"),
                ("navigation", "includes/header"),
                ("item", "includes/item"),
                ("footer", "includes/footer"),
            ],
        }
    }
}

impl Partials {
    /// Template a slot points at.
    pub fn resolve(&self, slot: &str) -> Option<&'static str> {
        self.slots
            .iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, template)| *template)
    }

    /// Slot names in declaration order.
    pub fn slots(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|(name, _)| *name)
    }
}

/// Template engine backed by a theme's views.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine loading views from `theme`, with partials resolved
    /// by slot name.
    pub fn new(theme: Theme, partials: Partials) -> Self {
        let mut env = Environment::new();

        env.set_loader(move |name: &str| {
            let view = partials.resolve(name).unwrap_or(name);
            theme.load_view(view).map_err(|e| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("could not read view {} of {}", view, theme.describe()),
                )
                .with_source(e)
            })
        });

        // Templates have no `.html` suffix, so escaping is switched on explicitly.
        env.set_auto_escape_callback(|_: &str| AutoEscape::Html);

        env.add_filter("slugify", slugify);
        env.add_filter("plural", plural);
        env.add_filter("display_name", display_name);
        env.add_filter("item_type", item_type);
        env.add_filter("anchor", anchor);

        Self { env }
    }

    /// Render a page with the given context.
    pub fn render_page<S: Serialize>(&self, page: Page, context: &S) -> Result<String, Error> {
        let tmpl = self.env.get_template(page.template_name())?;
        tmpl.render(context)
    }
}

/// Lowercase `text` and join its alphanumeric runs with `-`.
///
/// Whitespace, `-` and `_` separate runs; other punctuation is dropped.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Section heading for an item type: `mixin` -> `mixins`.
fn plural(item_type: &str) -> String {
    match item_type {
        "css" => "CSS".to_string(),
        "undefined" => "other".to_string(),
        t if t.ends_with('s') => t.to_string(),
        t => format!("{}s", t),
    }
}

fn str_attr(value: &Value, key: &str) -> Option<String> {
    value
        .get_attr(key)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
}

/// Name of an item: `name`, else `context.name`.
fn display_name(item: Value) -> String {
    str_attr(&item, "name")
        .or_else(|| {
            item.get_attr("context")
                .ok()
                .and_then(|ctx| str_attr(&ctx, "name"))
        })
        .unwrap_or_default()
}

/// Type of an item: `type`, else `context.type`.
fn item_type(item: Value) -> String {
    str_attr(&item, "type")
        .or_else(|| {
            item.get_attr("context")
                .ok()
                .and_then(|ctx| str_attr(&ctx, "type"))
        })
        .unwrap_or_else(|| "undefined".to_string())
}

/// Fragment identifier of an item: `<type>-<name>`.
fn anchor(item: Value) -> String {
    let name = slugify(&display_name(item.clone()));
    format!("{}-{}", item_type(item), name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use crate::theme::TEMPLATE_EXT;
    use minijinja::context;
    use tempfile::tempdir;

    fn write(root: &Path, name: &str, source: &str) {
        let path = root.join("views").join(format!("{}.{}", name, TEMPLATE_EXT));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, source).unwrap();
    }

    fn engine(root: &Path) -> TemplateEngine {
        TemplateEngine::new(Theme::new(root), Partials::default())
    }

    #[test]
    fn page_files() {
        let names: Vec<_> = Page::ALL.iter().map(|p| p.output_file()).collect();
        assert_eq!(
            names,
            vec!["index.html", "grid.html", "theme.html", "view.html", "utils.html"]
        );
    }

    #[test]
    fn navigation_shares_header() {
        let partials = Partials::default();
        assert_eq!(partials.resolve("navigation"), Some("includes/header"));
        assert_eq!(partials.resolve("header"), Some("includes/header"));
        assert_eq!(partials.resolve("sidebar"), None);
        assert_eq!(partials.slots().count(), 5);
    }

    #[test]
    fn resolves_partials_by_slot() {
        let temp = tempdir().unwrap();
        write(temp.path(), "index", "{% include \"navigation\" %}|{% include \"footer\" %}");
        write(temp.path(), "includes/header", "nav:{{ title }}");
        write(temp.path(), "includes/footer", "foot");

        let engine = engine(temp.path());
        let html = engine
            .render_page(Page::Index, &context! { title => "Docs" })
            .unwrap();

        assert_eq!(html, "nav:Docs|foot");
    }

    #[test]
    fn escapes_html_by_default() {
        let temp = tempdir().unwrap();
        write(temp.path(), "grid", "{{ raw }}|{{ raw|safe }}");

        let engine = engine(temp.path());
        let html = engine
            .render_page(Page::Grid, &context! { raw => "<b>" })
            .unwrap();

        assert_eq!(html, "&lt;b&gt;|<b>");
    }

    #[test]
    fn missing_template_is_an_error() {
        let temp = tempdir().unwrap();
        let engine = engine(temp.path());

        let err = engine.render_page(Page::Utils, &context! {}).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TemplateNotFound);
    }

    #[test]
    fn item_filters() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "view",
            "{{ item|display_name }} {{ item|item_type|plural }} {{ item|anchor }}",
        );

        let engine = engine(temp.path());
        let html = engine
            .render_page(
                Page::View,
                &context! { item => serde_json::json!({ "context": { "type": "mixin", "name": "Button Reset" } }) },
            )
            .unwrap();

        assert_eq!(html, "Button Reset mixins mixin-button-reset");
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("API Reference"), "api-reference");
        assert_eq!(slugify("Button (Primary)"), "button-primary");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("font_size--Large"), "font-size-large");
        assert_eq!(slugify("50%"), "50");
    }

    #[test]
    fn renders_from_bundled_theme() {
        let engine = TemplateEngine::new(Theme::bundled(), Partials::default());
        let html = engine
            .render_page(
                Page::Index,
                &context! { display => context! { watermark => false }, byGroupAndType => context! {} },
            )
            .unwrap();

        assert!(html.contains("<html"));
        assert!(html.contains("Nothing documented yet."));
    }
}
