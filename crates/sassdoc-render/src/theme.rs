//! Theme sources: the theme compiled into the binary, or a directory on disk.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::assets::{copy_tree, write_files};

/// Views of the bundled theme, keyed by template name.
const BUNDLED_VIEWS: &[(&str, &str)] = &[
    ("index", include_str!("../theme/views/index.jinja")),
    ("grid", include_str!("../theme/views/grid.jinja")),
    ("theme", include_str!("../theme/views/theme.jinja")),
    ("view", include_str!("../theme/views/view.jinja")),
    ("utils", include_str!("../theme/views/utils.jinja")),
    ("includes/head", include_str!("../theme/views/includes/head.jinja")),
    ("includes/header", include_str!("../theme/views/includes/header.jinja")),
    ("includes/item", include_str!("../theme/views/includes/item.jinja")),
    ("includes/footer", include_str!("../theme/views/includes/footer.jinja")),
];

/// Assets of the bundled theme, keyed by path under `assets/`.
const BUNDLED_ASSETS: &[(&str, &str)] = &[
    ("css/main.css", include_str!("../theme/assets/css/main.css")),
    ("js/main.js", include_str!("../theme/assets/js/main.js")),
];

/// Extension of template files under `views/`.
pub const TEMPLATE_EXT: &str = "jinja";

/// Where a theme's views and assets come from.
///
/// A theme directory holds `views/` with page templates and partials and
/// `assets/` copied verbatim into the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Theme {
    /// The theme compiled into this crate
    #[default]
    Bundled,

    /// A theme directory on disk
    Dir(PathBuf),
}

impl Theme {
    /// Theme rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::Dir(root.into())
    }

    /// The theme shipped with this crate.
    pub fn bundled() -> Self {
        Self::Bundled
    }

    /// Human-readable origin, for logs and errors.
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled theme".to_string(),
            Self::Dir(root) => root.display().to_string(),
        }
    }

    /// Whether the theme has a views directory to render from.
    pub fn exists(&self) -> bool {
        match self {
            Self::Bundled => true,
            Self::Dir(root) => root.join("views").is_dir(),
        }
    }

    /// Source of the view `name` (`index`, `includes/item`, ...).
    ///
    /// `Ok(None)` when the theme has no such view or the name escapes
    /// `views/`.
    pub fn load_view(&self, name: &str) -> io::Result<Option<String>> {
        if Path::new(name)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Ok(None);
        }

        match self {
            Self::Bundled => Ok(BUNDLED_VIEWS
                .iter()
                .find(|(view, _)| *view == name)
                .map(|(_, source)| source.to_string())),
            Self::Dir(root) => {
                let path = root.join("views").join(format!("{}.{}", name, TEMPLATE_EXT));
                match fs::read_to_string(&path) {
                    Ok(source) => Ok(Some(source)),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Put the theme assets under `dest`. Returns the number of files.
    pub fn install_assets(&self, dest: &Path) -> io::Result<usize> {
        match self {
            Self::Bundled => write_files(BUNDLED_ASSETS, dest),
            Self::Dir(root) => copy_tree(&root.join("assets"), dest),
        }
    }
}
