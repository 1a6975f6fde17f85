//! Theme renderer.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use sassdoc_extras::PreparedContext;

use crate::templates::{Page, Partials, TemplateEngine};
use crate::theme::Theme;

/// Result of a render.
#[derive(Debug)]
pub struct RenderResult {
    /// Number of pages written
    pub pages: usize,

    /// Number of asset files copied
    pub assets: usize,

    /// Total render time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur while rendering. All of them abort the render.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Theme not found: {0}")]
    MissingTheme(String),

    #[error("Failed to create output directory {path}: {message}")]
    CreateOutput { path: String, message: String },

    #[error("Failed to render template {template}: {message}")]
    TemplateError { template: String, message: String },

    #[error("Failed to copy assets: {0}")]
    AssetError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Renders a theme's pages and assets into an output directory.
pub struct ThemeRenderer {
    theme: Theme,
    templates: TemplateEngine,
}

impl ThemeRenderer {
    /// Create a renderer for a theme with the default partial slots.
    pub fn new(theme: Theme) -> Result<Self, RenderError> {
        Self::with_partials(theme, Partials::default())
    }

    /// Create a renderer with custom partial slots.
    pub fn with_partials(theme: Theme, partials: Partials) -> Result<Self, RenderError> {
        if !theme.exists() {
            return Err(RenderError::MissingTheme(theme.describe()));
        }

        Ok(Self {
            templates: TemplateEngine::new(theme.clone(), partials),
            theme,
        })
    }

    /// Render every page and copy the theme assets into `dest`.
    ///
    /// Pages are rendered in parallel and written only once all of them
    /// rendered successfully.
    pub fn render(&self, dest: &Path, ctx: &PreparedContext) -> Result<RenderResult, RenderError> {
        let start = Instant::now();

        fs::create_dir_all(dest).map_err(|e| RenderError::CreateOutput {
            path: dest.display().to_string(),
            message: e.to_string(),
        })?;

        let rendered: Vec<(Page, String)> = Page::ALL
            .par_iter()
            .map(|page| self.render_page(*page, ctx))
            .collect::<Result<Vec<_>, RenderError>>()?;

        let assets = self
            .theme
            .install_assets(&dest.join("assets"))
            .map_err(|e| RenderError::AssetError(e.to_string()))?;

        for (page, html) in &rendered {
            fs::write(dest.join(page.output_file()), html)
                .map_err(|e| RenderError::WriteError(format!("{}: {}", page.output_file(), e)))?;
        }

        let duration = start.elapsed();

        tracing::info!(
            "Rendered {} pages and {} assets in {}ms",
            rendered.len(),
            assets,
            duration.as_millis()
        );

        Ok(RenderResult {
            pages: rendered.len(),
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: dest.to_path_buf(),
        })
    }

    fn render_page(&self, page: Page, ctx: &PreparedContext) -> Result<(Page, String), RenderError> {
        let html = self
            .templates
            .render_page(page, ctx)
            .map_err(|e| RenderError::TemplateError {
                template: page.template_name().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("Rendered {}", page.output_file());

        Ok((page, html))
    }
}
