//! Render command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sassdoc_extras::{prepare, RawContext};
use sassdoc_render::{Theme, ThemeRenderer};

use crate::config::load_config;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    data: PathBuf,
    dest: Option<PathBuf>,
    theme: Option<PathBuf>,
) -> Result<()> {
    tracing::info!("Rendering documentation from {}", data.display());

    let config = load_config(config_path)?;

    let source = fs::read_to_string(&data)
        .with_context(|| format!("Failed to read {}", data.display()))?;
    let mut raw = RawContext::from_json(&source)
        .with_context(|| format!("Failed to load documentation data from {}", data.display()))?;

    config.apply_to(&mut raw);
    let ctx = prepare(raw);

    let dest = dest.unwrap_or_else(|| config.dest());
    let theme = theme
        .or_else(|| config.theme_dir.as_ref().map(PathBuf::from))
        .map(Theme::new)
        .unwrap_or_else(Theme::bundled);

    tracing::debug!("Using {}", theme.describe());

    let renderer = ThemeRenderer::new(theme)?;
    let result = tokio::task::spawn_blocking(move || renderer.render(&dest, &ctx))
        .await
        .context("Render task failed")??;

    tracing::info!(
        "Rendered {} pages with {} assets in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
