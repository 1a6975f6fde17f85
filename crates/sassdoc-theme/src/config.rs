//! Theme configuration file (`.sassdocrc`).
//!
//! YAML or JSON by default, TOML when the file name ends in `.toml`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use sassdoc_extras::{DisplayOverrides, RawContext};

/// Output directory used when neither the command line nor the config sets one.
pub const DEFAULT_DEST: &str = "sassdoc";

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Output directory
    #[serde(default)]
    pub dest: Option<String>,

    /// Theme directory overriding the bundled theme
    #[serde(default)]
    pub theme_dir: Option<String>,

    /// Display settings
    #[serde(default)]
    pub display: Option<DisplayOverrides>,

    /// Group titles by slug
    #[serde(default)]
    pub groups: Option<BTreeMap<String, String>>,
}

impl ConfigFile {
    /// Parse configuration text, picking the format from the file name.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");

        let config = if is_toml {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        } else if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(content)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        };

        Ok(config)
    }

    /// Output directory from the config, or the default.
    pub fn dest(&self) -> PathBuf {
        PathBuf::from(self.dest.as_deref().unwrap_or(DEFAULT_DEST))
    }

    /// Layer configured display settings and group titles over the ones in
    /// the documentation context. Configured keys win.
    pub fn apply_to(&self, ctx: &mut RawContext) {
        if let Some(display) = &self.display {
            let current = ctx.display.take().unwrap_or_default();
            let mut extra = current.extra;
            extra.extend(display.extra.clone());

            ctx.display = Some(DisplayOverrides {
                access: display.access.clone().or(current.access),
                alias: display.alias.or(current.alias),
                watermark: display.watermark.or(current.watermark),
                extra,
            });
        }

        if let Some(groups) = &self.groups {
            ctx.groups
                .get_or_insert_with(BTreeMap::new)
                .extend(groups.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
}

/// Load the configuration file if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = ConfigFile::parse(path, &content)?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}
