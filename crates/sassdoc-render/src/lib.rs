//! Static renderer for the documentation theme.
//!
//! Copies the theme's assets and renders its five pages from a prepared
//! context.

pub mod assets;
pub mod renderer;
pub mod templates;
pub mod theme;

pub use renderer::{RenderError, RenderResult, ThemeRenderer};
pub use templates::{Page, Partials, TemplateEngine};
pub use theme::Theme;
