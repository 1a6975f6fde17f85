//! Context preparation for the documentation theme.
//!
//! Takes the raw context produced by the documentation extractor, merges the
//! default display and group configuration, renders Markdown descriptions,
//! computes display flags and group titles, and indexes the items by group and
//! type so templates can walk them directly.

pub mod context;
pub mod defaults;
pub mod display;
pub mod group_name;
pub mod index;
pub mod item;
pub mod markdown;

pub use context::{prepare, ContextError, PreparedContext, RawContext};
pub use defaults::{DisplayConfig, DisplayOverrides, Groups};
pub use index::{by_group_and_type, ByGroupAndType};
pub use item::Item;
