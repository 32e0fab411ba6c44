//! lc-theme: the fixed chart palette catalog.
//!
//! A process-wide constant table of named palettes, selected by integer
//! index. The catalog is renderer-independent: colors are plain RGB, and
//! frontends convert to their own color types.

pub mod catalog;

pub use catalog::{Rgb, THEMES, ThemeStyle, random_theme_index, theme, theme_or_default};
