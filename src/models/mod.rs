//! Data models for grids, colors, palettes, templates, and pattern files.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod color;
pub mod grid;
pub mod history;
pub mod palette;
pub mod pattern;
pub mod template;
pub mod tool;

// Re-export all model types
pub use color::{BeadColor, ParseColorError};
pub use grid::{Cell, Grid, GridError};
pub use history::{History, HistoryError, HISTORY_LIMIT};
pub use palette::{
    nearest_color, ColorGroup, Palette, PaletteError, BASE_COLORS, DEFAULT_COLOR, DEFAULT_GROUP_ID,
};
pub use pattern::{PatternError, PatternFile};
pub use template::BoardTemplate;
pub use tool::{Direction, SymmetryMode, Tool};
