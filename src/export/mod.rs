//! Export functionality for bead patterns.
//!
//! This module provides tools to export patterns in shareable formats:
//! PNG renderings of the board and Unicode diagrams with color legends
//! for terminal preview.

pub mod diagram;
pub mod png;

pub use diagram::{generate_color_legend, render_pattern_diagram};
pub use png::{render_board, save_png, DEFAULT_EXPORT_SIZE};
