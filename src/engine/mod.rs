//! Grid manipulation engines: painting, transforms, quantization, presets,
//! and pattern statistics.
//!
//! Every operation here is pure with respect to the grid: callers pass a
//! [`Grid`](crate::models::Grid) in and receive a new one back, which keeps
//! the undo history a simple sequence of snapshots.

pub mod paint;
pub mod presets;
pub mod quantize;
pub mod stats;
pub mod transform;

pub use paint::{flood_fill, paint_cell, paint_with_symmetry};
pub use presets::Preset;
pub use quantize::{quantize_image, QuantizeError};
pub use stats::{bead_count, color_usage};
pub use transform::{flip_horizontal, flip_vertical, rotate_clockwise, translate};
