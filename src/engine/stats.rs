//! Pattern statistics: bead totals and per-color usage.

use crate::models::{BeadColor, Grid};

/// Number of non-empty cells.
#[must_use]
pub fn bead_count(grid: &Grid) -> usize {
    grid.iter().filter(|(_, _, cell)| cell.is_some()).count()
}

/// Per-color usage counts, most used first.
///
/// Ties are broken by first appearance in row-major order, so the result
/// is deterministic for a given grid and suitable for stable display and
/// JSON output.
#[must_use]
pub fn color_usage(grid: &Grid) -> Vec<(BeadColor, usize)> {
    let mut usage: Vec<(BeadColor, usize)> = Vec::new();
    for (_, _, cell) in grid.iter() {
        let Some(color) = cell else { continue };
        match usage.iter_mut().find(|(c, _)| *c == color) {
            Some((_, count)) => *count += 1,
            None => usage.push((color, 1)),
        }
    }
    // stable sort keeps first-appearance order within equal counts
    usage.sort_by(|a, b| b.1.cmp(&a.1));
    usage
}
