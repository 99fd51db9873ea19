//! Geometric grid transforms: translate, flip, rotate.
//!
//! Transforms operate on the full underlying square grid regardless of
//! any board mask; a masked cell's content simply stays invisible until
//! it moves back inside the mask. Each transform returns a complete new
//! snapshot and preserves the grid dimensions.

use crate::models::{Direction, Grid};

/// Shifts every cell's content one unit in the given direction.
///
/// Content moving past the boundary is discarded permanently; vacated
/// cells become empty. Repeated moves are therefore lossy at the edges.
#[must_use]
pub fn translate(grid: &Grid, direction: Direction) -> Grid {
    let n = grid.size();
    let (d_row, d_col) = direction.delta();
    let mut next = Grid::new(n);

    for (r, c, cell) in grid.iter() {
        if cell.is_none() {
            continue;
        }
        let nr = r as isize + d_row;
        let nc = c as isize + d_col;
        if nr >= 0 && nc >= 0 && (nr as usize) < n && (nc as usize) < n {
            next.set_cell(nr as usize, nc as usize, cell);
        }
    }
    next
}

/// Mirrors the grid across its vertical center line (reverses each row).
#[must_use]
pub fn flip_horizontal(grid: &Grid) -> Grid {
    let rows = grid
        .rows()
        .map(|row| row.iter().rev().copied().collect())
        .collect();
    Grid::from_rows(rows)
}

/// Mirrors the grid across its horizontal center line (reverses row order).
#[must_use]
pub fn flip_vertical(grid: &Grid) -> Grid {
    let mut rows: Vec<Vec<_>> = grid.rows().map(<[_]>::to_vec).collect();
    rows.reverse();
    Grid::from_rows(rows)
}

/// Rotates the grid 90° clockwise: destination (c, N-1-r) = source (r, c).
#[must_use]
pub fn rotate_clockwise(grid: &Grid) -> Grid {
    let n = grid.size();
    let mut next = Grid::new(n);
    for (r, c, cell) in grid.iter() {
        if cell.is_some() {
            next.set_cell(c, n - 1 - r, cell);
        }
    }
    next
}
