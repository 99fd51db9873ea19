//! Square bead grid with immutable snapshot semantics.
//!
//! Every mutating operation in the engine produces a *new* [`Grid`] value;
//! the previous snapshot is retained only inside history. Grids are always
//! fully materialized (no sparse representation), which keeps flood fill
//! and the geometric transforms simple at the supported sizes (N ≤ 29).

use crate::models::color::BeadColor;
use thiserror::Error;

/// A single grid cell: an empty peg or a placed bead.
pub type Cell = Option<BeadColor>;

/// Error raised by bounds-checked cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The requested coordinates lie outside the grid.
    #[error("cell ({row}, {col}) is out of bounds for a {size}x{size} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid side length.
        size: usize,
    },
}

/// A square N×N grid of bead cells.
///
/// All rows have length N by construction. Cloning performs a deep copy,
/// so snapshots held in history never alias each other's storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an all-empty grid with the given side length.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    /// Side length N of the grid.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true when `(row, col)` lies inside the grid.
    #[must_use]
    pub const fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Bounds-checked cell read.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] when the coordinates lie outside
    /// the grid. Painting paths that must tolerate stray coordinates use
    /// the engine's no-op semantics instead of this accessor.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        if self.in_bounds(row, col) {
            Ok(self.cells[row][col])
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    /// Returns a new grid equal to this one except for cell `(row, col)`.
    ///
    /// The returned grid is a full independent copy; mutating it can never
    /// leak into this snapshot. Coordinates outside the grid leave the
    /// copy identical to the input.
    #[must_use]
    pub fn with_cell(&self, row: usize, col: usize, value: Cell) -> Self {
        let mut next = self.clone();
        if next.in_bounds(row, col) {
            next.cells[row][col] = value;
        }
        next
    }

    /// Iterates over rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Iterates over all cells in row-major order as `(row, col, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, cell)| (r, c, *cell)))
    }

    /// Returns true when no bead has been placed anywhere.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(Option::is_none))
    }

    /// In-place write used by the engine while assembling a new snapshot
    /// it exclusively owns. Out-of-range writes are ignored, matching
    /// [`Grid::with_cell`].
    pub(crate) fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        if self.in_bounds(row, col) {
            self.cells[row][col] = value;
        }
    }

    /// Builds a grid from prepared rows. Used by format conversion and
    /// the transform engine, which construct complete row sets.
    ///
    /// Callers must pass a square row set; this is enforced with a debug
    /// assertion rather than a runtime error because every call site
    /// derives the rows from an existing square grid.
    #[must_use]
    pub(crate) fn from_rows(cells: Vec<Vec<Cell>>) -> Self {
        let size = cells.len();
        debug_assert!(cells.iter().all(|row| row.len() == size));
        Self { size, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_empty() {
        let grid = Grid::new(14);
        assert_eq!(grid.size(), 14);
        for r in 0..14 {
            for c in 0..14 {
                assert_eq!(grid.get(r, c).unwrap(), None);
            }
        }
        assert!(grid.is_blank());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(14);
        let err = grid.get(14, 0).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                row: 14,
                col: 0,
                size: 14
            }
        );
        assert!(grid.get(0, 99).is_err());
    }

    #[test]
    fn test_with_cell_sets_only_target() {
        let red = BeadColor::from_hex("#FF6B6B").unwrap();
        let grid = Grid::new(5);
        let painted = grid.with_cell(2, 3, Some(red));

        assert_eq!(painted.get(2, 3).unwrap(), Some(red));
        for (r, c, cell) in painted.iter() {
            if (r, c) != (2, 3) {
                assert_eq!(cell, None, "cell ({r}, {c}) should be untouched");
            }
        }
    }

    #[test]
    fn test_with_cell_never_aliases_input() {
        let red = BeadColor::from_hex("#FF6B6B").unwrap();
        let blue = BeadColor::from_hex("#4FC3F7").unwrap();

        let original = Grid::new(5).with_cell(1, 1, Some(red));
        let modified = original.with_cell(1, 1, Some(blue));

        assert_eq!(original.get(1, 1).unwrap(), Some(red));
        assert_eq!(modified.get(1, 1).unwrap(), Some(blue));
    }

    #[test]
    fn test_with_cell_out_of_bounds_is_noop() {
        let red = BeadColor::from_hex("#FF6B6B").unwrap();
        let grid = Grid::new(5);
        let unchanged = grid.with_cell(10, 10, Some(red));
        assert_eq!(unchanged, grid);
    }

    #[test]
    fn test_clear_cell_with_none() {
        let red = BeadColor::from_hex("#FF6B6B").unwrap();
        let grid = Grid::new(5).with_cell(0, 0, Some(red));
        let cleared = grid.with_cell(0, 0, None);
        assert!(cleared.is_blank());
    }

    #[test]
    fn test_iter_covers_every_cell_once() {
        let grid = Grid::new(3);
        let visited: Vec<(usize, usize)> = grid.iter().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(visited.len(), 9);
        assert_eq!(visited[0], (0, 0));
        assert_eq!(visited[8], (2, 2));
    }
}
