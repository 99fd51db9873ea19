//! Painting operations: direct placement, symmetry mirroring, flood fill.
//!
//! Every function takes the current grid by reference and returns a new
//! snapshot; the input is never mutated. Stray coordinates (out of bounds
//! or outside the board mask) are tolerated as no-ops rather than errors,
//! since strokes arrive from interactive surfaces that may race ahead of
//! bounds validation.

use crate::models::{BeadColor, BoardTemplate, Cell, Grid, SymmetryMode};
use std::collections::VecDeque;
use tracing::debug;

/// Sets a single cell, returning the new snapshot.
///
/// Out-of-bounds or out-of-mask coordinates return an unchanged copy.
/// Passing `None` erases the cell.
#[must_use]
pub fn paint_cell(
    grid: &Grid,
    template: BoardTemplate,
    row: usize,
    col: usize,
    value: Cell,
) -> Grid {
    if !grid.in_bounds(row, col) || !template.contains(row, col) {
        return grid.clone();
    }
    grid.with_cell(row, col, value)
}

/// Paints the primary cell plus its symmetry reflections.
///
/// All reflections are computed against the live grid's maximum index and
/// write the same value as the primary cell onto one accumulating
/// snapshot, so the result is independent of write order. Reflections
/// landing outside the board mask are skipped individually.
#[must_use]
pub fn paint_with_symmetry(
    grid: &Grid,
    template: BoardTemplate,
    row: usize,
    col: usize,
    value: Cell,
    mode: SymmetryMode,
) -> Grid {
    let max_index = grid.size().saturating_sub(1);
    let mut next = grid.clone();
    for (r, c) in mode.expand(row, col, max_index) {
        if next.in_bounds(r, c) && template.contains(r, c) {
            next.set_cell(r, c, value);
        }
    }
    next
}

/// Four-connected flood fill from a seed cell.
///
/// Replaces the connected region sharing the seed's color with
/// `new_color`. Filling a cell that already holds `new_color` returns the
/// grid unchanged, which keeps redundant entries out of history. The
/// region color is captured once before any writes; traversal uses an
/// explicit visited set, bounds every neighbor against the live grid's
/// size, and never crosses the board mask.
#[must_use]
pub fn flood_fill(
    grid: &Grid,
    template: BoardTemplate,
    start_row: usize,
    start_col: usize,
    new_color: BeadColor,
) -> Grid {
    if !grid.in_bounds(start_row, start_col) || !template.contains(start_row, start_col) {
        return grid.clone();
    }

    let target = grid.get(start_row, start_col).unwrap_or_default();
    let replacement = Some(new_color);
    if target == replacement {
        return grid.clone();
    }

    let n = grid.size();
    let mut next = grid.clone();
    let mut visited = vec![vec![false; n]; n];
    let mut queue = VecDeque::new();

    visited[start_row][start_col] = true;
    queue.push_back((start_row, start_col));
    let mut filled = 0usize;

    while let Some((r, c)) = queue.pop_front() {
        next.set_cell(r, c, replacement);
        filled += 1;

        for (dr, dc) in [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)] {
            let nr = r as isize + dr;
            let nc = c as isize + dc;
            if nr < 0 || nc < 0 {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if nr >= n || nc >= n || visited[nr][nc] || !template.contains(nr, nc) {
                continue;
            }
            if grid.get(nr, nc).unwrap_or_default() != target {
                continue;
            }
            visited[nr][nc] = true;
            queue.push_back((nr, nc));
        }
    }

    debug!(filled, start_row, start_col, "flood fill applied");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> BeadColor {
        BeadColor::from_hex(s).unwrap()
    }

    #[test]
    fn test_paint_cell_sets_only_target() {
        let grid = Grid::new(14);
        let painted = paint_cell(&grid, BoardTemplate::SquareSmall, 3, 4, Some(hex("#FF6B6B")));

        assert_eq!(painted.get(3, 4).unwrap(), Some(hex("#FF6B6B")));
        let others = painted
            .iter()
            .filter(|&(r, c, cell)| (r, c) != (3, 4) && cell.is_some())
            .count();
        assert_eq!(others, 0);
    }

    #[test]
    fn test_paint_cell_out_of_bounds_is_noop() {
        let grid = Grid::new(14);
        let painted = paint_cell(&grid, BoardTemplate::SquareSmall, 99, 0, Some(hex("#FF6B6B")));
        assert_eq!(painted, grid);
    }

    #[test]
    fn test_paint_cell_outside_circle_mask_is_noop() {
        let grid = Grid::new(29);
        // (0, 0) is a corner outside the circular mask
        let painted = paint_cell(&grid, BoardTemplate::CircleLarge, 0, 0, Some(hex("#FF6B6B")));
        assert_eq!(painted, grid);

        // the center is inside
        let painted = paint_cell(&grid, BoardTemplate::CircleLarge, 14, 14, Some(hex("#FF6B6B")));
        assert_eq!(painted.get(14, 14).unwrap(), Some(hex("#FF6B6B")));
    }

    #[test]
    fn test_paint_cell_none_erases() {
        let grid = Grid::new(14).with_cell(2, 2, Some(hex("#FF6B6B")));
        let erased = paint_cell(&grid, BoardTemplate::SquareSmall, 2, 2, None);
        assert!(erased.is_blank());
    }

    #[test]
    fn test_symmetry_both_covers_four_quadrants() {
        let grid = Grid::new(29);
        let painted = paint_with_symmetry(
            &grid,
            BoardTemplate::SquareLarge,
            5,
            5,
            Some(hex("#FF6B6B")),
            SymmetryMode::Both,
        );

        for (r, c) in [(5, 5), (5, 23), (23, 5), (23, 23)] {
            assert_eq!(painted.get(r, c).unwrap(), Some(hex("#FF6B6B")), "({r},{c})");
        }
        let set = painted.iter().filter(|(_, _, cell)| cell.is_some()).count();
        assert_eq!(set, 4);
    }

    #[test]
    fn test_symmetry_radial_covers_eight_points() {
        let grid = Grid::new(29);
        let painted = paint_with_symmetry(
            &grid,
            BoardTemplate::SquareLarge,
            3,
            7,
            Some(hex("#4FC3F7")),
            SymmetryMode::Radial,
        );
        let set = painted.iter().filter(|(_, _, cell)| cell.is_some()).count();
        assert_eq!(set, 8);
        assert_eq!(painted.get(7, 3).unwrap(), Some(hex("#4FC3F7")));
        assert_eq!(painted.get(21, 25).unwrap(), Some(hex("#4FC3F7")));
    }

    #[test]
    fn test_symmetry_erases_reflections_too() {
        let grid = paint_with_symmetry(
            &Grid::new(29),
            BoardTemplate::SquareLarge,
            5,
            5,
            Some(hex("#FF6B6B")),
            SymmetryMode::Both,
        );
        let erased = paint_with_symmetry(
            &grid,
            BoardTemplate::SquareLarge,
            5,
            5,
            None,
            SymmetryMode::Both,
        );
        assert!(erased.is_blank());
    }

    #[test]
    fn test_symmetry_none_paints_single_cell() {
        let painted = paint_with_symmetry(
            &Grid::new(14),
            BoardTemplate::SquareSmall,
            2,
            3,
            Some(hex("#FF6B6B")),
            SymmetryMode::None,
        );
        let set = painted.iter().filter(|(_, _, cell)| cell.is_some()).count();
        assert_eq!(set, 1);
    }

    #[test]
    fn test_flood_fill_replaces_connected_region() {
        let red = hex("#FF6B6B");
        let blue = hex("#4FC3F7");
        // an L-shaped red region plus a detached red cell
        let grid = Grid::new(6)
            .with_cell(0, 0, Some(red))
            .with_cell(1, 0, Some(red))
            .with_cell(1, 1, Some(red))
            .with_cell(4, 4, Some(red));

        let filled = flood_fill(&grid, BoardTemplate::SquareSmall, 0, 0, blue);

        assert_eq!(filled.get(0, 0).unwrap(), Some(blue));
        assert_eq!(filled.get(1, 0).unwrap(), Some(blue));
        assert_eq!(filled.get(1, 1).unwrap(), Some(blue));
        // the detached cell keeps its color
        assert_eq!(filled.get(4, 4).unwrap(), Some(red));
    }

    #[test]
    fn test_flood_fill_noop_when_seed_already_target_color() {
        let red = hex("#FF6B6B");
        let grid = Grid::new(6).with_cell(2, 2, Some(red));
        let result = flood_fill(&grid, BoardTemplate::SquareSmall, 2, 2, red);
        assert_eq!(result, grid);
    }

    #[test]
    fn test_flood_fill_is_idempotent() {
        let blue = hex("#4FC3F7");
        let grid = Grid::new(8);
        let once = flood_fill(&grid, BoardTemplate::SquareSmall, 3, 3, blue);
        let twice = flood_fill(&once, BoardTemplate::SquareSmall, 3, 3, blue);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_flood_fill_does_not_cross_diagonals() {
        let red = hex("#FF6B6B");
        let blue = hex("#4FC3F7");
        // two red cells touching only at a corner
        let grid = Grid::new(5)
            .with_cell(0, 0, Some(red))
            .with_cell(1, 1, Some(red));

        let filled = flood_fill(&grid, BoardTemplate::SquareSmall, 0, 0, blue);
        assert_eq!(filled.get(0, 0).unwrap(), Some(blue));
        assert_eq!(filled.get(1, 1).unwrap(), Some(red));
    }

    #[test]
    fn test_flood_fill_stops_at_region_border() {
        let black = hex("#000000");
        let blue = hex("#4FC3F7");
        // a black wall across row 2 of a 5x5 grid
        let mut grid = Grid::new(5);
        for c in 0..5 {
            grid = grid.with_cell(2, c, Some(black));
        }

        let filled = flood_fill(&grid, BoardTemplate::SquareSmall, 0, 0, blue);
        for c in 0..5 {
            assert_eq!(filled.get(0, c).unwrap(), Some(blue));
            assert_eq!(filled.get(2, c).unwrap(), Some(black));
            assert_eq!(filled.get(4, c).unwrap(), None);
        }
    }

    #[test]
    fn test_flood_fill_empty_grid_fills_whole_board() {
        let blue = hex("#4FC3F7");
        let grid = Grid::new(14);
        let filled = flood_fill(&grid, BoardTemplate::SquareSmall, 13, 13, blue);
        let set = filled.iter().filter(|(_, _, cell)| cell.is_some()).count();
        assert_eq!(set, 14 * 14);
    }

    #[test]
    fn test_flood_fill_respects_circle_mask() {
        let blue = hex("#4FC3F7");
        let grid = Grid::new(29);
        let filled = flood_fill(&grid, BoardTemplate::CircleLarge, 14, 14, blue);

        let set = filled.iter().filter(|(_, _, cell)| cell.is_some()).count();
        assert_eq!(set, BoardTemplate::CircleLarge.peg_count());
        // corners stay untouched
        assert_eq!(filled.get(0, 0).unwrap(), None);
        assert_eq!(filled.get(28, 28).unwrap(), None);
    }

    #[test]
    fn test_flood_fill_out_of_bounds_seed_is_noop() {
        let grid = Grid::new(14);
        let result = flood_fill(&grid, BoardTemplate::SquareSmall, 99, 99, hex("#FF6B6B"));
        assert_eq!(result, grid);
    }

    #[test]
    fn test_flood_fill_bounds_against_live_grid_size() {
        // a 14x14 fill must stay inside 14x14 even though other templates
        // are larger; the whole board fills and nothing panics
        let blue = hex("#4FC3F7");
        let filled = flood_fill(&Grid::new(14), BoardTemplate::SquareSmall, 0, 13, blue);
        assert_eq!(
            filled.iter().filter(|(_, _, cell)| cell.is_some()).count(),
            196
        );
    }
}
