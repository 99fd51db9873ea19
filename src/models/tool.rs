//! Editing tools, symmetry modes, and movement directions.

use std::fmt;

/// The active painting tool.
///
/// Brush and Fill place the currently selected color; Eraser clears
/// cells. The selected color itself lives in the session, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Paint single cells (with symmetry, when enabled).
    #[default]
    Brush,
    /// Clear single cells (with symmetry, when enabled).
    Eraser,
    /// Flood-fill a connected region (never mirrored).
    Fill,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Self; 3] = [Self::Brush, Self::Eraser, Self::Fill];

    /// Short label for status display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::Fill => "Fill",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Mirror mode applied to brush and eraser strokes.
///
/// Each mode defines the set of reflected coordinates written in addition
/// to the primary cell. Reflections are computed against the live grid's
/// maximum index (N-1), so the same stroke mirrors correctly on every
/// board size. Fill ignores symmetry entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryMode {
    /// No mirroring.
    #[default]
    None,
    /// Mirror across the vertical center line: (r, max-c).
    Horizontal,
    /// Mirror across the horizontal center line: (max-r, c).
    Vertical,
    /// Both axes plus the point reflection (max-r, max-c).
    Both,
    /// Eight-way: the Both set plus the four transposed points.
    Radial,
}

impl SymmetryMode {
    /// All modes in cycle order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Horizontal,
        Self::Vertical,
        Self::Both,
        Self::Radial,
    ];

    /// Short label for status display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
            Self::Both => "Both",
            Self::Radial => "Radial",
        }
    }

    /// The next mode in the cycle (wraps around).
    #[must_use]
    pub fn cycle(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Expands a primary cell into the full set of write targets.
    ///
    /// `max_index` is N-1 for the grid being painted. The primary cell is
    /// always first; reflections follow in a fixed order with duplicates
    /// removed (a stroke on a center line reflects onto itself).
    #[must_use]
    pub fn expand(&self, row: usize, col: usize, max_index: usize) -> Vec<(usize, usize)> {
        let mirrored_row = max_index.saturating_sub(row);
        let mirrored_col = max_index.saturating_sub(col);

        let candidates: Vec<(usize, usize)> = match self {
            Self::None => vec![(row, col)],
            Self::Horizontal => vec![(row, col), (row, mirrored_col)],
            Self::Vertical => vec![(row, col), (mirrored_row, col)],
            Self::Both => vec![
                (row, col),
                (row, mirrored_col),
                (mirrored_row, col),
                (mirrored_row, mirrored_col),
            ],
            Self::Radial => vec![
                (row, col),
                (row, mirrored_col),
                (mirrored_row, col),
                (mirrored_row, mirrored_col),
                (col, row),
                (col, mirrored_row),
                (mirrored_col, row),
                (mirrored_col, mirrored_row),
            ],
        };

        let mut targets = Vec::with_capacity(candidates.len());
        for point in candidates {
            if !targets.contains(&point) {
                targets.push(point);
            }
        }
        targets
    }
}

impl fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One-cell movement direction for the translate transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Shift content toward row 0.
    Up,
    /// Shift content toward the last row.
    Down,
    /// Shift content toward column 0.
    Left,
    /// Shift content toward the last column.
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Stable identifier used in CLI arguments.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Row/column delta as `(d_row, d_col)`.
    #[must_use]
    pub const fn delta(&self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
