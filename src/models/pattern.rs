//! Pattern work-file model.
//!
//! The portable JSON format produced and consumed at the system boundary:
//!
//! ```json
//! {
//!   "grid": [["", "#FF6B6B", ...], ...],
//!   "timestamp": "2025-01-01T00:00:00Z",
//!   "beadCount": 12
//! }
//! ```
//!
//! Empty cells serialize as `""`; beads as `#RRGGBB` uppercase. The
//! field layout is frozen for compatibility with files produced by other
//! frontends of this format.

use crate::models::color::BeadColor;
use crate::models::grid::{Cell, Grid};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading a pattern file.
///
/// All variants are user-visible format errors: the load is aborted and
/// the prior workspace state stays untouched.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The file is not valid pattern JSON.
    #[error("not a valid pattern file: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The grid does not match the active board size.
    #[error("pattern grid has {actual} rows but the {expected}x{expected} board needs {expected}")]
    SizeMismatch {
        /// Side length required by the active template.
        expected: usize,
        /// Row count found in the file.
        actual: usize,
    },
    /// A row does not have N cells.
    #[error("pattern row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Side length required by the active template.
        expected: usize,
        /// Cell count found in that row.
        actual: usize,
    },
    /// A cell value is neither empty nor a valid hex color.
    #[error("invalid cell value '{value}' at row {row}, column {col}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending cell string.
        value: String,
    },
}

/// On-disk representation of a saved pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFile {
    /// N rows of N cell strings (`""` or `#RRGGBB`).
    pub grid: Vec<Vec<String>>,
    /// Save time in UTC.
    pub timestamp: DateTime<Utc>,
    /// Count of non-empty cells at save time (informational; recomputed
    /// on load).
    pub bead_count: usize,
}

impl PatternFile {
    /// Captures a grid as a pattern file stamped with the current time.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        Self::with_timestamp(grid, Utc::now())
    }

    /// Captures a grid with an explicit timestamp.
    #[must_use]
    pub fn with_timestamp(grid: &Grid, timestamp: DateTime<Utc>) -> Self {
        let rows = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or_else(String::new, |color| color.to_hex()))
                    .collect()
            })
            .collect();
        let bead_count = grid.iter().filter(|(_, _, cell)| cell.is_some()).count();
        Self {
            grid: rows,
            timestamp,
            bead_count,
        }
    }

    /// Parses a pattern file from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Malformed`] for anything that is not the
    /// documented JSON shape.
    pub fn from_json(json: &str) -> Result<Self, PatternError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the pattern file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Serialization of this shape cannot practically fail, but the
    /// underlying serializer error is propagated rather than swallowed.
    pub fn to_json(&self) -> Result<String, PatternError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts the stored rows into a [`Grid`], validating against the
    /// active board size.
    ///
    /// # Errors
    ///
    /// Returns a size/row/cell format error when the file does not
    /// describe a well-formed `expected_size` grid. The stored
    /// `beadCount` is deliberately not validated here; consumers
    /// recompute it from the cells.
    pub fn to_grid(&self, expected_size: usize) -> Result<Grid, PatternError> {
        if self.grid.len() != expected_size {
            return Err(PatternError::SizeMismatch {
                expected: expected_size,
                actual: self.grid.len(),
            });
        }

        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(expected_size);
        for (r, row) in self.grid.iter().enumerate() {
            if row.len() != expected_size {
                return Err(PatternError::RaggedRow {
                    row: r,
                    expected: expected_size,
                    actual: row.len(),
                });
            }
            let mut cells: Vec<Cell> = Vec::with_capacity(expected_size);
            for (c, value) in row.iter().enumerate() {
                if value.is_empty() {
                    cells.push(None);
                } else {
                    let color =
                        BeadColor::from_hex(value).map_err(|_| PatternError::InvalidCell {
                            row: r,
                            col: c,
                            value: value.clone(),
                        })?;
                    cells.push(Some(color));
                }
            }
            rows.push(cells);
        }

        Ok(Grid::from_rows(rows))
    }

    /// Recomputes the bead count from the stored cells.
    #[must_use]
    pub fn actual_bead_count(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }
}
