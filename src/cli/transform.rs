//! Command for applying geometric transforms to a pattern file.

use crate::cli::common::{CliError, CliResult};
use crate::engine::{flip_horizontal, flip_vertical, rotate_clockwise, translate};
use crate::models::{Direction, Grid};
use crate::services::PatternService;
use clap::Args;
use std::path::PathBuf;

/// Apply move, flip, and rotate operations to a pattern file
#[derive(Debug, Clone, Args)]
pub struct TransformArgs {
    /// Path to pattern JSON file
    #[arg(short, long, value_name = "FILE")]
    pub pattern: PathBuf,

    /// Operations to apply in order: up, down, left, right, flip-h, flip-v, rotate
    #[arg(long = "op", value_name = "OP")]
    pub ops: Vec<String>,

    /// Board template id (guessed from the grid size when omitted)
    #[arg(short, long, value_name = "ID")]
    pub template: Option<String>,

    /// Output file path (defaults to rewriting the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// A single named transform operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransformOp {
    Move(Direction),
    FlipHorizontal,
    FlipVertical,
    RotateClockwise,
}

impl TransformOp {
    /// Parse an operation id from the command line
    fn from_id(id: &str) -> CliResult<Self> {
        match id {
            "up" => Ok(Self::Move(Direction::Up)),
            "down" => Ok(Self::Move(Direction::Down)),
            "left" => Ok(Self::Move(Direction::Left)),
            "right" => Ok(Self::Move(Direction::Right)),
            "flip-h" => Ok(Self::FlipHorizontal),
            "flip-v" => Ok(Self::FlipVertical),
            "rotate" => Ok(Self::RotateClockwise),
            _ => Err(CliError::validation(format!(
                "unknown operation '{id}'. Valid operations: up, down, left, right, flip-h, flip-v, rotate"
            ))),
        }
    }

    fn apply(self, grid: &Grid) -> Grid {
        match self {
            Self::Move(direction) => translate(grid, direction),
            Self::FlipHorizontal => flip_horizontal(grid),
            Self::FlipVertical => flip_vertical(grid),
            Self::RotateClockwise => rotate_clockwise(grid),
        }
    }
}

impl TransformArgs {
    /// Execute the transform command
    pub fn execute(&self) -> CliResult<()> {
        if self.ops.is_empty() {
            return Err(CliError::validation(
                "No operations given; pass --op at least once",
            ));
        }
        let ops = self
            .ops
            .iter()
            .map(|id| TransformOp::from_id(id))
            .collect::<CliResult<Vec<_>>>()?;

        // Load pattern
        let file = PatternService::load(&self.pattern)
            .map_err(|e| CliError::io(format!("Failed to load pattern: {e}")))?;
        let template = PatternService::resolve_template(&file, self.template.as_deref())
            .map_err(|e| CliError::validation(e.to_string()))?;
        let mut grid = file
            .to_grid(template.size())
            .map_err(|e| CliError::validation(format!("Invalid pattern: {e}")))?;

        // Apply in argument order
        for op in &ops {
            grid = op.apply(&grid);
        }

        let output = self.output.as_ref().unwrap_or(&self.pattern);
        PatternService::save_grid(&grid, output)
            .map_err(|e| CliError::io(format!("Failed to write pattern: {e}")))?;

        println!(
            "✓ Applied {} operation{}",
            ops.len(),
            if ops.len() == 1 { "" } else { "s" }
        );
        println!("  File: {}", output.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BeadColor;

    #[test]
    fn test_op_parsing() {
        assert_eq!(
            TransformOp::from_id("left").unwrap(),
            TransformOp::Move(Direction::Left)
        );
        assert_eq!(
            TransformOp::from_id("rotate").unwrap(),
            TransformOp::RotateClockwise
        );

        let err = TransformOp::from_id("spin").unwrap_err();
        assert!(err.to_string().contains("flip-h"));
    }

    #[test]
    fn test_ops_compose_in_order() {
        let red = BeadColor::from_hex("#FF6B6B").unwrap();
        let grid = Grid::new(14).with_cell(0, 0, Some(red));

        // move right then rotate: (0, 0) -> (0, 1) -> (1, 13)
        let moved = TransformOp::from_id("right").unwrap().apply(&grid);
        let rotated = TransformOp::from_id("rotate").unwrap().apply(&moved);
        assert_eq!(rotated.get(1, 13).unwrap(), Some(red));
    }
}
