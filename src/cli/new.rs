//! Command for creating blank pattern files.

use crate::cli::common::{CliError, CliResult};
use crate::models::{BoardTemplate, Grid};
use crate::services::PatternService;
use clap::Args;
use std::path::PathBuf;

/// Create a blank pattern file for a board template
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Board template id
    #[arg(short, long, value_name = "ID", default_value = "square-large")]
    pub template: String,

    /// Output pattern file path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self) -> CliResult<()> {
        let template = BoardTemplate::from_id(&self.template)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let grid = Grid::new(template.size());
        PatternService::save_grid(&grid, &self.output)
            .map_err(|e| CliError::io(format!("Failed to write pattern: {e}")))?;

        println!(
            "✓ Created blank {} pattern ({}x{} cells)",
            template.display_name(),
            template.size(),
            template.size()
        );
        println!("  File: {}", self.output.display());

        Ok(())
    }
}
