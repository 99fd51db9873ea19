//! Command for generating built-in preset patterns.

use crate::cli::common::{CliError, CliResult};
use crate::engine::Preset;
use crate::models::BoardTemplate;
use crate::services::PatternService;
use clap::Args;
use std::path::PathBuf;

/// Generate a built-in preset pattern
#[derive(Debug, Clone, Args)]
pub struct PresetArgs {
    /// Preset id (see --list)
    #[arg(value_name = "PRESET")]
    pub preset: Option<String>,

    /// List available presets and exit
    #[arg(long)]
    pub list: bool,

    /// Board template id
    #[arg(short, long, value_name = "ID", default_value = "square-large")]
    pub template: String,

    /// Output pattern file path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl PresetArgs {
    /// Execute the preset command
    pub fn execute(&self) -> CliResult<()> {
        if self.list {
            println!("Available presets ({}):\n", Preset::ALL.len());
            for preset in Preset::ALL {
                println!("  {:<8} {}", preset.id(), preset.description());
            }
            return Ok(());
        }

        let Some(id) = &self.preset else {
            return Err(CliError::validation(
                "No preset given. Pass a preset id or --list to see the choices",
            ));
        };
        let Some(output) = &self.output else {
            return Err(CliError::validation("No output path given; pass --output"));
        };

        let preset =
            Preset::from_id(id).map_err(|e| CliError::validation(e.to_string()))?;
        let template = BoardTemplate::from_id(&self.template)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let grid = preset.generate(template);
        let beads = grid.iter().filter(|(_, _, cell)| cell.is_some()).count();
        PatternService::save_grid(&grid, output)
            .map_err(|e| CliError::io(format!("Failed to write pattern: {e}")))?;

        println!(
            "✓ Generated '{}' on the {} board ({} beads)",
            preset.id(),
            template.display_name(),
            beads
        );
        println!("  File: {}", output.display());

        Ok(())
    }
}
