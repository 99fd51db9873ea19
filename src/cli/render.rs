//! Command for rendering a pattern file to a PNG image.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export::save_png;
use crate::services::PatternService;
use clap::Args;
use std::path::PathBuf;

/// Render a pattern file as a PNG image
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Path to pattern JSON file
    #[arg(short, long, value_name = "FILE")]
    pub pattern: PathBuf,

    /// Board template id (guessed from the grid size when omitted)
    #[arg(short, long, value_name = "ID")]
    pub template: Option<String>,

    /// Output PNG file path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Canvas edge length in pixels (defaults to the configured export size)
    #[arg(short, long, value_name = "PX")]
    pub size: Option<u32>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        // Load pattern
        let file = PatternService::load(&self.pattern)
            .map_err(|e| CliError::io(format!("Failed to load pattern: {e}")))?;
        let template = PatternService::resolve_template(&file, self.template.as_deref())
            .map_err(|e| CliError::validation(e.to_string()))?;
        let grid = file
            .to_grid(template.size())
            .map_err(|e| CliError::validation(format!("Invalid pattern: {e}")))?;

        // Canvas size: explicit flag, then configured default
        let size = match self.size {
            Some(px) => {
                if !(100..=4000).contains(&px) {
                    return Err(CliError::validation(format!(
                        "size must be between 100 and 4000 pixels (got {px})"
                    )));
                }
                px
            }
            None => Config::load()
                .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?
                .export
                .size_px,
        };

        save_png(&grid, template, size, &self.output)
            .map_err(|e| CliError::io(format!("Failed to render PNG: {e}")))?;

        println!(
            "✓ Rendered {} board at {size}x{size} px",
            template.display_name()
        );
        println!("  File: {}", self.output.display());

        Ok(())
    }
}
