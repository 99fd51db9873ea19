//! Pattern inspection command.

use crate::cli::common::{CliError, CliResult};
use crate::engine::{bead_count, color_usage};
use crate::export::{generate_color_legend, render_pattern_diagram};
use crate::services::PatternService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show statistics for a pattern file
#[derive(Debug, Clone, Args)]
pub struct InfoArgs {
    /// Path to pattern JSON file
    #[arg(short, long, value_name = "FILE")]
    pub pattern: PathBuf,

    /// Board template id (guessed from the grid size when omitted)
    #[arg(short, long, value_name = "ID")]
    pub template: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print a cell diagram and color legend
    #[arg(long)]
    pub preview: bool,
}

/// Per-color usage for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ColorUsageInfo {
    /// Hex color value
    pub color: String,
    /// Number of beads using it
    pub count: usize,
}

/// Pattern info response
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    /// Template the pattern was interpreted against
    pub template: String,
    /// Grid side length in cells
    pub size: usize,
    /// Beads actually present in the grid
    pub beads: usize,
    /// Bead count recorded in the file
    pub stored_bead_count: usize,
    /// Distinct colors in use, most used first
    pub colors: Vec<ColorUsageInfo>,
    /// Save timestamp (RFC 3339)
    pub timestamp: String,
}

impl InfoArgs {
    /// Execute the info command
    pub fn execute(&self) -> CliResult<()> {
        // Load pattern
        let file = PatternService::load(&self.pattern)
            .map_err(|e| CliError::io(format!("Failed to load pattern: {e}")))?;

        let template = PatternService::resolve_template(&file, self.template.as_deref())
            .map_err(|e| CliError::validation(e.to_string()))?;
        let grid = file
            .to_grid(template.size())
            .map_err(|e| CliError::validation(format!("Invalid pattern: {e}")))?;

        // Gather statistics
        let usage = color_usage(&grid);
        let response = InfoResponse {
            template: template.id().to_string(),
            size: grid.size(),
            beads: bead_count(&grid),
            stored_bead_count: file.bead_count,
            colors: usage
                .iter()
                .map(|(color, count)| ColorUsageInfo {
                    color: color.to_hex(),
                    count: *count,
                })
                .collect(),
            timestamp: file.timestamp.to_rfc3339(),
        };

        // Output results
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Pattern: {}\n", self.pattern.display());
        println!(
            "  Template:  {} ({})",
            template.display_name(),
            template.id()
        );
        println!("  Grid:      {}x{} cells", response.size, response.size);
        println!("  Beads:     {}", response.beads);
        println!("  Saved:     {}", response.timestamp);

        if response.stored_bead_count != response.beads {
            println!(
                "  ⚠ Stored bead count is {} but the grid holds {}",
                response.stored_bead_count, response.beads
            );
        }

        if !response.colors.is_empty() {
            println!("\n  Colors ({}):", response.colors.len());
            for entry in &response.colors {
                println!("    {}  {:>4}", entry.color, entry.count);
            }
        }

        if self.preview {
            println!();
            println!("{}", render_pattern_diagram(&grid, template));
            println!("{}", generate_color_legend(&grid));
        }

        Ok(())
    }
}
