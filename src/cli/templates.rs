//! Board template catalog command.

use crate::cli::common::{CliError, CliResult};
use crate::models::BoardTemplate;
use clap::Args;
use serde::Serialize;

/// List the available board templates
#[derive(Debug, Clone, Args)]
pub struct TemplatesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Template metadata for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    /// Stable template identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Grid side length in cells
    pub size: usize,
    /// Number of usable pegs
    pub pegs: usize,
    /// Physical edge/diameter in millimeters
    pub physical_mm: u32,
    /// Whether the usable area is masked to a circle
    pub circular: bool,
}

/// Template list response
#[derive(Debug, Clone, Serialize)]
pub struct TemplateListResponse {
    /// List of templates in catalog order
    pub templates: Vec<TemplateInfo>,
    /// Total number of templates
    pub count: usize,
}

impl TemplatesArgs {
    /// Execute the templates command
    pub fn execute(&self) -> CliResult<()> {
        let templates = catalog();
        let count = templates.len();
        let response = TemplateListResponse { templates, count };

        // Output
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Available board templates ({count}):\n");
            for template in &response.templates {
                println!(
                    "  {:<14} {:<14} {:>2}x{:<2}  {:>4} pegs  {} mm",
                    template.id,
                    template.name,
                    template.size,
                    template.size,
                    template.pegs,
                    template.physical_mm
                );
            }
        }

        Ok(())
    }
}

/// Build catalog entries for every template
fn catalog() -> Vec<TemplateInfo> {
    BoardTemplate::ALL
        .iter()
        .map(|template| TemplateInfo {
            id: template.id().to_string(),
            name: template.display_name().to_string(),
            size: template.size(),
            pegs: template.peg_count(),
            physical_mm: template.physical_mm(),
            circular: template.is_circular(),
        })
        .collect()
}
