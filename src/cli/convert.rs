//! Command for converting images into bead patterns.

use crate::cli::common::{parse_color_arg, CliError, CliResult};
use crate::engine::quantize_image;
use crate::models::{BeadColor, BoardTemplate, BASE_COLORS};
use crate::services::PatternService;
use clap::Args;
use std::path::PathBuf;

/// Convert an image into a bead pattern
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Path to the source image (PNG, JPEG, GIF, BMP, WebP)
    #[arg(short, long, value_name = "FILE")]
    pub image: PathBuf,

    /// Board template id
    #[arg(short, long, value_name = "ID", default_value = "square-large")]
    pub template: String,

    /// Output pattern file path
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Extra palette color as #RRGGBB, repeatable
    #[arg(long = "color", value_name = "HEX")]
    pub colors: Vec<String>,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let template = BoardTemplate::from_id(&self.template)
            .map_err(|e| CliError::validation(e.to_string()))?;
        let palette = build_palette(&self.colors)?;

        // Load and quantize
        let source = image::open(&self.image)
            .map_err(|e| CliError::io(format!("Failed to open image: {e}")))?;
        let grid = quantize_image(&source, template.size(), &palette)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let beads = grid.iter().filter(|(_, _, cell)| cell.is_some()).count();
        PatternService::save_grid(&grid, &self.output)
            .map_err(|e| CliError::io(format!("Failed to write pattern: {e}")))?;

        println!(
            "✓ Converted {} to a {}x{} pattern ({} beads)",
            self.image.display(),
            template.size(),
            template.size(),
            beads
        );
        println!("  File: {}", self.output.display());

        Ok(())
    }
}

/// Base colors plus any extra colors from the command line, deduplicated
fn build_palette(extra: &[String]) -> CliResult<Vec<BeadColor>> {
    let mut palette: Vec<BeadColor> = BASE_COLORS.to_vec();
    for hex in extra {
        let color = parse_color_arg(hex)?;
        if !palette.contains(&color) {
            palette.push(color);
        }
    }
    Ok(palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_palette_appends_and_dedups() {
        let extra = vec!["#123456".to_string(), "#FF6B6B".to_string()];
        let palette = build_palette(&extra).unwrap();
        assert_eq!(palette.len(), 11);
        assert_eq!(palette[10], BeadColor::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_build_palette_rejects_bad_hex() {
        let err = build_palette(&["garbage".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }
}
