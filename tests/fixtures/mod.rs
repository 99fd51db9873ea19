//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use beadloom::models::{BeadColor, BoardTemplate, Grid, PatternFile};
use chrono::{DateTime, TimeZone, Utc};
use image::{DynamicImage, ImageBuffer, Rgba};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Fixed timestamp so pattern fixtures are deterministic.
pub fn test_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

/// Creates a basic test pattern with three beads.
///
/// # Arguments
/// * `template` - Board the pattern is sized for
///
/// # Returns
/// A `PatternFile` with a deterministic timestamp holding two coral
/// beads and one sky blue bead at known cells.
pub fn test_pattern_basic(template: BoardTemplate) -> PatternFile {
    let n = template.size();
    let coral = BeadColor::from_hex("#FF6B6B").expect("valid hex");
    let sky = BeadColor::from_hex("#4FC3F7").expect("valid hex");

    let grid = Grid::new(n)
        .with_cell(0, 1, Some(coral))
        .with_cell(n / 2, n / 2, Some(sky))
        .with_cell(n - 1, n - 2, Some(coral));

    PatternFile::with_timestamp(&grid, test_timestamp())
}

/// Creates a blank pattern sized for the given board.
pub fn test_pattern_blank(template: BoardTemplate) -> PatternFile {
    PatternFile::with_timestamp(&Grid::new(template.size()), test_timestamp())
}

/// Creates a white 8x8 test image with a colored 4x4 center block.
///
/// Small enough that quantizing onto any board keeps the center cells
/// on the block color and the corners on the white background.
pub fn test_image_with_center(center: [u8; 4]) -> DynamicImage {
    let mut buffer = ImageBuffer::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
    for y in 2..=5 {
        for x in 2..=5 {
            buffer.put_pixel(x, y, Rgba(center));
        }
    }
    DynamicImage::ImageRgba8(buffer)
}

/// Writes a pattern to a JSON file for CLI testing.
///
/// # Arguments
/// * `pattern` - The pattern to serialize
/// * `path` - The file path to write to
pub fn write_pattern_file(pattern: &PatternFile, path: &Path) -> std::io::Result<()> {
    use beadloom::services::PatternService;

    PatternService::save(pattern, path).map_err(|e| std::io::Error::other(e.to_string()))
}

/// Creates a pattern file in a temp directory and returns the path.
pub fn create_temp_pattern_file(pattern: &PatternFile) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pattern_path = temp_dir.path().join("test_pattern.json");
    write_pattern_file(pattern, &pattern_path).expect("Failed to write pattern file");
    (pattern_path, temp_dir)
}

/// Creates a PNG image file in a temp directory and returns the path.
pub fn create_temp_image_file(image: &DynamicImage) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let image_path = temp_dir.path().join("source.png");
    image
        .save_with_format(&image_path, image::ImageFormat::Png)
        .expect("Failed to write image file");
    (image_path, temp_dir)
}

/// Creates an isolated config directory for `BEADLOOM_CONFIG_DIR`.
///
/// Commands pointed here start with no config file and an empty palette
/// store, so tests cannot see or disturb the real user state.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Reads a pattern file back as raw JSON for schema assertions.
pub fn read_pattern_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read pattern file");
    serde_json::from_str(&content).expect("Pattern file should be valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_basic_pattern() {
        let pattern = test_pattern_basic(BoardTemplate::SquareSmall);
        assert_eq!(pattern.grid.len(), 14);
        assert_eq!(pattern.bead_count, 3);
        assert_eq!(pattern.grid[0][1], "#FF6B6B");
        assert_eq!(pattern.grid[7][7], "#4FC3F7");
    }

    #[test]
    fn test_fixture_pattern_is_deterministic() {
        let a = test_pattern_basic(BoardTemplate::SquareLarge);
        let b = test_pattern_basic(BoardTemplate::SquareLarge);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixture_center_image() {
        let image = test_image_with_center([255, 107, 107, 255]);
        let rgba = image.to_rgba8();
        assert_eq!(rgba.dimensions(), (8, 8));
        assert_eq!(*rgba.get_pixel(4, 4), Rgba([255, 107, 107, 255]));
        assert_eq!(*rgba.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_fixture_write_round_trip() {
        let pattern = test_pattern_basic(BoardTemplate::SquareSmall);
        let (path, _temp_dir) = create_temp_pattern_file(&pattern);

        let json = read_pattern_json(&path);
        assert_eq!(json["beadCount"], 3);
        assert_eq!(json["grid"].as_array().unwrap().len(), 14);
    }
}
