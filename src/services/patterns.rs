//! Pattern file I/O service.
//!
//! This module centralizes pattern file operations, providing a consistent
//! interface for loading, validating, and saving pattern JSON files.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{BoardTemplate, Grid, PatternFile};

/// Service for managing pattern file I/O operations.
///
/// This service centralizes pattern file operations to ensure consistent
/// handling of file paths, error messages, and atomic writes.
pub struct PatternService;

impl PatternService {
    /// Loads a pattern file without validating it against a board.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the pattern file to load
    ///
    /// # Returns
    ///
    /// * `Ok(PatternFile)` - Successfully parsed pattern
    /// * `Err(...)` - File not found, malformed JSON, or I/O error
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use beadloom::services::PatternService;
    ///
    /// let pattern = PatternService::load(Path::new("heart.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<PatternFile> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;
        PatternFile::from_json(&content)
            .with_context(|| format!("Failed to parse pattern file: {}", path.display()))
    }

    /// Loads a pattern file and validates it against a board template.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the pattern file to load
    /// * `template` - Board the pattern must fit
    ///
    /// # Returns
    ///
    /// * `Ok(Grid)` - Grid of the template's size with every cell validated
    /// * `Err(...)` - I/O error, malformed JSON, or grid/board mismatch
    pub fn load_grid(path: &Path, template: BoardTemplate) -> Result<Grid> {
        let pattern = Self::load(path)?;
        let grid = pattern.to_grid(template.size()).with_context(|| {
            format!(
                "Pattern file {} does not fit the {} board",
                path.display(),
                template.id()
            )
        })?;
        Ok(grid)
    }

    /// Picks the board template for a pattern file.
    ///
    /// Uses `template_id` when given; otherwise guesses the square board
    /// matching the stored grid size.
    ///
    /// # Errors
    ///
    /// Returns an error if `template_id` is unknown, or if no template
    /// matches the stored grid size.
    pub fn resolve_template(
        pattern: &PatternFile,
        template_id: Option<&str>,
    ) -> Result<BoardTemplate> {
        match template_id {
            Some(id) => BoardTemplate::from_id(id),
            None => {
                let size = pattern.grid.len();
                BoardTemplate::from_size(size).with_context(|| {
                    format!("No board template has a {size}x{size} grid; pass a template id")
                })
            }
        }
    }

    /// Saves a pattern to a JSON file.
    ///
    /// This performs an atomic write using a temp file + rename pattern to
    /// ensure the file is never left in a corrupted state.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The pattern to save
    /// * `path` - Path where the pattern should be saved
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Pattern successfully saved
    /// * `Err(...)` - I/O error, permission error, or atomic rename failure
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use beadloom::models::{Grid, PatternFile};
    /// use beadloom::services::PatternService;
    ///
    /// let pattern = PatternFile::from_grid(&Grid::new(29));
    /// PatternService::save(&pattern, Path::new("blank.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn save(pattern: &PatternFile, path: &Path) -> Result<()> {
        let content = pattern.to_json().context("Failed to serialize pattern")?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp pattern file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp pattern file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Saves a grid as a pattern file with a fresh timestamp.
    pub fn save_grid(grid: &Grid, path: &Path) -> Result<()> {
        Self::save(&PatternFile::from_grid(grid), path)
    }
}
