//! Editing session controller.
//!
//! A [`Session`] owns the full editing state: the board template, the
//! snapshot history (whose cursor is the current grid), the palette, and
//! the view/tool selections. UI layers never mutate state directly; they
//! translate input into [`Intent`] values and feed them to
//! [`Session::apply`], which keeps the state transitions in one place and
//! the history consistent.

use anyhow::{Context, Result};
use std::path::Path;

use crate::engine::{
    flip_horizontal, flip_vertical, flood_fill, paint_with_symmetry, rotate_clockwise, stats,
    translate, Preset,
};
use crate::models::{
    BeadColor, BoardTemplate, Direction, Grid, History, Palette, SymmetryMode, Tool, DEFAULT_COLOR,
};
use crate::services::{PaletteService, PatternService};
use crate::store::KvStore;

/// Smallest zoom factor the board view accepts.
pub const MIN_SCALE: f32 = 0.5;
/// Largest zoom factor the board view accepts.
pub const MAX_SCALE: f32 = 3.0;

/// A single user-level editing action.
///
/// Pointer gestures arrive as one `CellActivated` per cell the pointer
/// passes over, followed by a `GestureEnded` when it is released. Each
/// activated cell records its own history entry; `GestureEnded` exists so
/// input layers do not need to know that, and is deliberately inert.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Apply the active tool to a cell (click or drag-over).
    CellActivated(usize, usize),
    /// A pointer gesture finished.
    GestureEnded,
    /// Select the active tool.
    ToolSelected(Tool),
    /// Select the paint color.
    ColorSelected(BeadColor),
    /// Select the symmetry mode for subsequent painting.
    SymmetrySelected(SymmetryMode),
    /// Switch the board template, discarding grid and history.
    TemplateSelected(BoardTemplate),
    /// Step the history cursor back.
    Undo,
    /// Step the history cursor forward.
    Redo,
    /// Empty the grid.
    Clear,
    /// Shift the whole pattern one cell, dropping beads pushed off the edge.
    Move(Direction),
    /// Mirror the pattern left-right.
    FlipHorizontal,
    /// Mirror the pattern top-bottom.
    FlipVertical,
    /// Rotate the pattern 90 degrees clockwise.
    RotateClockwise,
    /// Replace the grid with a generated preset pattern.
    LoadPreset(Preset),
    /// Replace the grid wholesale (pattern file load).
    GridReplaced(Grid),
    /// Set the board zoom factor, clamped to [`MIN_SCALE`]..=[`MAX_SCALE`].
    ScaleChanged(f32),
}

/// The complete editing state for one board.
pub struct Session {
    template: BoardTemplate,
    history: History,
    palette: Palette,
    tool: Tool,
    symmetry: SymmetryMode,
    selected_color: BeadColor,
    scale: f32,
    store: Box<dyn KvStore>,
}

impl Session {
    /// Starts a session on `template`, loading palette state from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn new(template: BoardTemplate, store: Box<dyn KvStore>) -> Result<Self> {
        let palette =
            PaletteService::load(store.as_ref()).context("Failed to load palette state")?;
        Ok(Self {
            template,
            history: History::new(Grid::new(template.size())),
            palette,
            tool: Tool::default(),
            symmetry: SymmetryMode::default(),
            selected_color: DEFAULT_COLOR,
            scale: 1.0,
            store,
        })
    }

    /// Applies one editing action.
    ///
    /// Grid-changing actions record a history entry only when the grid
    /// actually changes, so masked-off clicks, empty moves, and repainting
    /// a cell with its own color never add phantom undo steps. Undo and
    /// redo at the ends of the history are quiet no-ops; callers consult
    /// [`can_undo`](Self::can_undo)/[`can_redo`](Self::can_redo) to gray
    /// out the affordances.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::CellActivated(row, col) => {
                let next = match self.tool {
                    Tool::Brush => paint_with_symmetry(
                        self.grid(),
                        self.template,
                        row,
                        col,
                        Some(self.selected_color),
                        self.symmetry,
                    ),
                    Tool::Eraser => paint_with_symmetry(
                        self.grid(),
                        self.template,
                        row,
                        col,
                        None,
                        self.symmetry,
                    ),
                    Tool::Fill => {
                        flood_fill(self.grid(), self.template, row, col, self.selected_color)
                    }
                };
                self.push_if_changed(next);
            }
            Intent::GestureEnded => {}
            Intent::ToolSelected(tool) => self.tool = tool,
            Intent::ColorSelected(color) => self.selected_color = color,
            Intent::SymmetrySelected(mode) => self.symmetry = mode,
            Intent::TemplateSelected(template) => {
                if template != self.template {
                    self.template = template;
                    self.history.reset(Grid::new(template.size()));
                }
            }
            Intent::Undo => {
                let _ = self.history.undo();
            }
            Intent::Redo => {
                let _ = self.history.redo();
            }
            Intent::Clear => {
                let blank = Grid::new(self.template.size());
                self.push_if_changed(blank);
            }
            Intent::Move(direction) => {
                let next = translate(self.grid(), direction);
                self.push_if_changed(next);
            }
            Intent::FlipHorizontal => {
                let next = flip_horizontal(self.grid());
                self.push_if_changed(next);
            }
            Intent::FlipVertical => {
                let next = flip_vertical(self.grid());
                self.push_if_changed(next);
            }
            Intent::RotateClockwise => {
                let next = rotate_clockwise(self.grid());
                self.push_if_changed(next);
            }
            Intent::LoadPreset(preset) => {
                let next = preset.generate(self.template);
                self.push_if_changed(next);
            }
            Intent::GridReplaced(grid) => {
                // a grid of the wrong size cannot enter the history
                if grid.size() == self.template.size() {
                    self.push_if_changed(grid);
                }
            }
            Intent::ScaleChanged(factor) => {
                self.scale = factor.clamp(MIN_SCALE, MAX_SCALE);
            }
        }
    }

    fn push_if_changed(&mut self, next: Grid) {
        if next != *self.history.current() {
            self.history.push(next);
        }
    }

    /// The current grid (the history snapshot at the cursor).
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.history.current()
    }

    /// The active board template.
    #[must_use]
    pub const fn template(&self) -> BoardTemplate {
        self.template
    }

    /// The active tool.
    #[must_use]
    pub const fn tool(&self) -> Tool {
        self.tool
    }

    /// The active symmetry mode.
    #[must_use]
    pub const fn symmetry(&self) -> SymmetryMode {
        self.symmetry
    }

    /// The active paint color.
    #[must_use]
    pub const fn selected_color(&self) -> BeadColor {
        self.selected_color
    }

    /// The current board zoom factor.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// The palette state.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// True when an older snapshot can be returned to.
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True when an undone snapshot can be restored.
    #[must_use]
    pub const fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of beads placed on the current grid.
    #[must_use]
    pub fn bead_count(&self) -> usize {
        stats::bead_count(self.grid())
    }

    /// Per-color usage on the current grid, most used first.
    #[must_use]
    pub fn color_usage(&self) -> Vec<(BeadColor, usize)> {
        stats::color_usage(self.grid())
    }

    /// Adds a custom color to the active group and persists the palette.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate colors or when the store write fails.
    pub fn add_custom_color(&mut self, color: BeadColor) -> Result<()> {
        self.palette.add_custom(color)?;
        self.persist_palette()
    }

    /// Removes a custom color from the active group and persists the palette.
    ///
    /// # Errors
    ///
    /// Returns an error for base or unknown colors, or a store write failure.
    pub fn remove_custom_color(&mut self, color: BeadColor) -> Result<()> {
        self.palette.remove_custom(color)?;
        self.persist_palette()
    }

    /// Creates a new color group and persists the palette.
    ///
    /// Returns the generated group id.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid names or a store write failure.
    pub fn create_group(&mut self, name: &str) -> Result<String> {
        let id = self.palette.create_group(name)?;
        self.persist_palette()?;
        Ok(id)
    }

    /// Renames a color group and persists the palette.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown ids, invalid names, or a store write
    /// failure.
    pub fn rename_group(&mut self, id: &str, name: &str) -> Result<()> {
        self.palette.rename_group(id, name)?;
        self.persist_palette()
    }

    /// Deletes a color group and persists the palette.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown ids, the last remaining group, or a
    /// store write failure.
    pub fn delete_group(&mut self, id: &str) -> Result<()> {
        self.palette.delete_group(id)?;
        self.persist_palette()
    }

    /// Activates a color group and persists the palette.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown ids or a store write failure.
    pub fn select_group(&mut self, id: &str) -> Result<()> {
        self.palette.select_group(id)?;
        self.persist_palette()
    }

    fn persist_palette(&mut self) -> Result<()> {
        PaletteService::save(self.store.as_mut(), &self.palette)
            .context("Failed to persist palette state")
    }

    /// Loads a pattern file onto the current board.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not fit the
    /// active board template.
    pub fn load_pattern(&mut self, path: &Path) -> Result<()> {
        let grid = PatternService::load_grid(path, self.template)?;
        self.apply(Intent::GridReplaced(grid));
        Ok(())
    }

    /// Saves the current grid as a pattern file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_pattern(&self, path: &Path) -> Result<()> {
        PatternService::save_grid(self.grid(), path)
    }
}
