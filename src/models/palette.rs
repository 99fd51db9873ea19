//! Bead palette: fixed base colors plus user-managed color groups.
//!
//! The base set is a constant catalog matching the physically available
//! bead colors. Custom colors live in named groups; exactly one group is
//! active at a time, and the palette guarantees at least one group always
//! exists. The available palette (base + active group) feeds painting and
//! image quantization.

use crate::models::color::BeadColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The ten fixed base colors, in palette order.
pub const BASE_COLORS: [BeadColor; 10] = [
    BeadColor::new(0xFF, 0x6B, 0x6B), // coral
    BeadColor::new(0x4F, 0xC3, 0xF7), // sky blue
    BeadColor::new(0x66, 0xBB, 0x6A), // leaf green
    BeadColor::new(0xFF, 0xD5, 0x4F), // sunflower
    BeadColor::new(0xBA, 0x68, 0xC8), // violet
    BeadColor::new(0xFF, 0xB7, 0x4D), // orange
    BeadColor::new(0xFF, 0xFF, 0xFF), // white
    BeadColor::new(0x9E, 0x9E, 0x9E), // gray
    BeadColor::new(0x42, 0x42, 0x42), // charcoal
    BeadColor::new(0x00, 0x00, 0x00), // black
];

/// The paint color selected when a session starts.
pub const DEFAULT_COLOR: BeadColor = BASE_COLORS[0];

/// Identifier of the group every palette starts with.
pub const DEFAULT_GROUP_ID: &str = "default";

/// Maximum length of a group name.
const MAX_GROUP_NAME_LEN: usize = 50;

/// Errors reported by palette queries and management operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Nearest-color search was invoked with no candidates.
    #[error("palette contains no colors")]
    EmptyPalette,
    /// The color is already available (base set or active group).
    #[error("color {0} is already in the palette")]
    DuplicateColor(BeadColor),
    /// Base colors are fixed and cannot be removed.
    #[error("{0} is a base color and cannot be removed")]
    BaseColorFixed(BeadColor),
    /// The color is not in the active group.
    #[error("color {0} is not in the active group")]
    ColorNotFound(BeadColor),
    /// No group with the given id exists.
    #[error("no color group with id '{0}'")]
    GroupNotFound(String),
    /// The palette must always keep at least one group.
    #[error("the last color group cannot be deleted")]
    LastGroup,
    /// Group names must be non-empty.
    #[error("group name cannot be empty")]
    EmptyGroupName,
    /// Group names are capped for display purposes.
    #[error("group name exceeds {MAX_GROUP_NAME_LEN} characters (got {0})")]
    GroupNameTooLong(usize),
}

/// Returns the candidate closest to `target` under the RGB distance metric.
///
/// Ties are broken by first occurrence in `candidates`, which keeps the
/// result stable and deterministic for a given palette order.
///
/// # Errors
///
/// Returns [`PaletteError::EmptyPalette`] when `candidates` is empty;
/// callers must guarantee a non-empty palette before quantizing.
///
/// # Examples
///
/// ```
/// use beadloom::models::{nearest_color, BeadColor};
///
/// let candidates = [
///     BeadColor::from_hex("#FE0100").unwrap(),
///     BeadColor::from_hex("#00FF00").unwrap(),
/// ];
/// let target = BeadColor::from_hex("#FF0000").unwrap();
/// assert_eq!(nearest_color(target, &candidates).unwrap().to_hex(), "#FE0100");
/// ```
pub fn nearest_color(
    target: BeadColor,
    candidates: &[BeadColor],
) -> Result<BeadColor, PaletteError> {
    let mut best: Option<(f64, BeadColor)> = None;
    for &candidate in candidates {
        let dist = target.distance(&candidate);
        let better = match best {
            None => true,
            // strictly-less keeps the first occurrence on ties
            Some((best_dist, _)) => dist < best_dist,
        };
        if better {
            best = Some((dist, candidate));
        }
    }
    best.map(|(_, color)| color).ok_or(PaletteError::EmptyPalette)
}

/// A named, user-defined set of custom colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    /// Stable identifier (generated for user-created groups).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered custom colors in this group.
    pub colors: Vec<BeadColor>,
}

impl ColorGroup {
    fn validate_name(name: &str) -> Result<(), PaletteError> {
        if name.is_empty() {
            return Err(PaletteError::EmptyGroupName);
        }
        if name.len() > MAX_GROUP_NAME_LEN {
            return Err(PaletteError::GroupNameTooLong(name.len()));
        }
        Ok(())
    }
}

/// The full palette state owned by a session.
///
/// The base colors are not stored here (they are the [`BASE_COLORS`]
/// constant); only the custom groups and the active-group selection are
/// state, and only they are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    groups: Vec<ColorGroup>,
    active_group_id: String,
}

impl Palette {
    /// Creates a palette with a single empty default group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: vec![ColorGroup {
                id: DEFAULT_GROUP_ID.to_string(),
                name: "My Colors".to_string(),
                colors: Vec::new(),
            }],
            active_group_id: DEFAULT_GROUP_ID.to_string(),
        }
    }

    /// Rebuilds a palette from persisted parts, restoring invariants.
    ///
    /// An empty group list gains the default group; an unknown active id
    /// falls back to the first group. Loaded state can therefore never
    /// violate the "one active group, at least one group" invariant.
    #[must_use]
    pub fn from_parts(groups: Vec<ColorGroup>, active_group_id: &str) -> Self {
        let mut palette = Self {
            groups,
            active_group_id: active_group_id.to_string(),
        };
        if palette.groups.is_empty() {
            palette = Self::new();
        } else if !palette.groups.iter().any(|g| g.id == palette.active_group_id) {
            palette.active_group_id = palette.groups[0].id.clone();
        }
        palette
    }

    /// All groups in creation order.
    #[must_use]
    pub fn groups(&self) -> &[ColorGroup] {
        &self.groups
    }

    /// The currently active group.
    #[must_use]
    pub fn active_group(&self) -> &ColorGroup {
        self.groups
            .iter()
            .find(|g| g.id == self.active_group_id)
            .unwrap_or(&self.groups[0])
    }

    /// The active group's custom colors.
    #[must_use]
    pub fn custom_colors(&self) -> &[BeadColor] {
        &self.active_group().colors
    }

    /// Every color currently available for painting and quantization:
    /// the base set followed by the active group's colors, deduplicated
    /// preserving first occurrence.
    #[must_use]
    pub fn available(&self) -> Vec<BeadColor> {
        let mut colors: Vec<BeadColor> = BASE_COLORS.to_vec();
        for &color in self.custom_colors() {
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        colors
    }

    /// Adds a custom color to the active group.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::DuplicateColor`] when the color is already
    /// available (base set or active group).
    pub fn add_custom(&mut self, color: BeadColor) -> Result<(), PaletteError> {
        if self.available().contains(&color) {
            return Err(PaletteError::DuplicateColor(color));
        }
        self.active_group_mut().colors.push(color);
        Ok(())
    }

    /// Removes a custom color from the active group.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::BaseColorFixed`] for base colors and
    /// [`PaletteError::ColorNotFound`] when the color is not in the
    /// active group.
    pub fn remove_custom(&mut self, color: BeadColor) -> Result<(), PaletteError> {
        if BASE_COLORS.contains(&color) {
            return Err(PaletteError::BaseColorFixed(color));
        }
        let group = self.active_group_mut();
        let Some(idx) = group.colors.iter().position(|c| *c == color) else {
            return Err(PaletteError::ColorNotFound(color));
        };
        group.colors.remove(idx);
        Ok(())
    }

    /// Creates a new empty group and returns its generated id.
    ///
    /// The new group is not activated automatically.
    ///
    /// # Errors
    ///
    /// Returns a name-validation error for empty or over-long names.
    pub fn create_group(&mut self, name: &str) -> Result<String, PaletteError> {
        ColorGroup::validate_name(name)?;
        let id = Uuid::new_v4().to_string();
        self.groups.push(ColorGroup {
            id: id.clone(),
            name: name.to_string(),
            colors: Vec::new(),
        });
        Ok(id)
    }

    /// Renames an existing group.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::GroupNotFound`] for unknown ids and a
    /// name-validation error for invalid names.
    pub fn rename_group(&mut self, id: &str, name: &str) -> Result<(), PaletteError> {
        ColorGroup::validate_name(name)?;
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| PaletteError::GroupNotFound(id.to_string()))?;
        group.name = name.to_string();
        Ok(())
    }

    /// Deletes a group. Deleting the active group activates the first
    /// remaining group.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::LastGroup`] when only one group remains and
    /// [`PaletteError::GroupNotFound`] for unknown ids.
    pub fn delete_group(&mut self, id: &str) -> Result<(), PaletteError> {
        if self.groups.len() == 1 {
            return Err(PaletteError::LastGroup);
        }
        let Some(idx) = self.groups.iter().position(|g| g.id == id) else {
            return Err(PaletteError::GroupNotFound(id.to_string()));
        };
        self.groups.remove(idx);
        if self.active_group_id == id {
            self.active_group_id = self.groups[0].id.clone();
        }
        Ok(())
    }

    /// Activates the group with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::GroupNotFound`] for unknown ids.
    pub fn select_group(&mut self, id: &str) -> Result<(), PaletteError> {
        if !self.groups.iter().any(|g| g.id == id) {
            return Err(PaletteError::GroupNotFound(id.to_string()));
        }
        self.active_group_id = id.to_string();
        Ok(())
    }

    fn active_group_mut(&mut self) -> &mut ColorGroup {
        let idx = self
            .groups
            .iter()
            .position(|g| g.id == self.active_group_id)
            .unwrap_or(0);
        &mut self.groups[idx]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
