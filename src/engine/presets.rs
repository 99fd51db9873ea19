//! Built-in starter patterns.
//!
//! Presets are computed per-cell from polar coordinates about the grid
//! center, with radius terms scaled from the reference 29-peg board so
//! the shapes stay proportionate on every template. Loading a preset
//! replaces the whole grid (and pushes a single history entry).

use crate::models::{BeadColor, BoardTemplate, Grid};

/// Reference board size the preset formulas were tuned on.
const REFERENCE_SIZE: f64 = 29.0;

const HEART_COLOR: BeadColor = BeadColor::new(0xFF, 0x6B, 0x6B);
const STAR_COLOR: BeadColor = BeadColor::new(0xFF, 0xD5, 0x4F);
const FACE_COLOR: BeadColor = BeadColor::new(0xFF, 0xEA, 0xA7);
const FEATURE_COLOR: BeadColor = BeadColor::new(0x42, 0x42, 0x42);

/// A built-in starter pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Filled heart in coral.
    Heart,
    /// Five-pointed star in sunflower yellow.
    Star,
    /// Smiley face.
    Smile,
    /// Empty board.
    Clear,
}

impl Preset {
    /// All presets in menu order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Star, Self::Smile, Self::Clear];

    /// Stable identifier used in CLI arguments.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Heart => "heart",
            Self::Star => "star",
            Self::Smile => "smile",
            Self::Clear => "clear",
        }
    }

    /// One-line description for menus and listings.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Heart => "Filled heart in coral",
            Self::Star => "Five-pointed star in sunflower yellow",
            Self::Smile => "Smiley face",
            Self::Clear => "Empty board",
        }
    }

    /// Looks up a preset by its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error naming the valid identifiers when `id` is unknown.
    pub fn from_id(id: &str) -> anyhow::Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.id() == id)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(Self::id).collect();
                anyhow::anyhow!("unknown preset '{}'. Valid presets: {}", id, valid.join(", "))
            })
    }

    /// Generates the preset pattern for the given board.
    #[must_use]
    pub fn generate(&self, template: BoardTemplate) -> Grid {
        let n = template.size();
        match self {
            Self::Heart => polar_shape(n, HEART_COLOR, |dist, angle| {
                dist < (10.0 - 5.0 * angle.sin().powi(2))
            }),
            Self::Star => polar_shape(n, STAR_COLOR, |dist, angle| {
                dist < (5.0 * angle).sin().mul_add(2.0, 8.0)
            }),
            Self::Smile => smile(n),
            Self::Clear => Grid::new(n),
        }
    }
}

/// Fills every cell whose scaled polar coordinates satisfy `inside`.
///
/// `inside` receives the distance in reference-board units (the N/29
/// scale is divided out) so the formulas read exactly as tuned.
fn polar_shape(n: usize, color: BeadColor, inside: impl Fn(f64, f64) -> bool) -> Grid {
    let center = (n as f64 - 1.0) / 2.0;
    let scale = n as f64 / REFERENCE_SIZE;
    let mut grid = Grid::new(n);

    for row in 0..n {
        for col in 0..n {
            let dx = col as f64 - center;
            let dy = row as f64 - center;
            let dist = (dx * dx + dy * dy).sqrt() / scale;
            let angle = dy.atan2(dx);
            if inside(dist, angle) {
                grid.set_cell(row, col, Some(color));
            }
        }
    }
    grid
}

fn smile(n: usize) -> Grid {
    let scale = n as f64 / REFERENCE_SIZE;
    let scaled = |v: f64| (v * scale).round() as usize;

    // face disc
    let mut grid = polar_shape(n, FACE_COLOR, |dist, _| dist < 10.0);

    // eyes
    let eye_row = scaled(9.0);
    for eye_col in [scaled(10.0), scaled(18.0)] {
        grid.set_cell(eye_row, eye_col, Some(FEATURE_COLOR));
    }

    // mouth
    let mouth_row = scaled(18.0);
    for col in scaled(11.0)..=scaled(17.0) {
        grid.set_cell(mouth_row, col, Some(FEATURE_COLOR));
    }
    grid
}
