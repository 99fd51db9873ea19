//! PNG board renderer.
//!
//! Draws the pattern the way the physical result looks: a white canvas
//! with one circular bead per occupied peg and a light outline marking
//! every empty peg inside the board shape. Cells outside a circular
//! board's mask are left blank.

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

use crate::models::{BoardTemplate, Grid};

/// Default canvas edge length in pixels.
pub const DEFAULT_EXPORT_SIZE: u32 = 550;

/// Bead radius as a fraction of one cell.
const BEAD_RADIUS_RATIO: f64 = 0.4;

/// Outline color for empty pegs.
const PEG_OUTLINE: Rgba<u8> = Rgba([0xD1, 0xD5, 0xDB, 0xFF]);

const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);

/// Renders the grid onto a square canvas of `canvas_px` pixels.
#[must_use]
pub fn render_board(grid: &Grid, template: BoardTemplate, canvas_px: u32) -> RgbaImage {
    debug_assert_eq!(grid.size(), template.size());

    let mut image = RgbaImage::from_pixel(canvas_px, canvas_px, WHITE);
    let cell = f64::from(canvas_px) / grid.size() as f64;
    let radius = cell * BEAD_RADIUS_RATIO;

    for (row, col, value) in grid.iter() {
        if !template.contains(row, col) {
            continue;
        }
        let cx = (col as f64 + 0.5) * cell;
        let cy = (row as f64 + 0.5) * cell;
        match value {
            Some(color) => {
                let fill = Rgba([color.r, color.g, color.b, 0xFF]);
                fill_circle(&mut image, cx, cy, radius, fill);
            }
            None => stroke_circle(&mut image, cx, cy, radius, PEG_OUTLINE),
        }
    }

    image
}

/// Renders the grid and writes it as a PNG file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_png(grid: &Grid, template: BoardTemplate, canvas_px: u32, path: &Path) -> Result<()> {
    let image = render_board(grid, template, canvas_px);
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
    Ok(())
}

fn fill_circle(image: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    for_circle_box(image, cx, cy, radius, |dist2| dist2 <= radius * radius, color);
}

fn stroke_circle(image: &mut RgbaImage, cx: f64, cy: f64, radius: f64, color: Rgba<u8>) {
    let inner = (radius - 1.0).max(0.0);
    for_circle_box(
        image,
        cx,
        cy,
        radius,
        |dist2| dist2 <= radius * radius && dist2 >= inner * inner,
        color,
    );
}

/// Writes `color` to every pixel in the circle's bounding box whose squared
/// center distance satisfies `keep`.
fn for_circle_box(
    image: &mut RgbaImage,
    cx: f64,
    cy: f64,
    radius: f64,
    keep: impl Fn(f64) -> bool,
    color: Rgba<u8>,
) {
    let (width, height) = image.dimensions();
    let min_x = (cx - radius).floor().max(0.0) as u32;
    let max_x = ((cx + radius).ceil() as u32).min(width.saturating_sub(1));
    let min_y = (cy - radius).floor().max(0.0) as u32;
    let max_y = ((cy + radius).ceil() as u32).min(height.saturating_sub(1));

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = (f64::from(x) + 0.5) - cx;
            let dy = (f64::from(y) + 0.5) - cy;
            if keep(dx.mul_add(dx, dy * dy)) {
                image.put_pixel(x, y, color);
            }
        }
    }
}
