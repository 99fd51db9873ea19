//! Image-to-grid quantization.
//!
//! Converts an arbitrary bitmap into an N×N grid over the currently
//! available palette: the source is downsampled to one sample per cell,
//! a background color is estimated from the corner samples, background
//! and transparent samples become empty cells, and every remaining
//! sample maps to its nearest palette color.

use crate::models::{nearest_color, BeadColor, Grid};
use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;
use tracing::debug;

/// Alpha below this (on a 0-255 scale) is treated as transparent background.
const ALPHA_THRESHOLD: u8 = 128;

/// RGB distance below which a sample counts as the detected background.
const BACKGROUND_DISTANCE: f64 = 60.0;

/// Errors raised by quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Quantization was requested with an empty palette. Surfaced to the
    /// user before any sampling happens; a grid quantized against an
    /// arbitrary fallback color would be silently wrong.
    #[error("no palette colors available for image conversion")]
    NoPaletteAvailable,
}

/// Quantizes `source` onto an N×N grid using `palette`.
///
/// # Errors
///
/// Returns [`QuantizeError::NoPaletteAvailable`] when `palette` is empty.
pub fn quantize_image(
    source: &DynamicImage,
    size: usize,
    palette: &[BeadColor],
) -> Result<Grid, QuantizeError> {
    if palette.is_empty() {
        return Err(QuantizeError::NoPaletteAvailable);
    }

    let side = size as u32;
    let samples = source
        .resize_exact(side, side, FilterType::Triangle)
        .to_rgba8();

    let background = corner_mean(&samples, size);
    let mut grid = Grid::new(size);
    let mut beads = 0usize;

    for row in 0..size {
        for col in 0..size {
            let px = samples.get_pixel(col as u32, row as u32);
            if px[3] < ALPHA_THRESHOLD {
                continue;
            }
            let sample = BeadColor::new(px[0], px[1], px[2]);
            if sample.distance(&background) < BACKGROUND_DISTANCE {
                continue;
            }
            // palette is non-empty, so the search cannot fail
            let color = nearest_color(sample, palette).map_err(|_| QuantizeError::NoPaletteAvailable)?;
            grid.set_cell(row, col, Some(color));
            beads += 1;
        }
    }

    debug!(
        size,
        beads,
        background = %background,
        "image quantized to grid"
    );
    Ok(grid)
}

/// Mean RGB of the four corner samples, the background estimate.
fn corner_mean(samples: &image::RgbaImage, size: usize) -> BeadColor {
    let last = (size - 1) as u32;
    let corners = [(0, 0), (last, 0), (0, last), (last, last)];

    let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
    for (x, y) in corners {
        let px = samples.get_pixel(x, y);
        r += u32::from(px[0]);
        g += u32::from(px[1]);
        b += u32::from(px[2]);
    }
    BeadColor::new(
        (f64::from(r) / 4.0).round() as u8,
        (f64::from(g) / 4.0).round() as u8,
        (f64::from(b) / 4.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BASE_COLORS;
    use image::{ImageBuffer, Rgba};

    fn hex(s: &str) -> BeadColor {
        BeadColor::from_hex(s).unwrap()
    }

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(ImageBuffer::from_pixel(width, height, Rgba(rgba)))
    }

    #[test]
    fn test_uniform_image_quantizes_to_all_empty() {
        // corners define the background, so a uniform image is all background
        let image = solid(64, 64, [52, 120, 200, 255]);
        let grid = quantize_image(&image, 14, &BASE_COLORS).unwrap();
        assert!(grid.is_blank());
    }

    #[test]
    fn test_transparent_pixels_become_empty() {
        let image = solid(32, 32, [255, 0, 0, 0]);
        let grid = quantize_image(&image, 14, &BASE_COLORS).unwrap();
        assert!(grid.is_blank());
    }

    #[test]
    fn test_subject_on_contrasting_background_is_kept() {
        // white background with an exact-palette-color block in the middle
        let mut buffer = ImageBuffer::from_pixel(14, 14, Rgba([255, 255, 255, 255]));
        for y in 5..9 {
            for x in 5..9 {
                buffer.put_pixel(x, y, Rgba([255, 107, 107, 255]));
            }
        }
        let image = DynamicImage::ImageRgba8(buffer);

        let grid = quantize_image(&image, 14, &BASE_COLORS).unwrap();
        assert_eq!(grid.get(7, 7).unwrap(), Some(hex("#FF6B6B")));
        assert_eq!(grid.get(0, 0).unwrap(), None);
        assert_eq!(grid.get(13, 13).unwrap(), None);
    }

    #[test]
    fn test_nearest_palette_color_wins() {
        // pure red against [#FE0100, #00FF00] picks the near-red candidate
        let mut buffer = ImageBuffer::from_pixel(14, 14, Rgba([255, 255, 255, 255]));
        buffer.put_pixel(7, 7, Rgba([255, 0, 0, 255]));
        let image = DynamicImage::ImageRgba8(buffer);

        let palette = [hex("#FE0100"), hex("#00FF00")];
        let grid = quantize_image(&image, 14, &palette).unwrap();
        assert_eq!(grid.get(7, 7).unwrap(), Some(hex("#FE0100")));
    }

    #[test]
    fn test_near_background_pixels_are_dropped() {
        // a pixel 30 units from the white background sits under the
        // distance threshold and classifies as background
        let mut buffer = ImageBuffer::from_pixel(14, 14, Rgba([255, 255, 255, 255]));
        buffer.put_pixel(7, 7, Rgba([225, 255, 255, 255]));
        let image = DynamicImage::ImageRgba8(buffer);

        let grid = quantize_image(&image, 14, &BASE_COLORS).unwrap();
        assert!(grid.is_blank());
    }

    #[test]
    fn test_output_is_exactly_target_size() {
        // wildly non-square input still lands on an N×N grid
        let image = solid(200, 37, [10, 10, 10, 255]);
        let grid = quantize_image(&image, 29, &BASE_COLORS).unwrap();
        assert_eq!(grid.size(), 29);
    }

    #[test]
    fn test_empty_palette_fails_before_sampling() {
        let image = solid(8, 8, [255, 0, 0, 255]);
        let err = quantize_image(&image, 14, &[]).unwrap_err();
        assert_eq!(err, QuantizeError::NoPaletteAvailable);
    }
}
