//! Terminal pattern diagram renderer.
//!
//! Generates a Unicode preview of the board with one symbol per cell,
//! plus a color legend resolving the symbols. Used by the `info` command
//! so patterns can be inspected without opening the editor.

use std::fmt::Write as _;

use crate::engine::stats;
use crate::models::{BeadColor, BoardTemplate, Grid};

/// Renders the pattern as a bordered Unicode diagram.
///
/// Each distinct bead color is assigned a reference symbol in usage order
/// (`1`-`9`, then `A`-`Z`); empty pegs show a dot, and cells outside a
/// circular board's mask are blank so the board shape stays visible. The
/// legend from [`generate_color_legend`] resolves the symbols.
///
/// # Example
///
/// ```text
/// Small square (14x14, 80 mm)
/// ┌─────────────────────────────┐
/// │ 1 1 · · · · · · · · · · · · │
/// │ 1 2 · · · · · · · · · · · · │
/// └─────────────────────────────┘
/// ```
#[must_use]
pub fn render_pattern_diagram(grid: &Grid, template: BoardTemplate) -> String {
    let n = grid.size();
    let usage = stats::color_usage(grid);

    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} ({}x{}, {} mm)",
        template.display_name(),
        n,
        n,
        template.physical_mm()
    );

    let inner_width = 2 * n + 1;
    let _ = writeln!(output, "┌{}┐", "─".repeat(inner_width));

    for (row_idx, row) in grid.rows().enumerate() {
        output.push_str("│ ");
        for (col_idx, cell) in row.iter().enumerate() {
            if !template.contains(row_idx, col_idx) {
                output.push_str("  ");
            } else {
                match cell {
                    Some(color) => {
                        output.push(symbol_for_color(&usage, *color));
                        output.push(' ');
                    }
                    None => output.push_str("· "),
                }
            }
        }
        output.push_str("│\n");
    }

    let _ = writeln!(output, "└{}┘", "─".repeat(inner_width));
    output
}

/// Generates a color legend mapping diagram symbols to hex colors and
/// bead counts, most used first.
#[must_use]
pub fn generate_color_legend(grid: &Grid) -> String {
    let usage = stats::color_usage(grid);
    if usage.is_empty() {
        return "Bead colors: (none)\n".to_string();
    }

    let mut output = String::from("Bead colors:\n");
    for (index, (color, count)) in usage.iter().enumerate() {
        let noun = if *count == 1 { "bead" } else { "beads" };
        let _ = writeln!(
            output,
            "  [{}] {} - {} {}",
            reference_symbol(index),
            color.to_hex(),
            count,
            noun
        );
    }
    output
}

fn symbol_for_color(usage: &[(BeadColor, usize)], color: BeadColor) -> char {
    usage
        .iter()
        .position(|(c, _)| *c == color)
        .map_or('?', reference_symbol)
}

/// Symbol for the n-th distinct color: `1`-`9`, then `A`-`Z`, then `?`.
fn reference_symbol(index: usize) -> char {
    match index {
        0..=8 => char::from(b'1' + index as u8),
        9..=34 => char::from(b'A' + (index - 9) as u8),
        _ => '?',
    }
}
