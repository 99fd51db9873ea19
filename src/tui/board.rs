//! Pegboard grid widget.
//!
//! Draws one terminal row per grid row. Beads render as solid blocks in
//! their own color, empty pegs as dots, and cells outside a circular
//! board's mask as blank space. The session zoom factor widens each cell
//! so patterns stay legible on large boards.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::theme::Theme;
use crate::tui::AppState;

/// Widget that paints the pegboard grid.
pub struct BoardWidget;

impl BoardWidget {
    /// Renders the board into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let grid = state.session.grid();
        let template = state.session.template();
        let width = cell_width(state.session.scale());

        let mut lines = Vec::with_capacity(grid.size());
        for row in 0..grid.size() {
            let mut spans = Vec::with_capacity(grid.size());
            for col in 0..grid.size() {
                spans.push(cell_span(state, theme, row, col, width));
            }
            lines.push(Line::from(spans));
        }

        let board = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", template.display_name()))
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(board, area);
    }
}

/// Builds the span for a single board cell.
fn cell_span(state: &AppState, theme: &Theme, row: usize, col: usize, width: usize) -> Span<'static> {
    if !state.session.template().contains(row, col) {
        return Span::raw(" ".repeat(width));
    }

    let under_cursor = state.cursor == (row, col);
    match state.session.grid().get(row, col).ok().flatten() {
        Some(color) => {
            // a shaded block lets the accent background show through
            let glyph = if under_cursor { "▓" } else { "█" };
            let mut style = Style::default().fg(color.to_ratatui_color());
            if under_cursor {
                style = style.bg(theme.accent);
            }
            Span::styled(glyph.repeat(width), style)
        }
        None => {
            let content = format!("{:^width$}", "·");
            let style = if under_cursor {
                Style::default().fg(theme.background).bg(theme.accent)
            } else {
                Style::default().fg(theme.peg)
            };
            Span::styled(content, style)
        }
    }
}

/// Characters per cell for a zoom factor.
///
/// A factor of 1.0 maps to a two-character cell, which is roughly square
/// in most terminal fonts.
pub(super) fn cell_width(scale: f32) -> usize {
    (scale * 2.0).round().clamp(1.0, 6.0) as usize
}
