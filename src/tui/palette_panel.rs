//! Palette side panel widget.
//!
//! Shows the active color group, its swatches with the number-key
//! bindings for the first ten, and the hex value of the selected color.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::theme::Theme;
use crate::tui::AppState;

/// Swatches shown per panel row.
const SWATCHES_PER_ROW: usize = 5;

/// Panel width in terminal columns, borders included.
pub(super) const PANEL_WIDTH: u16 = 28;

/// Widget that paints the palette panel.
pub struct PalettePanel;

impl PalettePanel {
    /// Renders the palette into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let palette = state.session.palette();
        let selected = state.session.selected_color();
        let colors = palette.available();

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Group: ", Style::default().fg(theme.text_muted)),
                Span::styled(
                    palette.active_group().name.clone(),
                    Style::default().fg(theme.text),
                ),
            ]),
            Line::default(),
        ];

        for (row, chunk) in colors.chunks(SWATCHES_PER_ROW).enumerate() {
            let mut spans = Vec::new();
            for (i, color) in chunk.iter().enumerate() {
                let index = row * SWATCHES_PER_ROW + i;
                // the selected swatch inverts its key label
                let label_style = if *color == selected {
                    Style::default().fg(theme.background).bg(theme.accent)
                } else {
                    Style::default().fg(theme.text_muted)
                };
                spans.push(Span::styled(key_label(index), label_style));
                spans.push(Span::styled(
                    "██",
                    Style::default().fg(color.to_ratatui_color()),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Color: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                selected.to_hex(),
                Style::default()
                    .fg(selected.to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Palette ")
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(panel, area);
    }
}

/// Key hint for a swatch position: `1`-`9` then `0`, blank beyond ten.
fn key_label(index: usize) -> String {
    match index {
        0..=8 => format!("{} ", index + 1),
        9 => "0 ".to_string(),
        _ => "  ".to_string(),
    }
}
