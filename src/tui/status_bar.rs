//! Status bar widget for messages, editor state, and key help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Lines of content above the bottom help line (6 rows - 2 borders - 1 help).
const MAX_CONTENT_LINES: usize = 3;

/// Secondary bindings shown while no message is active.
const HINTS: [(&str, &str); 6] = [
    ("1-0", "Color"),
    ("n/p", "Cycle color"),
    ("t", "Board"),
    ("F1-F3", "Preset"),
    ("x/X", "Flip"),
    ("o", "Rotate"),
];

/// Primary bindings, always shown on the bottom line.
const HELP: [(&str, &str); 6] = [
    ("Space", "Paint"),
    ("b/e/f", "Tool"),
    ("s", "Symmetry"),
    ("u/y", "Undo/Redo"),
    ("^S", "Save"),
    ("q", "Quit"),
];

/// Status bar widget.
pub struct StatusBar;

impl StatusBar {
    /// Renders the status bar into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut content_lines: Vec<Line> = Vec::new();

        // First line: error, status message, or idle hints
        if let Some(error) = &state.error_message {
            content_lines.push(Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ]));
        } else if state.status_message.is_empty() {
            content_lines.push(Self::hints_line(theme));
        } else {
            content_lines.push(Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.success),
            )));
        }

        content_lines.push(Self::editor_line(state, theme));
        content_lines.push(Self::cursor_line(state, theme));

        let padding_needed = MAX_CONTENT_LINES.saturating_sub(content_lines.len());
        let mut status_text: Vec<Line> = content_lines
            .into_iter()
            .take(MAX_CONTENT_LINES)
            .collect();
        for _ in 0..padding_needed {
            status_text.push(Line::from(""));
        }
        status_text.push(Self::help_line(theme));

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(status, area);
    }

    /// Tool, symmetry, color, bead count, and zoom in one line.
    fn editor_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let session = &state.session;
        let zoom = (session.scale() * 100.0).round() as u32;
        Line::from(vec![
            Span::styled("Tool: ", Style::default().fg(theme.text_muted)),
            Span::styled(session.tool().label(), Style::default().fg(theme.text)),
            Span::styled("  Symmetry: ", Style::default().fg(theme.text_muted)),
            Span::styled(session.symmetry().label(), Style::default().fg(theme.text)),
            Span::styled("  Color: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                session.selected_color().to_hex(),
                Style::default()
                    .fg(session.selected_color().to_ratatui_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Beads: ", Style::default().fg(theme.text_muted)),
            Span::styled(session.bead_count().to_string(), Style::default().fg(theme.text)),
            Span::styled("  Zoom: ", Style::default().fg(theme.text_muted)),
            Span::styled(format!("{zoom}%"), Style::default().fg(theme.text)),
        ])
    }

    /// Cursor position and the file the board saves to.
    fn cursor_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let (row, col) = state.cursor;
        let file = state.source_path.as_ref().map_or_else(
            || "untitled".to_string(),
            |path| path.display().to_string(),
        );
        Line::from(vec![
            Span::styled("Cell: ", Style::default().fg(theme.text_muted)),
            Span::styled(format!("({row}, {col})"), Style::default().fg(theme.text)),
            Span::styled("  File: ", Style::default().fg(theme.text_muted)),
            Span::styled(file, Style::default().fg(theme.text)),
        ])
    }

    fn hints_line(theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in HINTS.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }

    fn help_line(theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> =
            vec![Span::styled("Help: ", Style::default().fg(theme.primary))];
        for (i, (key, action)) in HELP.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(key, Style::default().fg(theme.accent)));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }
        Line::from(spans)
    }
}
