//! Terminal user interface for the pattern editor.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the board, palette, and status widgets built on Ratatui. All
//! editing input is translated into [`Intent`] values and applied through
//! the [`Session`], so the widgets only ever read state.

// Allow intentional type casts for terminal coordinates and zoom math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow small types passed by reference for a uniform widget signature
#![allow(clippy::trivially_copy_pass_by_ref)]

mod board;
mod palette_panel;
mod status_bar;
pub mod theme;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::engine::Preset;
use crate::models::{BoardTemplate, Direction, Tool};
use crate::services::session::{Intent, Session};

use board::BoardWidget;
use palette_panel::PalettePanel;
use status_bar::StatusBar;

pub use theme::Theme;

/// Mutable state for one editor run.
///
/// Everything the user edits lives in the [`Session`]; the remaining
/// fields are view concerns the session deliberately knows nothing
/// about (cursor, messages, the file being edited).
pub struct AppState {
    /// The editing session all input is applied to
    pub session: Session,
    /// Application configuration
    pub config: Config,
    /// Resolved color theme, refreshed every loop iteration
    pub theme: Theme,
    /// Keyboard cursor position on the board (row, col)
    pub cursor: (usize, usize),
    /// Status message shown in the status bar (empty when none)
    pub status_message: String,
    /// Error message, shown in place of the status message
    pub error_message: Option<String>,
    /// File the pattern was loaded from and saves to
    pub source_path: Option<PathBuf>,
    /// True when the board has edits not yet written to disk
    pub dirty: bool,
    /// Armed after a quit request while dirty; the next `q` quits
    pub quit_armed: bool,
}

impl AppState {
    /// Creates editor state around a session, with the cursor centered
    /// so it starts inside a circular board's mask.
    #[must_use]
    pub fn new(session: Session, config: Config, source_path: Option<PathBuf>) -> Self {
        let center = session.grid().size() / 2;
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            session,
            config,
            theme,
            cursor: (center, center),
            status_message: String::new(),
            error_message: None,
            source_path,
            dirty: false,
            quit_armed: false,
        }
    }

    /// Sets the status message, clearing any error.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Sets the error message. Errors outrank status in the status bar.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Auto re-detects the OS theme; Dark/Light are explicit
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key) {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    handle_mouse_event(state, mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill the entire screen first so the theme background is consistent
    // regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let (title_area, main_area, status_area) = screen_chunks(f.area());

    render_title_bar(f, title_area, state);

    let (board_area, palette_area) = main_panes(main_area);
    BoardWidget::render(f, board_area, state, &state.theme);
    PalettePanel::render(f, palette_area, state, &state.theme);

    StatusBar::render(f, status_area, state, &state.theme);
}

/// Title bar / main content / status bar split.
fn screen_chunks(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title bar
        Constraint::Min(10),   // Main content
        Constraint::Length(6), // Status bar (messages + state + help)
    ])
    .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Board / palette split of the main content area.
fn main_panes(area: Rect) -> (Rect, Rect) {
    let panes = Layout::horizontal([
        Constraint::Min(20),
        Constraint::Length(palette_panel::PANEL_WIDTH),
    ])
    .split(area);
    (panes[0], panes[1])
}

/// Render title bar with pattern name and dirty indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let file = state.source_path.as_ref().map_or_else(
        || "untitled".to_string(),
        |path| {
            path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
        },
    );

    let mut spans = vec![Span::styled(
        format!(" {APP_NAME} - {file}"),
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )];
    if state.dirty {
        spans.push(Span::styled(" *", Style::default().fg(theme.warning)));
    }
    spans.push(Span::styled(
        format!("  [{}]", state.session.template().display_name()),
        Style::default().fg(theme.text_muted),
    ));

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary)),
    );
    f.render_widget(title, area);
}

/// Routes one key press. Returns true when the editor should exit.
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> bool {
    // errors live until the next key press
    state.error_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('s') => save_pattern(state),
            KeyCode::Char('z') => undo(state),
            KeyCode::Char('y') => redo(state),
            _ => {}
        }
        return false;
    }

    let was_armed = state.quit_armed;
    state.quit_armed = false;

    // Shift+arrow shifts the whole pattern one cell
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        let shifted = match key.code {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = shifted {
            apply_edit(state, Intent::Move(direction));
            state.set_status(format!("Moved pattern {}", direction.id()));
            return false;
        }
    }

    match key.code {
        KeyCode::Char('q') => {
            if state.dirty && !was_armed {
                state.quit_armed = true;
                state.set_status("Unsaved changes; press q again to quit");
                false
            } else {
                true
            }
        }
        KeyCode::Esc => {
            state.status_message.clear();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_cursor(state, Direction::Up);
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_cursor(state, Direction::Down);
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            move_cursor(state, Direction::Left);
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            move_cursor(state, Direction::Right);
            false
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let (row, col) = state.cursor;
            apply_edit(state, Intent::CellActivated(row, col));
            // a key press is a complete one-cell gesture
            state.session.apply(Intent::GestureEnded);
            false
        }
        KeyCode::Char('b') => {
            select_tool(state, Tool::Brush);
            false
        }
        KeyCode::Char('e') => {
            select_tool(state, Tool::Eraser);
            false
        }
        KeyCode::Char('f') => {
            select_tool(state, Tool::Fill);
            false
        }
        KeyCode::Char('s') => {
            let mode = state.session.symmetry().cycle();
            state.session.apply(Intent::SymmetrySelected(mode));
            state.set_status(format!("Symmetry: {}", mode.label()));
            false
        }
        KeyCode::Char('u') => {
            undo(state);
            false
        }
        KeyCode::Char('y') => {
            redo(state);
            false
        }
        KeyCode::Char(c @ '0'..='9') => {
            select_color_key(state, c);
            false
        }
        KeyCode::Char('n') => {
            cycle_color(state, true);
            false
        }
        KeyCode::Char('p') => {
            cycle_color(state, false);
            false
        }
        KeyCode::Char('t') => {
            cycle_template(state);
            false
        }
        KeyCode::Char('c') => {
            copy_color(state);
            false
        }
        KeyCode::Char('C') => {
            apply_edit(state, Intent::Clear);
            state.set_status("Board cleared");
            false
        }
        KeyCode::Char('x') => {
            apply_edit(state, Intent::FlipHorizontal);
            state.set_status("Flipped left-right");
            false
        }
        KeyCode::Char('X') => {
            apply_edit(state, Intent::FlipVertical);
            state.set_status("Flipped top-bottom");
            false
        }
        KeyCode::Char('o') => {
            apply_edit(state, Intent::RotateClockwise);
            state.set_status("Rotated clockwise");
            false
        }
        KeyCode::Char('+' | '=') => {
            zoom(state, 0.25);
            false
        }
        KeyCode::Char('-') => {
            zoom(state, -0.25);
            false
        }
        KeyCode::F(1) => {
            load_preset(state, Preset::Heart);
            false
        }
        KeyCode::F(2) => {
            load_preset(state, Preset::Star);
            false
        }
        KeyCode::F(3) => {
            load_preset(state, Preset::Smile);
            false
        }
        _ => false,
    }
}

/// Maps mouse input to paint gestures on the board.
///
/// Press and drag activate every cell the pointer passes over; release
/// ends the gesture. Each activated cell is its own undo step.
fn handle_mouse_event(state: &mut AppState, mouse: event::MouseEvent, frame_area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            if let Some((row, col)) = board_cell_at(state, frame_area, mouse.column, mouse.row) {
                state.cursor = (row, col);
                apply_edit(state, Intent::CellActivated(row, col));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.session.apply(Intent::GestureEnded);
        }
        _ => {}
    }
}

/// Translates screen coordinates to a board cell, if inside the board.
fn board_cell_at(state: &AppState, frame_area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let (_, main_area, _) = screen_chunks(frame_area);
    let (board_area, _) = main_panes(main_area);

    // step inside the widget border
    let inner = Rect {
        x: board_area.x + 1,
        y: board_area.y + 1,
        width: board_area.width.saturating_sub(2),
        height: board_area.height.saturating_sub(2),
    };
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let cell_width = board::cell_width(state.session.scale()) as u16;
    let col = ((x - inner.x) / cell_width) as usize;
    let row = (y - inner.y) as usize;
    let size = state.session.grid().size();
    (row < size && col < size).then_some((row, col))
}

/// Applies a grid-changing intent and marks the board dirty.
fn apply_edit(state: &mut AppState, intent: Intent) {
    state.session.apply(intent);
    state.dirty = true;
}

fn select_tool(state: &mut AppState, tool: Tool) {
    state.session.apply(Intent::ToolSelected(tool));
    state.set_status(format!("Tool: {}", tool.label()));
}

fn move_cursor(state: &mut AppState, direction: Direction) {
    let size = state.session.grid().size();
    let (d_row, d_col) = direction.delta();
    let (row, col) = state.cursor;
    state.cursor = (
        row.saturating_add_signed(d_row).min(size - 1),
        col.saturating_add_signed(d_col).min(size - 1),
    );
}

/// Selects a palette color from the number row: `1`-`9` then `0`.
fn select_color_key(state: &mut AppState, key: char) {
    let Some(digit) = key.to_digit(10) else {
        return;
    };
    let index = if digit == 0 { 9 } else { (digit - 1) as usize };
    let colors = state.session.palette().available();
    if let Some(color) = colors.get(index) {
        state.session.apply(Intent::ColorSelected(*color));
    }
}

/// Steps the selected color through the available palette.
fn cycle_color(state: &mut AppState, forward: bool) {
    let colors = state.session.palette().available();
    let len = colors.len();
    let current = state.session.selected_color();
    let index = colors.iter().position(|c| *c == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    state.session.apply(Intent::ColorSelected(colors[next]));
}

/// Switches to the next board template. The grid and history reset, so
/// the board is no longer dirty afterwards.
fn cycle_template(state: &mut AppState) {
    let current = state.session.template();
    let index = BoardTemplate::ALL
        .iter()
        .position(|t| *t == current)
        .unwrap_or(0);
    let next = BoardTemplate::ALL[(index + 1) % BoardTemplate::ALL.len()];
    state.session.apply(Intent::TemplateSelected(next));

    let center = state.session.grid().size() / 2;
    state.cursor = (center, center);
    state.dirty = false;
    state.set_status(format!("Board: {} (grid cleared)", next.display_name()));
}

/// Copies the selected color's hex value to the system clipboard.
fn copy_color(state: &mut AppState) {
    let hex = state.session.selected_color().to_hex();
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(hex.clone())) {
        Ok(()) => state.set_status(format!("Copied {hex} to clipboard")),
        Err(e) => state.set_error(format!("Failed to copy to clipboard: {e}")),
    }
}

fn zoom(state: &mut AppState, step: f32) {
    let next = state.session.scale() + step;
    state.session.apply(Intent::ScaleChanged(next));
    let percent = (state.session.scale() * 100.0).round() as u32;
    state.set_status(format!("Zoom: {percent}%"));
}

fn load_preset(state: &mut AppState, preset: Preset) {
    apply_edit(state, Intent::LoadPreset(preset));
    state.set_status(format!("Loaded {} preset", preset.id()));
}

fn undo(state: &mut AppState) {
    if state.session.can_undo() {
        state.session.apply(Intent::Undo);
        state.dirty = true;
    } else {
        state.set_status("Nothing to undo");
    }
}

fn redo(state: &mut AppState) {
    if state.session.can_redo() {
        state.session.apply(Intent::Redo);
        state.dirty = true;
    } else {
        state.set_status("Nothing to redo");
    }
}

/// Writes the pattern to its file, defaulting to `untitled.json` when the
/// editor was launched without one.
fn save_pattern(state: &mut AppState) {
    let path = state
        .source_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("untitled.json"));
    match state.session.save_pattern(&path) {
        Ok(()) => {
            state.dirty = false;
            state.set_status(format!("Saved {}", path.display()));
            state.source_path = Some(path);
        }
        Err(e) => state.set_error(format!("Failed to save: {e}")),
    }
}
