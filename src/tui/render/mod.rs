pub mod entry_bar;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (1 row) | entry field (3 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    entry_bar::render_entry_bar(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

/// Title row: app name on the left, done/total on the right
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let tasks = app.controller.tasks();
    let name = " jot";
    let count = format!("{}/{} done ", tasks.done_count(), tasks.len());

    let mut spans = vec![Span::styled(
        name,
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = name.width() + count.width();
    let width = area.width as usize;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(count, Style::default().fg(app.theme.dim).bg(bg)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Place the terminal caret inside a text field drawn at `origin`, where
/// `before` is the text left of the caret. Clipped to `area`.
pub(super) fn place_caret(frame: &mut Frame, area: Rect, origin: Position, before: &str) {
    let x = origin.x.saturating_add(before.width() as u16);
    if x < area.right() && origin.y < area.bottom() {
        frame.set_cursor_position(Position::new(x, origin.y));
    }
}
