use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, EditTarget};

use super::place_caret;

const PLACEHOLDER: &str = "Enter a task";

/// Render the new-task field with its border
pub fn render_entry_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.edit_target == Some(EditTarget::NewTask);

    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .title(Span::styled(" Add ", Style::default().fg(border_color).bg(bg)));
    let inner = block.inner(area);

    let text = if focused {
        app.edit_buffer.as_str()
    } else {
        app.entry_draft.as_str()
    };
    let line = if text.is_empty() && !focused {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let before = &app.edit_buffer[..app.edit_cursor];
        place_caret(frame, inner, Position::new(inner.x, inner.y), before);
    }
}
