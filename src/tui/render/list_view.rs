use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::model::Task;
use crate::tui::app::{App, Mode};

use super::place_caret;

const CURSOR_MARKER: &str = "\u{25B8} "; // ▸

/// Render the task rows
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.controller.tasks().is_empty() {
        let empty = Paragraph::new(" No tasks")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor row on screen
    let visible_height = area.height as usize;
    app.clamp_cursor();
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let focused_row = app.focused_row();
    let mut lines: Vec<Line> = Vec::new();
    let mut caret: Option<Position> = None;

    for (index, task) in app
        .controller
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor =
            (index == app.cursor && app.mode == Mode::Navigate) || focused_row == Some(index);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut spans = Vec::new();
        let marker = if is_cursor { CURSOR_MARKER } else { "  " };
        spans.push(Span::styled(
            marker,
            Style::default().fg(app.theme.highlight).bg(row_bg),
        ));
        let checkbox = format!("[{}] ", task.checkbox_char());
        let prefix_width = marker.width() + checkbox.width();
        spans.push(Span::styled(
            checkbox,
            Style::default()
                .fg(app.theme.checkbox_color(task.done))
                .bg(row_bg),
        ));

        if focused_row == Some(index) {
            spans.push(Span::styled(
                app.edit_buffer.clone(),
                Style::default().fg(app.theme.text_bright).bg(app.theme.edit_bg),
            ));
            let y = area.y + (index - app.scroll_offset) as u16;
            caret = Some(Position::new(area.x + prefix_width as u16, y));
        } else {
            spans.push(Span::styled(task.text.clone(), text_style(app, task, row_bg)));
        }

        // Fill the rest of the row so the selection background spans the width
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let width = area.width as usize;
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(row_bg)));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if let Some(origin) = caret {
        let before = &app.edit_buffer[..app.edit_cursor];
        place_caret(frame, area, origin, before);
    }
}

/// Style for a row's text when its edit field is not focused
fn text_style(app: &App, task: &Task, row_bg: ratatui::style::Color) -> Style {
    if task.editing {
        // Unfocused edit field
        Style::default()
            .fg(app.theme.text)
            .bg(app.theme.edit_bg)
            .add_modifier(Modifier::UNDERLINED)
    } else if task.done {
        Style::default()
            .fg(app.theme.dim)
            .bg(row_bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(app.theme.text).bg(row_bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::controller::Command;
    use crate::tui::app::EditTarget;
    use crate::tui::render::test_helpers::{app_with_tasks, render_to_string};

    #[test]
    fn empty_list_message() {
        let mut app = app_with_tasks(&[]);
        let output = render_to_string(30, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, " No tasks");
    }

    #[test]
    fn rows_show_checkbox_and_cursor() {
        let mut app = app_with_tasks(&["buy milk", "walk dog"]);
        app.execute(Command::ToggleDone(1));
        let output = render_to_string(30, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, "\u{25B8} [ ] buy milk\n  [x] walk dog");
    }

    #[test]
    fn focused_row_shows_edit_buffer() {
        let mut app = app_with_tasks(&["old text"]);
        app.execute(Command::BeginEdit(0));
        app.start_editing(EditTarget::Row(0), "new te".into());
        let output = render_to_string(30, 3, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, "\u{25B8} [ ] new te");
    }

    #[test]
    fn blank_rows_are_visible() {
        let mut app = app_with_tasks(&[]);
        app.execute(Command::ReplaceAll(vec!["a".into(), "".into(), "b".into()]));
        let output = render_to_string(30, 5, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(output, "\u{25B8} [ ] a\n  [ ]\n  [ ] b");
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = app_with_tasks(&["t0", "t1", "t2", "t3", "t4"]);
        app.cursor = 4;
        let output = render_to_string(20, 2, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert_eq!(app.scroll_offset, 3);
        assert_eq!(output, "  [ ] t3\n\u{25B8} [ ] t4");
    }
}
