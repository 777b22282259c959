use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, EditTarget, Mode};

use super::place_caret;

const LOAD_PROMPT: &str = "Load file: ";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match (app.mode, &app.edit_target) {
        (Mode::Edit, Some(EditTarget::LoadPath)) => {
            let spans = vec![
                Span::styled(LOAD_PROMPT, Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(
                    app.edit_buffer.clone(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
            ];
            (spans, "Enter load  Esc cancel")
        }
        (Mode::Edit, Some(EditTarget::NewTask)) => (Vec::new(), "Enter add  Esc back"),
        (Mode::Edit, _) => (Vec::new(), "Enter save  Esc leave field"),
        (Mode::Navigate, _) => (
            Vec::new(),
            "a add  e edit  space done  d delete  o load  ? help  q quit",
        ),
    };

    // Right-align the hint when it fits
    if app.show_key_hints || app.mode == Mode::Edit {
        let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let hint_width = hint.width();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if app.edit_target == Some(EditTarget::LoadPath) {
        let origin = Position::new(area.x + LOAD_PROMPT.width() as u16, area.y);
        place_caret(frame, area, origin, &app.edit_buffer[..app.edit_cursor]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, render_to_string};

    #[test]
    fn navigate_hints() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.ends_with("? help  q quit"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let mut app = app_with_tasks(&[]);
        app.show_key_hints = false;
        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, "");
    }

    #[test]
    fn load_prompt_shows_path() {
        let mut app = app_with_tasks(&[]);
        app.start_editing(EditTarget::LoadPath, "~/todo.json".into());
        let output = render_to_string(60, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with("Load file: ~/todo.json"));
        assert!(output.ends_with("Enter load  Esc cancel"));
    }
}
