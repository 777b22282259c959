use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::controller::Command;
use crate::tui::app::{App, EditTarget};

use super::common::move_cursor;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.task_count().saturating_sub(1);
        }

        // New task field
        KeyCode::Char('a') | KeyCode::Char('i') => {
            let draft = std::mem::take(&mut app.entry_draft);
            app.start_editing(EditTarget::NewTask, draft);
        }

        // Row actions
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            app.execute(Command::ToggleDone(app.cursor));
        }
        KeyCode::Char('e') | KeyCode::Enter => begin_row_edit(app),
        KeyCode::Char('d') | KeyCode::Delete => {
            app.execute(Command::Remove(app.cursor));
        }

        // Load File
        KeyCode::Char('o') => {
            let path = app.last_load_path.clone().unwrap_or_default();
            app.start_editing(EditTarget::LoadPath, path);
        }
        _ => {}
    }
}

/// Put the cursor row in edit mode and focus its field. A row that is
/// already editing just gets focus back.
fn begin_row_edit(app: &mut App) {
    let index = app.cursor;
    let Some(text) = app.controller.tasks().get(index).map(|t| t.text.clone()) else {
        return;
    };
    app.execute(Command::BeginEdit(index));
    app.start_editing(EditTarget::Row(index), text);
}
