use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::controller::{Command, Outcome};
use crate::tui::app::{App, EditTarget};

use super::common::*;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('a') => app.edit_cursor = 0,
            KeyCode::Char('e') => app.edit_cursor = app.edit_buffer.len(),
            KeyCode::Char('u') => delete_to_start(app),
            KeyCode::Char('c') => cancel_edit(app),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => commit_edit(app),
        KeyCode::Esc => cancel_edit(app),
        KeyCode::Backspace => delete_before_cursor(app),
        KeyCode::Delete => delete_at_cursor(app),
        KeyCode::Left => move_left(app),
        KeyCode::Right => move_right(app),
        KeyCode::Home => app.edit_cursor = 0,
        KeyCode::End => app.edit_cursor = app.edit_buffer.len(),
        KeyCode::Char(c) => insert_char(app, c),
        _ => {}
    }
}

/// Enter: Add, Save or Load depending on the focused field
fn commit_edit(app: &mut App) {
    let Some(target) = app.edit_target.clone() else {
        return;
    };

    match target {
        EditTarget::NewTask => {
            let text = app.edit_buffer.clone();
            if app.execute(Command::Add(text)) == Outcome::Applied {
                // Field clears and keeps focus for the next task
                app.edit_buffer.clear();
                app.edit_cursor = 0;
                app.cursor = app.task_count().saturating_sub(1);
            }
        }
        EditTarget::Row(index) => {
            let text = app.stop_editing();
            app.execute(Command::SaveEdit { index, text });
        }
        EditTarget::LoadPath => {
            let raw = app.stop_editing();
            let trimmed = raw.trim();
            // An empty prompt is a cancelled file pick
            if trimmed.is_empty() {
                return;
            }
            app.last_load_path = Some(trimmed.to_string());
            app.load_file(expand_tilde(trimmed));
        }
    }
}

/// Esc: leave the field. The new-task field keeps its text for later; a row
/// stays in edit mode until it is saved.
fn cancel_edit(app: &mut App) {
    let target = app.edit_target.clone();
    let text = app.stop_editing();
    if target == Some(EditTarget::NewTask) {
        app.entry_draft = text;
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
