use crate::tui::app::App;

/// Byte offset of the char boundary before `pos`
pub(super) fn prev_boundary(s: &str, pos: usize) -> usize {
    s[..pos]
        .chars()
        .next_back()
        .map_or(0, |c| pos - c.len_utf8())
}

/// Byte offset of the char boundary after `pos`
pub(super) fn next_boundary(s: &str, pos: usize) -> usize {
    s[pos..].chars().next().map_or(pos, |c| pos + c.len_utf8())
}

pub(super) fn insert_char(app: &mut App, c: char) {
    app.edit_buffer.insert(app.edit_cursor, c);
    app.edit_cursor += c.len_utf8();
}

pub(super) fn delete_before_cursor(app: &mut App) {
    if app.edit_cursor == 0 {
        return;
    }
    let start = prev_boundary(&app.edit_buffer, app.edit_cursor);
    app.edit_buffer.drain(start..app.edit_cursor);
    app.edit_cursor = start;
}

pub(super) fn delete_at_cursor(app: &mut App) {
    let end = next_boundary(&app.edit_buffer, app.edit_cursor);
    app.edit_buffer.drain(app.edit_cursor..end);
}

pub(super) fn move_left(app: &mut App) {
    app.edit_cursor = prev_boundary(&app.edit_buffer, app.edit_cursor);
}

pub(super) fn move_right(app: &mut App) {
    app.edit_cursor = next_boundary(&app.edit_buffer, app.edit_cursor);
}

/// Ctrl-U: delete from the start of the field to the caret
pub(super) fn delete_to_start(app: &mut App) {
    app.edit_buffer.drain(..app.edit_cursor);
    app.edit_cursor = 0;
}

/// Move the list cursor by `delta` rows, staying inside the list
pub(super) fn move_cursor(app: &mut App, delta: i32) {
    let count = app.task_count();
    if count == 0 {
        app.cursor = 0;
        return;
    }
    let next = app.cursor as i64 + i64::from(delta);
    app.cursor = next.clamp(0, count as i64 - 1) as usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_skip_multibyte_chars() {
        let s = "aé€b";
        assert_eq!(next_boundary(s, 0), 1);
        assert_eq!(next_boundary(s, 1), 3);
        assert_eq!(next_boundary(s, 3), 6);
        assert_eq!(prev_boundary(s, 6), 3);
        assert_eq!(prev_boundary(s, 3), 1);
        assert_eq!(prev_boundary(s, 0), 0);
        assert_eq!(next_boundary(s, s.len()), s.len());
    }
}
