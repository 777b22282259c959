use crate::model::task::{Task, TaskList};

/// Error type for task operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("no task at index {0}")]
    NotFound(usize),
    #[error("task text is empty")]
    EmptyText,
}

/// What `save_edit` did with the new text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// The text was replaced
    Saved,
    /// The new text was blank; the old text was kept
    Discarded,
}

/// Append a task. The text is trimmed; blank text is rejected.
/// Returns the index of the new task.
pub fn add_task(list: &mut TaskList, text: &str) -> Result<usize, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }
    list.push(Task::new(text));
    Ok(list.len() - 1)
}

/// Put a row into edit mode. Other rows keep their own edit state.
pub fn begin_edit(list: &mut TaskList, index: usize) -> Result<(), TaskError> {
    let task = list.get_mut(index).ok_or(TaskError::NotFound(index))?;
    task.editing = true;
    Ok(())
}

/// Leave edit mode, replacing the text unless the new text is blank.
pub fn save_edit(
    list: &mut TaskList,
    index: usize,
    new_text: &str,
) -> Result<EditResult, TaskError> {
    let task = list.get_mut(index).ok_or(TaskError::NotFound(index))?;
    task.editing = false;

    let new_text = new_text.trim();
    if new_text.is_empty() {
        return Ok(EditResult::Discarded);
    }
    task.text = new_text.to_string();
    Ok(EditResult::Saved)
}

/// Delete a task. Every later task moves up one index.
pub fn remove_task(list: &mut TaskList, index: usize) -> Result<Task, TaskError> {
    list.remove(index).ok_or(TaskError::NotFound(index))
}

/// Flip the checkbox. Returns the new `done` value.
pub fn toggle_done(list: &mut TaskList, index: usize) -> Result<bool, TaskError> {
    let task = list.get_mut(index).ok_or(TaskError::NotFound(index))?;
    task.done = !task.done;
    Ok(task.done)
}

/// Throw away every task and build a fresh list from `texts`, in order.
/// Texts are taken as given: blank entries become blank rows.
pub fn replace_all<I>(list: &mut TaskList, texts: I) -> usize
where
    I: IntoIterator<Item = String>,
{
    list.clear();
    for text in texts {
        list.push(Task::new(text));
    }
    list.len()
}
