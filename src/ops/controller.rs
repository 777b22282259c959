use std::path::PathBuf;

use crate::io::loader::load_tasks;
use crate::model::task::TaskList;
use crate::ops::task_ops::{self, TaskError};

/// A user action against the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a task from the entry field
    Add(String),
    /// Show the edit field for a row
    BeginEdit(usize),
    /// Commit a row's edit field
    SaveEdit { index: usize, text: String },
    /// Delete a row
    Remove(usize),
    /// Flip a row's checkbox
    ToggleDone(usize),
    /// Replace the whole list with these texts
    ReplaceAll(Vec<String>),
    /// Load a file and replace the whole list with its tasks
    Load(PathBuf),
}

/// Whether a command changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Blank input or an index that no longer exists
    Ignored,
}

/// Owns the task list and applies commands to it. Nothing here reports an
/// error to the caller: rejected input and failed loads leave the list as
/// the command's rules say and carry on.
#[derive(Debug, Default)]
pub struct Controller {
    tasks: TaskList,
}

impl Controller {
    pub fn new() -> Self {
        Controller::default()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::trace!(?command, "execute");
        let result = match command {
            Command::Add(text) => task_ops::add_task(&mut self.tasks, &text).map(drop),
            Command::BeginEdit(index) => task_ops::begin_edit(&mut self.tasks, index),
            Command::SaveEdit { index, text } => {
                task_ops::save_edit(&mut self.tasks, index, &text).map(drop)
            }
            Command::Remove(index) => task_ops::remove_task(&mut self.tasks, index).map(drop),
            Command::ToggleDone(index) => task_ops::toggle_done(&mut self.tasks, index).map(drop),
            Command::ReplaceAll(texts) => {
                task_ops::replace_all(&mut self.tasks, texts);
                Ok(())
            }
            Command::Load(path) => {
                let texts = load_tasks(&path);
                let count = task_ops::replace_all(&mut self.tasks, texts);
                tracing::info!(path = %path.display(), count, "replaced task list from file");
                Ok(())
            }
        };

        match result {
            Ok(()) => Outcome::Applied,
            Err(e @ TaskError::NotFound(_)) => {
                tracing::debug!(error = %e, "command ignored");
                Outcome::Ignored
            }
            Err(TaskError::EmptyText) => Outcome::Ignored,
        }
    }
}
