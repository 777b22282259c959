use serde::{Deserialize, Serialize};

/// A single row in the to-do list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task text as displayed
    pub text: String,
    /// Checkbox state
    pub done: bool,
    /// Whether the row currently shows its edit field instead of the text.
    /// Transient UI state, never serialized.
    #[serde(skip)]
    pub editing: bool,
}

impl Task {
    /// Create a fresh, unchecked task that is not being edited
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            text: text.into(),
            done: false,
            editing: false,
        }
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}

/// The ordered list of tasks. Position is the only identity a task has:
/// removing a task shifts every later index down by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of tasks checked off
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<Task> {
        if index < self.tasks.len() {
            Some(self.tasks.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn clear(&mut self) {
        self.tasks.clear();
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
