//! To-do tasks, as they are stored on the task server

use serde::{Deserialize, Serialize};

/// A to-do task
///
/// Tasks have no identifier. Inside a list, a task is identified by its position, and when lists are merged together, by its text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The display text of the task
    text: String,
    /// Whether this task has been done
    done: bool,
}

impl Task {
    /// Create a new task.
    ///
    /// No check is done on `text`. See [`Task::validated`] to reject blank texts
    pub fn new<S: ToString>(text: S, done: bool) -> Self {
        Self { text: text.to_string(), done }
    }

    /// Create a new, not-done task, or return an error if the text is blank
    pub fn validated<S: ToString>(text: S) -> Result<Self, crate::Error> {
        let text = text.to_string();
        if text.trim().is_empty() {
            return Err(crate::Error::InvalidTask("task text must not be empty".to_string()));
        }
        Ok(Self::new(text, false))
    }

    pub fn text(&self) -> &str { &self.text }
    pub fn done(&self) -> bool { self.done }

    /// Flip the completion status
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Whether this task would collide with `other` in a merge
    pub fn same_text_as(&self, other: &Task) -> bool {
        self.text == other.text
    }
}
