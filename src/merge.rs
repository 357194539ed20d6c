//! Reconciliation of date-specific tasks with the shared default tasks

use std::collections::HashSet;

use crate::Task;

/// Returns the shared defaults, followed by the date-specific tasks whose text is not one of a shared default.
///
/// Shared defaults always win: a date-specific task that has the same text as a shared default is dropped, including its `done` state.
/// Relative order is preserved on both sides. The result never holds two tasks with the same text (the first one is kept).
pub fn merge_with_shared(shared: &[Task], date_specific: &[Task]) -> Vec<Task> {
    let mut seen = HashSet::new();
    let mut merged = Vec::with_capacity(shared.len() + date_specific.len());
    for task in shared.iter().chain(date_specific.iter()) {
        if seen.insert(task.text()) {
            merged.push(task.clone());
        }
    }
    merged
}

/// Returns the tasks that are specific to a date, i.e. those whose text is not one of a shared default.
///
/// This is what gets stored on the server for a date: shared defaults are added back on read by [`merge_with_shared`]
pub fn date_specific_subset(tasks: &[Task], shared: &[Task]) -> Vec<Task> {
    let shared_texts = text_set(shared);
    tasks.iter()
        .filter(|task| shared_texts.contains(task.text()) == false)
        .cloned()
        .collect()
}

fn text_set(tasks: &[Task]) -> HashSet<&str> {
    tasks.iter().map(|task| task.text()).collect()
}
