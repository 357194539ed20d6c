//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

use crate::Task;

/// The reserved key the shared default tasks are stored under
pub const SHARED_DEFAULTS_KEY: &str = "shared_default_tasks";

/// Base URL of the task resource. Tasks of a key are read from `{API_URL}/{USER_ID}/{key}`, and written with a `POST {API_URL}`.
/// It is read from the `TASK_CALENDAR_API_URL` environment variable when set.
/// Feel free to override it when initing this library.
pub static API_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new(
    std::env::var("TASK_CALENDAR_API_URL")
        .unwrap_or_else(|_| "https://todo-backend-5t1x.onrender.com/api/task".to_string())
)));

/// The user whose tasks are read and written.
/// It is read from the `TASK_CALENDAR_USER_ID` environment variable when set.
/// Feel free to override it when initing this library.
pub static USER_ID: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new(
    std::env::var("TASK_CALENDAR_USER_ID")
        .unwrap_or_else(|_| "2313841".to_string())
)));

/// The tasks used when nothing better is available (no shared defaults on the server, or no server at all)
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("LeetCode", false),
        Task::new("GitHub Contribution", false),
        Task::new("Workout", false),
    ]
}

/// Returns the current value of a configuration option
pub fn current(option: &Lazy<Arc<Mutex<String>>>) -> String {
    match option.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Overrides a configuration option
pub fn set(option: &Lazy<Arc<Mutex<String>>>, value: String) {
    match option.lock() {
        Ok(mut guard) => *guard = value,
        Err(poisoned) => *poisoned.into_inner() = value,
    }
}
