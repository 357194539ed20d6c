//! Some utility functions

use std::sync::{Mutex, MutexGuard};

use crate::Task;
use crate::calendar::DayStatus;

/// Lock a mutex, even if a previous holder panicked
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            log::warn!("A mutex has been poisoned. Using its current value anyway");
            poisoned.into_inner()
        },
    }
}

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("    (no task)");
    }
    for (index, task) in tasks.iter().enumerate() {
        print_task(index, task);
    }
    let n_done = tasks.iter().filter(|task| task.done()).count();
    println!("    {}/{} done", n_done, tasks.len());
}

pub fn print_task(index: usize, task: &Task) {
    let completion = if task.done() { "✓" } else { " " };
    println!("    {:>2}. [{}] {}", index, completion, task.text());
}

/// A one-character representation of a day status
pub fn status_symbol(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Empty => ".",
        DayStatus::Completed => "✓",
        DayStatus::Incomplete => "~",
    }
}

/// A five-character calendar cell: the day number, its status symbol, and `*` for today
pub fn day_cell(day: u32, status: DayStatus, is_today: bool) -> String {
    let today_marker = if is_today { "*" } else { " " };
    format!("{:>3}{}{}", day, status_symbol(status), today_marker)
}
