//! This module provides an in-memory cache of resolved task lists

use std::collections::HashMap;

use crate::{DateKey, Task};


/// Resolved (i.e. merged with the shared defaults) task lists, by key
///
/// Entries are populated lazily, and are never evicted. Since every entry depends on the shared defaults, the whole cache must be cleared when they change.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskCache {
    lists: HashMap<DateKey, Vec<Task>>,
}

impl TaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached list for this key, if any
    pub fn get(&self, key: &DateKey) -> Option<&Vec<Task>> {
        self.lists.get(key)
    }

    /// Overwrite the cached list for this key
    pub fn put(&mut self, key: DateKey, tasks: Vec<Task>) {
        log::trace!("Caching {} tasks for {}", tasks.len(), key);
        self.lists.insert(key, tasks);
    }

    /// Remove every cached list
    pub fn clear_all(&mut self) {
        log::debug!("Clearing {} cached task lists", self.lists.len());
        self.lists.clear();
    }

    pub fn contains(&self, key: &DateKey) -> bool {
        self.lists.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
