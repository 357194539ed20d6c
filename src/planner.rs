//! This module combines a [`TaskClient`] and a [`TaskCache`] into the task lists a user sees and edits
//!
//! Reads are served from the cache when possible. When the store cannot be reached, reads degrade to the
//! [built-in default tasks](crate::config::default_tasks) and writes are only logged: the in-memory state is always considered authoritative.

use crate::traits::TaskStore;
use crate::client::TaskClient;
use crate::cache::TaskCache;
use crate::calendar::{DayStatus, MonthView};
use crate::{DateKey, Error, Task};


/// The task lists of a user, as displayed by a calendar
pub struct Planner<S: TaskStore + 'static> {
    client: TaskClient<S>,
    cache: TaskCache,
}

impl<S: TaskStore + 'static> Planner<S> {
    /// Create a planner, with an empty cache
    pub fn new(client: TaskClient<S>) -> Self {
        Self::with_cache(client, TaskCache::new())
    }

    pub fn with_cache(client: TaskClient<S>, cache: TaskCache) -> Self {
        Self { client, cache }
    }

    pub fn client(&self) -> &TaskClient<S> { &self.client }
    pub fn cache(&self) -> &TaskCache { &self.cache }

    /// Returns the tasks of a key, from the cache if they are known already
    pub async fn tasks_for(&mut self, key: &DateKey) -> Vec<Task> {
        if key.is_shared_defaults() {
            return self.shared_defaults().await;
        }

        if let Some(tasks) = self.cache.get(key) {
            return tasks.clone();
        }

        let tasks = match self.client.fetch_tasks_for_key(key).await {
            Ok(tasks) => tasks,
            Err(err) => {
                log::warn!("Unable to fetch tasks for {} ({}). Using the built-in default tasks", key, err);
                crate::config::default_tasks()
            },
        };
        self.cache.put(key.clone(), tasks.clone());
        tasks
    }

    /// Replace the tasks of a key.
    ///
    /// The cache is updated at once. A failed write to the store is logged, but not reported.
    pub async fn save_tasks(&mut self, key: &DateKey, tasks: Vec<Task>) {
        if key.is_shared_defaults() {
            return self.save_shared_defaults(tasks).await;
        }

        self.cache.put(key.clone(), tasks.clone());
        if let Err(err) = self.client.save_tasks_for_key(key, &tasks).await {
            log::error!("Unable to save tasks for {}: {}", key, err);
        }
    }

    /// Returns the shared default tasks
    pub async fn shared_defaults(&self) -> Vec<Task> {
        self.client.current_shared_defaults().await
    }

    /// Fetch the shared default tasks from the store again
    pub async fn refresh_shared_defaults(&mut self) -> Vec<Task> {
        self.client.fetch_shared_defaults_or_default().await
    }

    /// Replace the shared default tasks.
    ///
    /// Since every list depends on them, the whole cache is cleared. A failed write to the store is logged, but not reported.
    pub async fn save_shared_defaults(&mut self, tasks: Vec<Task>) {
        if let Err(err) = self.client.save_shared_defaults(&tasks).await {
            log::error!("Unable to save shared default tasks: {}", err);
        }
        self.cache.clear_all();
    }

    /// Append a new, not-done task to a list. Blank texts and texts already in the list are rejected
    pub async fn add_task(&mut self, key: &DateKey, text: &str) -> Result<Vec<Task>, Error> {
        let task = Task::validated(text)?;
        self.edit(key, move |tasks| {
            if tasks.iter().any(|existing| existing.same_text_as(&task)) {
                return Err(Error::InvalidTask(format!("{:?} is already in this list", task.text())));
            }
            tasks.push(task);
            Ok(())
        }).await
    }

    /// Flip the completion status of a task
    pub async fn toggle_task(&mut self, key: &DateKey, index: usize) -> Result<Vec<Task>, Error> {
        let owned_key = key.clone();
        self.edit(key, move |tasks| {
            match tasks.get_mut(index) {
                None => Err(Error::NoSuchTask { key: owned_key, index }),
                Some(task) => {
                    task.toggle();
                    Ok(())
                },
            }
        }).await
    }

    /// Remove a task from a list
    pub async fn delete_task(&mut self, key: &DateKey, index: usize) -> Result<Vec<Task>, Error> {
        let owned_key = key.clone();
        self.edit(key, move |tasks| {
            if index >= tasks.len() {
                return Err(Error::NoSuchTask { key: owned_key, index });
            }
            tasks.remove(index);
            Ok(())
        }).await
    }

    /// See [`Self::add_task`]
    pub async fn add_default_task(&mut self, text: &str) -> Result<Vec<Task>, Error> {
        self.add_task(&DateKey::shared_defaults(), text).await
    }

    /// See [`Self::toggle_task`]
    pub async fn toggle_default_task(&mut self, index: usize) -> Result<Vec<Task>, Error> {
        self.toggle_task(&DateKey::shared_defaults(), index).await
    }

    /// See [`Self::delete_task`]
    pub async fn delete_default_task(&mut self, index: usize) -> Result<Vec<Task>, Error> {
        self.delete_task(&DateKey::shared_defaults(), index).await
    }

    /// Apply an edit to a list, and save it in case it succeeds
    async fn edit<F>(&mut self, key: &DateKey, edit: F) -> Result<Vec<Task>, Error>
    where
        F: FnOnce(&mut Vec<Task>) -> Result<(), Error>,
    {
        let mut tasks = self.tasks_for(key).await;
        edit(&mut tasks)?;
        self.save_tasks(key, tasks.clone()).await;
        Ok(tasks)
    }

    /// The status of a day, from what is currently cached. This never triggers a request
    pub fn day_status(&self, key: &DateKey) -> DayStatus {
        DayStatus::from_tasks(self.cache.get(key).map(|tasks| tasks.as_slice()))
    }

    /// The status of every day of a month (days start at 1), from what is currently cached
    pub fn month_statuses(&self, month: &MonthView) -> Vec<(u32, DayStatus)> {
        (1..=month.days_in_month())
            .map(|day| (day, self.day_status(&month.date_key(day))))
            .collect()
    }

    /// Fetch (and cache) every day of a month that is not cached yet
    pub async fn load_month(&mut self, month: &MonthView) {
        for key in month.date_keys() {
            if self.cache.contains(&key) == false {
                self.tasks_for(&key).await;
            }
        }
    }
}
