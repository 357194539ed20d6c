//! This module provides a client that reads and writes task lists from a [`TaskStore`], and merges them with the shared default tasks

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use crate::traits::TaskStore;
use crate::merge::{date_specific_subset, merge_with_shared};
use crate::utils::lock;
use crate::{DateKey, Error, Task};


/// A client to a task store, that is aware of the shared default tasks
///
/// The store only holds the date-specific tasks of every date. This client adds the shared defaults back on read, and removes them on write.
///
/// Errors are returned as-is: it is up to the caller to decide what to display when the store cannot be reached (see [`Planner`](crate::planner::Planner)).
pub struct TaskClient<S: TaskStore + 'static> {
    store: Arc<S>,

    /// The shared defaults this client read or wrote last
    known_shared_defaults: Mutex<Option<Vec<Task>>>,
    /// Background writes that have been started, but maybe not completed yet
    pending_writes: Mutex<Vec<JoinHandle<()>>>,
}

impl<S: TaskStore + 'static> TaskClient<S> {
    /// Create a client. This does not start a connection
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            known_shared_defaults: Mutex::new(None),
            pending_writes: Mutex::new(Vec::new()),
        }
    }

    /// Returns the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the shared defaults this client read or wrote last, without any request
    pub fn known_shared_defaults(&self) -> Option<Vec<Task>> {
        lock(&self.known_shared_defaults).clone()
    }

    fn remember_shared_defaults(&self, tasks: &[Task]) {
        *lock(&self.known_shared_defaults) = Some(tasks.to_vec());
    }

    /// Fetch the shared default tasks from the store.
    ///
    /// This returns [`Error::EmptyResult`] in case none are stored yet.
    pub async fn fetch_shared_defaults(&self) -> Result<Vec<Task>, Error> {
        let key = DateKey::shared_defaults();
        let tasks = self.store.read_tasks(&key).await.map_err(Error::network)?;
        if tasks.is_empty() {
            return Err(Error::EmptyResult);
        }

        self.remember_shared_defaults(&tasks);
        Ok(tasks)
    }

    /// Fetch the shared default tasks from the store, or use the [built-in defaults](crate::config::default_tasks) in case none are available
    pub async fn fetch_shared_defaults_or_default(&self) -> Vec<Task> {
        match self.fetch_shared_defaults().await {
            Ok(tasks) => tasks,
            Err(Error::EmptyResult) => {
                log::debug!("No shared default tasks are stored. Using the built-in ones");
                let defaults = crate::config::default_tasks();
                self.remember_shared_defaults(&defaults);
                defaults
            },
            Err(err) => {
                log::warn!("Unable to fetch shared default tasks: {}. Using the built-in ones", err);
                let defaults = crate::config::default_tasks();
                self.remember_shared_defaults(&defaults);
                defaults
            },
        }
    }

    /// Returns the shared defaults this client knows about, or fetch them if none are known yet
    pub async fn current_shared_defaults(&self) -> Vec<Task> {
        match self.known_shared_defaults() {
            Some(tasks) => tasks,
            None => self.fetch_shared_defaults_or_default().await,
        }
    }

    /// Fetch the tasks of a key, merged with the shared defaults.
    ///
    /// In case no date-specific task is stored for this key, the shared defaults are returned, and they are written to the store in the background
    /// (see [`Self::wait_for_pending_writes`]).
    pub async fn fetch_tasks_for_key(&self, key: &DateKey) -> Result<Vec<Task>, Error> {
        if key.is_shared_defaults() {
            return Ok(self.fetch_shared_defaults_or_default().await);
        }

        let date_specific = match self.store.read_tasks(key).await {
            Ok(tasks) => tasks,
            Err(err) => {
                log::warn!("Unable to fetch tasks for {}: {}", key, err);
                return Err(Error::network(err));
            },
        };
        let shared = self.fetch_shared_defaults_or_default().await;

        if date_specific.is_empty() {
            log::debug!("No task stored for {} yet, initializing it", key);
            self.spawn_initialize(key.clone(), shared.clone());
            return Ok(shared);
        }

        Ok(merge_with_shared(&shared, &date_specific))
    }

    /// Store the tasks of a key.
    ///
    /// Only the tasks that are not shared defaults are written. In particular, the completion of a shared default task is not stored.
    pub async fn save_tasks_for_key(&self, key: &DateKey, tasks: &[Task]) -> Result<(), Error> {
        if key.is_shared_defaults() {
            return self.save_shared_defaults(tasks).await;
        }

        // A pending initialization must not land after (and overwrite) this write
        self.wait_for_pending_writes().await;

        let shared = self.current_shared_defaults().await;
        for task in tasks {
            if shared.iter().any(|sd| sd.same_text_as(task) && sd.done() != task.done()) {
                log::info!("Completion of shared default task {:?} is not stored for {}", task.text(), key);
            }
        }

        let subset = date_specific_subset(tasks, &shared);
        log::debug!("Saving {} date-specific tasks (out of {}) for {}", subset.len(), tasks.len(), key);
        self.store.replace_tasks(key, &subset).await.map_err(Error::network)
    }

    /// Store the shared default tasks.
    ///
    /// Every list resolved before this call is outdated afterwards: callers that cache them must clear their caches.
    pub async fn save_shared_defaults(&self, tasks: &[Task]) -> Result<(), Error> {
        self.remember_shared_defaults(tasks);
        self.store
            .replace_tasks(&DateKey::shared_defaults(), tasks)
            .await
            .map_err(Error::network)
    }

    /// Write the initial tasks of a key, without waiting for the write to complete. Failures are only logged
    fn spawn_initialize(&self, key: DateKey, tasks: Vec<Task>) {
        let store = Arc::clone(&self.store);
        let handle = tokio::spawn(async move {
            if let Err(err) = store.replace_tasks(&key, &tasks).await {
                log::error!("Unable to initialize tasks for {}: {}", key, err);
            }
        });

        let mut pending = lock(&self.pending_writes);
        pending.retain(|previous| previous.is_finished() == false);
        pending.push(handle);
    }

    /// Wait until every background write started so far has completed
    pub async fn wait_for_pending_writes(&self) {
        let pending: Vec<JoinHandle<()>> = lock(&self.pending_writes).drain(..).collect();
        for handle in pending {
            if let Err(err) = handle.await {
                log::error!("A background write did not complete: {}", err);
            }
        }
    }
}
