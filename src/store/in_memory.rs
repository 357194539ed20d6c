use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::TaskStore;
use crate::mock_behaviour::MockBehaviour;
use crate::utils::lock;
use crate::{DateKey, Task};


/// A task store that keeps its lists in memory.
///
/// This is mostly useful to mock a server in tests: a [`MockBehaviour`] can make some requests fail.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    lists: Mutex<HashMap<DateKey, Vec<Task>>>,
    mock_behaviour: Mutex<MockBehaviour>,
    n_writes: Mutex<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behaviour(behaviour: MockBehaviour) -> Self {
        Self {
            mock_behaviour: Mutex::new(behaviour),
            ..Self::default()
        }
    }

    /// Store a list without going through the mock behaviour
    pub fn insert(&self, key: DateKey, tasks: Vec<Task>) {
        lock(&self.lists).insert(key, tasks);
    }

    /// Returns what is currently stored for a key, without going through the mock behaviour
    pub fn stored(&self, key: &DateKey) -> Option<Vec<Task>> {
        lock(&self.lists).get(key).cloned()
    }

    /// How many successful writes this store received
    pub fn write_count(&self) -> usize {
        *lock(&self.n_writes)
    }

    pub fn set_behaviour(&self, behaviour: MockBehaviour) {
        *lock(&self.mock_behaviour) = behaviour;
    }
}

#[async_trait]
impl TaskStore for InMemoryStore {
    async fn read_tasks(&self, key: &DateKey) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>> {
        lock(&self.mock_behaviour).can_read_tasks()?;
        Ok(lock(&self.lists).get(key).cloned().unwrap_or_default())
    }

    async fn replace_tasks(&self, key: &DateKey, tasks: &[Task]) -> Result<(), Box<dyn Error + Send + Sync>> {
        let n_yields = {
            let mut behaviour = lock(&self.mock_behaviour);
            behaviour.can_replace_tasks()?;
            behaviour.replace_tasks_yields
        };
        for _ in 0..n_yields {
            tokio::task::yield_now().await;
        }

        lock(&self.lists).insert(key.clone(), tasks.to_vec());
        *lock(&self.n_writes) += 1;
        Ok(())
    }
}
