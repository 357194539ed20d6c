use std::error::Error;

use async_trait::async_trait;

use crate::{DateKey, Task};

/// A place task lists are stored in, usually a remote server
///
/// Every key maps to a whole list: lists are always read and written as a whole.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the tasks stored for this key.
    /// An empty list means nothing has been stored (or that an empty list has been stored, this is not distinguishable)
    async fn read_tasks(&self, key: &DateKey) -> Result<Vec<Task>, Box<dyn Error + Send + Sync>>;

    /// Replace every task stored for this key
    async fn replace_tasks(&self, key: &DateKey, tasks: &[Task]) -> Result<(), Box<dyn Error + Send + Sync>>;
}
