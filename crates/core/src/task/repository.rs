//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{NewTask, Task};
use crate::Result;

/// Repository interface for task CRUD operations
///
/// Every mutating call is committed before it returns.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with `done = false`
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: i64) -> Result<Option<Task>>;

    /// Get all tasks, oldest first
    async fn list(&self) -> Result<Vec<Task>>;

    /// Persist the fields of an already-fetched task
    async fn update(&self, task: Task) -> Result<Task>;

    /// Delete a task by ID, returning its last values
    async fn delete(&self, id: i64) -> Result<Option<Task>>;

    /// Delete every task, returning them as they were before deletion
    async fn delete_all(&self) -> Result<Vec<Task>>;

    /// Set the done flag on every task
    async fn set_done_all(&self, done: bool) -> Result<Vec<Task>>;

    /// Number of stored tasks
    async fn count(&self) -> Result<i64>;
}
