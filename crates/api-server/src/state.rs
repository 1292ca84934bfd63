//! Application state

use std::sync::Arc;

use taskboard_core::task::{SqliteTaskStore, TaskRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_store: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Open the task database at `database_url` and build the state around it
    pub async fn new(database_url: &str) -> taskboard_core::Result<Self> {
        let task_store = SqliteTaskStore::connect(database_url).await?;
        Ok(Self::with_store(Arc::new(task_store)))
    }

    /// Build the state around an already constructed store
    pub fn with_store(task_store: Arc<dyn TaskRepository>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { task_store }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &dyn TaskRepository {
        self.inner.task_store.as_ref()
    }
}
