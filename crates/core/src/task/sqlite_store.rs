//! SQLite-backed task storage implementation
//!
//! Stores tasks in a single `task` table through a sqlx connection pool.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::model::{NewTask, Task};
use super::repository::TaskRepository;
use crate::{Error, Result};

const SCHEMA_TASK: &str = "CREATE TABLE IF NOT EXISTS task (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL UNIQUE,
    content VARCHAR(200) NOT NULL,
    done BOOLEAN NOT NULL DEFAULT 0
)";
const INSERT_TASK: &str = "INSERT INTO task (name, content, done) VALUES (?, ?, 0)";
const SELECT_TASKS: &str = "SELECT id, name, content, done FROM task ORDER BY id";
const SELECT_TASK_BY_ID: &str = "SELECT id, name, content, done FROM task WHERE id = ?";
const UPDATE_TASK: &str = "UPDATE task SET name = ?, content = ?, done = ? WHERE id = ?";
const UPDATE_DONE_ALL: &str = "UPDATE task SET done = ?";
const DELETE_TASK: &str = "DELETE FROM task WHERE id = ? RETURNING id, name, content, done";
const DELETE_TASKS: &str = "DELETE FROM task RETURNING id, name, content, done";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM task";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Task store backed by a SQLite database
#[derive(Clone)]
pub struct SqliteTaskStore {
    pool: SqlitePool,
}

impl SqliteTaskStore {
    /// Open the database at `url`, creating the file if it doesn't exist.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Open a private in-memory database.
    ///
    /// Every connection to `:memory:` sees its own database, so the pool is
    /// pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, creating the `task` table if needed.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(SCHEMA_TASK).execute(&pool).await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskStore {
    async fn create(&self, task: NewTask) -> Result<Task> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(INSERT_TASK)
            .bind(&task.name)
            .bind(&task.content)
            .execute(&mut *tx)
            .await
            .map_err(|e| Error::from_write(e, &task.name))?;
        tx.commit().await?;

        let created = Task {
            id: result.last_insert_rowid(),
            name: task.name,
            content: task.content,
            done: false,
        };
        tracing::debug!(task_id = created.id, "task created");
        Ok(created)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>> {
        let task = sqlx::query_as::<_, Task>(SELECT_TASK_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let tasks = sqlx::query_as::<_, Task>(SELECT_TASKS)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(UPDATE_TASK)
            .bind(&task.name)
            .bind(&task.content)
            .bind(task.done)
            .bind(task.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| Error::from_write(e, &task.name))?;
        if result.rows_affected() == 0 {
            return Err(Error::TaskNotFound(task.id));
        }
        tx.commit().await?;

        tracing::debug!(task_id = task.id, done = task.done, "task updated");
        Ok(task)
    }

    async fn delete(&self, id: i64) -> Result<Option<Task>> {
        // Single write statement: a read ahead of it cannot upgrade its lock
        // while another writer holds the database.
        let removed = sqlx::query_as::<_, Task>(DELETE_TASK)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        if removed.is_some() {
            tracing::debug!(task_id = id, "task deleted");
        }
        Ok(removed)
    }

    async fn delete_all(&self) -> Result<Vec<Task>> {
        let mut tasks = sqlx::query_as::<_, Task>(DELETE_TASKS)
            .fetch_all(&self.pool)
            .await?;
        // RETURNING order is unspecified
        tasks.sort_by_key(|t| t.id);

        tracing::debug!(count = tasks.len(), "all tasks deleted");
        Ok(tasks)
    }

    async fn set_done_all(&self, done: bool) -> Result<Vec<Task>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(UPDATE_DONE_ALL)
            .bind(done)
            .execute(&mut *tx)
            .await?;
        let tasks = sqlx::query_as::<_, Task>(SELECT_TASKS)
            .fetch_all(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::debug!(count = tasks.len(), done, "done flag set on all tasks");
        Ok(tasks)
    }

    async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(COUNT_TASKS)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
