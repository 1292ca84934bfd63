//! Task API endpoints
//!
//! CRUD operations on tasks for the web client. Every response carries a
//! single task or a list of tasks in the `{id, name, content, done}` shape.

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use taskboard_core::task::{parse_done_flag, NewTask, Task};

use super::{not_found, store_error, RouteError};
use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContentRequest {
    pub content: String,
}

/// `done` is kept raw; see [`parse_done_flag`] for how it is read.
#[derive(Debug, Deserialize)]
pub struct UpdateDoneAllRequest {
    pub done: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub done: bool,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            content: task.content,
            done: task.done,
        }
    }
}

fn task_list(tasks: Vec<Task>) -> Json<Vec<TaskResponse>> {
    Json(tasks.into_iter().map(TaskResponse::from).collect())
}

async fn fetch_task(state: &AppState, id: i64) -> Result<Task, RouteError> {
    state
        .task_store()
        .get(id)
        .await
        .map_err(store_error)?
        .ok_or_else(|| not_found(id))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, RouteError> {
    let created = state
        .task_store()
        .create(NewTask::new(req.name, req.content))
        .await
        .map_err(store_error)?;

    Ok(Json(TaskResponse::from(created)))
}

/// GET /tasks/all - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<TaskResponse>>, RouteError> {
    let tasks = state.task_store().list().await.map_err(store_error)?;
    Ok(task_list(tasks))
}

/// GET /tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, RouteError> {
    let task = fetch_task(&state, id).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /tasks/all - Delete every task, echoing what was removed
async fn delete_all_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, RouteError> {
    let removed = state.task_store().delete_all().await.map_err(store_error)?;
    Ok(task_list(removed))
}

/// DELETE /tasks/{id} - Delete a task, echoing its last values
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, RouteError> {
    let removed = state.task_store().delete(id).await.map_err(store_error)?;

    match removed {
        Some(task) => Ok(Json(TaskResponse::from(task))),
        None => Err(not_found(id)),
    }
}

/// PUT /tasks/done/{id} - Flip the done flag
async fn toggle_task_done(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TaskResponse>, RouteError> {
    let mut task = fetch_task(&state, id).await?;
    task.toggle_done();

    let updated = state.task_store().update(task).await.map_err(store_error)?;
    Ok(Json(TaskResponse::from(updated)))
}

/// PUT /tasks/name/{id} - Rename a task
async fn update_task_name(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNameRequest>,
) -> Result<Json<TaskResponse>, RouteError> {
    let task = fetch_task(&state, id).await?.with_name(req.name);

    let updated = state.task_store().update(task).await.map_err(store_error)?;
    Ok(Json(TaskResponse::from(updated)))
}

/// PUT /tasks/content/{id} - Replace a task's content
async fn update_task_content(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateContentRequest>,
) -> Result<Json<TaskResponse>, RouteError> {
    let task = fetch_task(&state, id).await?.with_content(req.content);

    let updated = state.task_store().update(task).await.map_err(store_error)?;
    Ok(Json(TaskResponse::from(updated)))
}

/// PUT /tasks/done/all - Mark every task done or not done
async fn update_done_all(
    State(state): State<AppState>,
    Json(req): Json<UpdateDoneAllRequest>,
) -> Result<Json<Vec<TaskResponse>>, RouteError> {
    let done = parse_done_flag(&req.done);
    let tasks = state
        .task_store()
        .set_done_all(done)
        .await
        .map_err(store_error)?;

    Ok(task_list(tasks))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(create_task))
        .route("/tasks/all", get(list_tasks).delete(delete_all_tasks))
        .route("/tasks/{id}", get(get_task).delete(delete_task))
        .route("/tasks/done/all", put(update_done_all))
        .route("/tasks/done/{id}", put(toggle_task_done))
        .route("/tasks/name/{id}", put(update_task_name))
        .route("/tasks/content/{id}", put(update_task_content))
}
