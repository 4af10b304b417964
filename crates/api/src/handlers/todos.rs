//! Handlers for the `/todos` resource.
//!
//! Each handler locks the shared store for the duration of the call; the
//! store operations themselves are synchronous, so the lock is held only
//! for in-memory work. Payloads are validated before the store is touched.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use todos_core::store::BulkDeleteOutcome;
use todos_core::todo::{validate_create, validate_update, CreateTodo, Todo, UpdateTodo};
use todos_core::types::TodoId;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let store = state.store.lock().await;
    Ok(Json(store.find_all().to_vec()))
}

/// GET /api/v1/todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> AppResult<Json<Todo>> {
    let store = state.store.lock().await;
    let todo = store.find_one(id)?;
    Ok(Json(todo.clone()))
}

/// POST /api/v1/todos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    validate_create(&input)?;

    let mut store = state.store.lock().await;
    let todo = store.create(input);

    tracing::info!(id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/v1/todos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    validate_update(&input)?;

    let mut store = state.store.lock().await;
    let todo = store.update(id, input)?;

    tracing::info!(id, "Todo updated");

    Ok(Json(todo.clone()))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<TodoId>,
) -> AppResult<StatusCode> {
    let mut store = state.store.lock().await;
    store.remove(id)?;

    tracing::info!(id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/todos
pub async fn delete_all(State(state): State<AppState>) -> AppResult<Json<BulkDeleteOutcome>> {
    let mut store = state.store.lock().await;
    let outcome = store.remove_all();

    tracing::info!(count = outcome.count, "All todos deleted");

    Ok(Json(outcome))
}

/// DELETE /api/v1/todos/bulk-completed
pub async fn delete_completed(
    State(state): State<AppState>,
) -> AppResult<Json<BulkDeleteOutcome>> {
    let mut store = state.store.lock().await;
    let outcome = store.remove_completed();

    tracing::info!(count = outcome.count, "Completed todos deleted");

    Ok(Json(outcome))
}
