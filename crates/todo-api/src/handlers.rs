use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use todo_domain::{json, CreateTodoRequest, Todo, UpdateTodoRequest};

use crate::auth::ClientIdentity;
use crate::error::ApiError;
use crate::AppState;

pub async fn list_todos(
    _identity: ClientIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.list()?;
    Ok(Json(todos))
}

pub async fn create_todo(
    _identity: ClientIdentity,
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input: CreateTodoRequest = json::decode(&body)?;

    if input.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
    }

    let todo = Todo::new(state.ids.generate(), input.text);
    state.todos.insert(todo.clone())?;

    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    _identity: ClientIdentity,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, ApiError> {
    match state.todos.get(&id)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn update_todo(
    _identity: ClientIdentity,
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Todo>, ApiError> {
    let patch: UpdateTodoRequest = json::decode(&body)?;

    if patch.is_empty() {
        return Err(ApiError::BadRequest(
            "At least one of 'text' or 'completed' is required".to_string(),
        ));
    }
    if let Some(text) = &patch.text {
        if text.trim().is_empty() {
            return Err(ApiError::BadRequest("Text cannot be empty".to_string()));
        }
    }

    match state.todos.update(&id, &patch)? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete_todo(
    _identity: ClientIdentity,
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    if state.todos.delete(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
