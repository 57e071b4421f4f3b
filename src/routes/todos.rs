use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::{TaskInput, TaskPatch},
    services::AppState,
};
use actix_web::{delete, get, patch, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Task ids are opaque at the HTTP surface: anything that does not parse as
/// one of our ids is simply an id we do not have.
fn parse_task_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Todo not found".into()))
}

/// Retrieves the authenticated user's tasks in creation order.
///
/// ## Responses:
/// - `200 OK`: a JSON array of `Task` objects, possibly empty.
/// - `401 Unauthorized`: missing or invalid token.
#[get("")]
pub async fn list_todos(
    state: web::Data<AppState>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = state.todos.list(user_id.0);

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// ## Request Body:
/// - `title`: required, must not be blank.
/// - `description` (optional): defaults to the empty string.
///
/// ## Responses:
/// - `201 Created`: the new `Task`, `completed` false.
/// - `400 Bad Request`: blank or missing title.
/// - `401 Unauthorized`: missing or invalid token.
/// - `422 Unprocessable Entity`: title or description over the length limit.
#[post("")]
pub async fn create_todo(
    state: web::Data<AppState>,
    user_id: AuthenticatedUserId,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = state.todos.create(user_id.0, task_data.into_inner())?;

    Ok(HttpResponse::Created().json(task))
}

/// Applies a partial update to one of the authenticated user's tasks.
///
/// Only fields present in the body are changed; `updatedAt` is always
/// refreshed. A task id owned by someone else is reported exactly like an
/// unknown id.
///
/// ## Responses:
/// - `200 OK`: the updated `Task`.
/// - `400 Bad Request`: a present-but-blank title.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no such task in the caller's collection.
#[put("/{id}")]
pub async fn update_todo(
    state: web::Data<AppState>,
    user_id: AuthenticatedUserId,
    task_id: web::Path<String>,
    patch: web::Json<TaskPatch>,
) -> Result<impl Responder, AppError> {
    patch.validate()?;
    let task_id = parse_task_id(&task_id)?;

    let task = state.todos.update(user_id.0, task_id, patch.into_inner())?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes one of the authenticated user's tasks.
///
/// ## Responses:
/// - `200 OK`: acknowledgement message.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no such task in the caller's collection.
#[delete("/{id}")]
pub async fn delete_todo(
    state: web::Data<AppState>,
    user_id: AuthenticatedUserId,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let task_id = parse_task_id(&task_id)?;

    state.todos.delete(user_id.0, task_id)?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Todo deleted successfully"
    })))
}

/// Flips the completion state of one of the authenticated user's tasks.
///
/// ## Responses:
/// - `200 OK`: the toggled `Task`.
/// - `401 Unauthorized`: missing or invalid token.
/// - `404 Not Found`: no such task in the caller's collection.
#[patch("/{id}/toggle")]
pub async fn toggle_todo(
    state: web::Data<AppState>,
    user_id: AuthenticatedUserId,
    task_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let task_id = parse_task_id(&task_id)?;

    let task = state.todos.toggle(user_id.0, task_id)?;

    Ok(HttpResponse::Ok().json(task))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_task_id(&id.to_string()).unwrap(), id);

        match parse_task_id("todo_1755") {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Todo not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
