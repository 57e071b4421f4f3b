use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskInput, TaskPatch};
use crate::store::TaskStore;

/// Task CRUD scoped to the authenticated caller's partition.
///
/// The `user_id` arguments come from the auth middleware; the service trusts
/// them and never looks outside that user's partition. A task id belonging to
/// another user is therefore indistinguishable from an id that does not exist
/// at all: both are `NotFound`.
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Returns the user's tasks in creation order. Never an error; an
    /// unknown or empty partition is an empty list.
    pub fn list(&self, user_id: Uuid) -> Vec<Task> {
        self.tasks.list(user_id)
    }

    /// Creates a task owned by the caller. The title must not be blank after
    /// trimming.
    pub fn create(&self, user_id: Uuid, input: TaskInput) -> Result<Task, AppError> {
        if input.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".into()));
        }

        let task = Task::new(input, user_id);
        self.tasks.put(task.clone());
        Ok(task)
    }

    /// Applies a partial update. Fields absent from the patch are left
    /// untouched; `updated_at` is always refreshed, even for an empty patch.
    pub fn update(&self, user_id: Uuid, task_id: Uuid, patch: TaskPatch) -> Result<Task, AppError> {
        if let Some(title) = &patch.title {
            // The non-empty title invariant holds across updates too.
            if title.trim().is_empty() {
                return Err(AppError::BadRequest("Title is required".into()));
            }
        }

        self.tasks
            .modify(user_id, task_id, &mut |task| {
                if let Some(title) = &patch.title {
                    task.title = title.clone();
                }
                if let Some(description) = &patch.description {
                    task.description = description.clone();
                }
                if let Some(completed) = patch.completed {
                    task.completed = completed;
                }
                task.updated_at = Utc::now();
            })
            .ok_or_else(|| AppError::NotFound("Todo not found".into()))
    }

    /// Flips the completion flag and refreshes `updated_at`.
    pub fn toggle(&self, user_id: Uuid, task_id: Uuid) -> Result<Task, AppError> {
        self.tasks
            .modify(user_id, task_id, &mut |task| {
                task.completed = !task.completed;
                task.updated_at = Utc::now();
            })
            .ok_or_else(|| AppError::NotFound("Todo not found".into()))
    }

    /// Removes the task from the caller's partition.
    pub fn delete(&self, user_id: Uuid, task_id: Uuid) -> Result<(), AppError> {
        if !self.tasks.delete(user_id, task_id) {
            return Err(AppError::NotFound("Todo not found".into()));
        }
        Ok(())
    }
}
