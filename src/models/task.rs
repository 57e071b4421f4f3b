use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Input structure for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task. Must not be blank; the non-empty check happens
    /// in the task service after trimming, so a whitespace-only title is
    /// rejected the same way as a missing one.
    #[validate(length(max = 200))]
    pub title: String,

    /// An optional description for the task. Defaults to the empty string.
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// A partial update to a task.
///
/// Only fields present in the request body are applied; an absent field
/// leaves the stored value untouched. JSON `null` and an omitted field are
/// not distinguished.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct TaskPatch {
    #[validate(length(max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub completed: Option<bool>,
}

/// A task entity as stored and as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// Free-form description, empty string when none was given.
    pub description: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last mutation. Refreshed by update and toggle, never
    /// by reads.
    pub updated_at: DateTime<Utc>,
    /// Identifier of the user who owns the task.
    pub user_id: Uuid,
}

impl Task {
    /// Creates a new `Task` from `TaskInput` for the given owner.
    /// Sets `created_at` and `updated_at` to the current time, `completed` to
    /// `false`, and `id` to a new UUID.
    pub fn new(input: TaskInput, user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            completed: false,
            created_at: now,
            updated_at: now,
            user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let input = TaskInput {
            title: "Test Task".to_string(),
            description: Some("Test Description".to_string()),
        };

        let owner = Uuid::new_v4();
        let task = Task::new(input, owner);
        assert_eq!(task.title, "Test Task");
        assert_eq!(task.description, "Test Description");
        assert_eq!(task.user_id, owner);
        assert!(!task.completed);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let input = TaskInput {
            title: "No description".to_string(),
            description: None,
        };
        let task = Task::new(input, Uuid::new_v4());
        assert_eq!(task.description, "");
    }

    #[test]
    fn test_task_input_length_validation() {
        let valid_input = TaskInput {
            title: "Valid Task".to_string(),
            description: Some("Valid Description".to_string()),
        };
        assert!(valid_input.validate().is_ok());

        let long_title = TaskInput {
            title: "a".repeat(201),
            description: None,
        };
        assert!(long_title.validate().is_err());

        let long_description = TaskInput {
            title: "Valid".to_string(),
            description: Some("b".repeat(1001)),
        };
        assert!(long_description.validate().is_err());
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let task = Task::new(
            TaskInput {
                title: "wire".to_string(),
                description: None,
            },
            Uuid::new_v4(),
        );
        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("userId").is_some());
        assert!(json.get("created_at").is_none());
    }
}
