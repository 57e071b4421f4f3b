//! Storage abstraction for user and task collections.
//!
//! The services only ever talk to these traits, so the in-memory backend in
//! [`memory`] can be replaced by a persistent one without touching auth or
//! task logic. Implementations must be safe under concurrent requests: the
//! email-uniqueness check in `UserStore::put` and the closure application in
//! `TaskStore::modify` have to be atomic with respect to other writers.

pub mod memory;

use uuid::Uuid;

use crate::models::{Task, User};

pub use memory::{MemoryTaskStore, MemoryUserStore};

/// The credential store: exclusively owns user records.
pub trait UserStore: Send + Sync {
    /// Inserts a user record. Returns `false` without inserting when another
    /// record already holds the same email (compared case-sensitively); the
    /// check and the insert happen atomically.
    fn put(&self, user: User) -> bool;

    /// Looks up a user by id.
    fn get(&self, id: Uuid) -> Option<User>;

    /// Looks up a user by exact email.
    fn get_by_email(&self, email: &str) -> Option<User>;
}

/// The task store: task records partitioned by owner id.
///
/// Every operation is scoped to one partition; there is no way to reach a
/// task through any id but its owner's.
pub trait TaskStore: Send + Sync {
    /// Ensures an empty partition exists for the given owner.
    fn init(&self, owner_id: Uuid);

    /// Returns the owner's tasks in creation order. An absent partition
    /// yields an empty list, never an error.
    fn list(&self, owner_id: Uuid) -> Vec<Task>;

    /// Appends a task to its owner's partition, creating the partition if
    /// absent.
    fn put(&self, task: Task);

    /// Applies `apply` to the task with the given id inside the owner's
    /// partition and returns the updated task, or `None` when the partition
    /// holds no such task. The closure runs under the store's write lock, so
    /// the read-modify-write is atomic.
    fn modify(
        &self,
        owner_id: Uuid,
        task_id: Uuid,
        apply: &mut dyn FnMut(&mut Task),
    ) -> Option<Task>;

    /// Removes the task with the given id from the owner's partition.
    /// Returns `false` when the partition holds no such task.
    fn delete(&self, owner_id: Uuid, task_id: Uuid) -> bool;
}
