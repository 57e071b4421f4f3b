//! In-memory store backends.
//!
//! State is `RwLock`-guarded maps, so the stores are safe to share across
//! actix worker threads. Each task partition keeps an id-keyed map for O(1)
//! lookup plus an insertion-order vector so `list` returns creation order.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{Task, User};
use crate::store::{TaskStore, UserStore};

/// Process-lifetime credential store.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryUserStore {
    fn put(&self, user: User) -> bool {
        let mut users = self.users.write().expect("user store lock poisoned");
        // Uniqueness check and insert under the same write lock.
        if users.values().any(|u| u.email == user.email) {
            return false;
        }
        users.insert(user.id, user);
        true
    }

    fn get(&self, id: Uuid) -> Option<User> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(&id)
            .cloned()
    }

    fn get_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .values()
            .find(|u| u.email == email)
            .cloned()
    }
}

/// One user's tasks: id-keyed for lookup, ordered for listing.
#[derive(Default)]
struct Partition {
    order: Vec<Uuid>,
    tasks: HashMap<Uuid, Task>,
}

impl Partition {
    fn push(&mut self, task: Task) {
        self.order.push(task.id);
        self.tasks.insert(task.id, task);
    }

    fn remove(&mut self, task_id: Uuid) -> bool {
        if self.tasks.remove(&task_id).is_none() {
            return false;
        }
        self.order.retain(|id| *id != task_id);
        true
    }

    fn list(&self) -> Vec<Task> {
        self.order
            .iter()
            .filter_map(|id| self.tasks.get(id))
            .cloned()
            .collect()
    }
}

/// Process-lifetime task store, partitioned by owner id.
#[derive(Default)]
pub struct MemoryTaskStore {
    partitions: RwLock<HashMap<Uuid, Partition>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskStore for MemoryTaskStore {
    fn init(&self, owner_id: Uuid) {
        self.partitions
            .write()
            .expect("task store lock poisoned")
            .entry(owner_id)
            .or_default();
    }

    fn list(&self, owner_id: Uuid) -> Vec<Task> {
        self.partitions
            .read()
            .expect("task store lock poisoned")
            .get(&owner_id)
            .map(Partition::list)
            .unwrap_or_default()
    }

    fn put(&self, task: Task) {
        self.partitions
            .write()
            .expect("task store lock poisoned")
            .entry(task.user_id)
            .or_default()
            .push(task);
    }

    fn modify(
        &self,
        owner_id: Uuid,
        task_id: Uuid,
        apply: &mut dyn FnMut(&mut Task),
    ) -> Option<Task> {
        let mut partitions = self.partitions.write().expect("task store lock poisoned");
        let task = partitions.get_mut(&owner_id)?.tasks.get_mut(&task_id)?;
        apply(task);
        Some(task.clone())
    }

    fn delete(&self, owner_id: Uuid, task_id: Uuid) -> bool {
        let mut partitions = self.partitions.write().expect("task store lock poisoned");
        match partitions.get_mut(&owner_id) {
            Some(partition) => partition.remove(task_id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskInput;

    fn task(owner: Uuid, title: &str) -> Task {
        Task::new(
            TaskInput {
                title: title.to_string(),
                description: None,
            },
            owner,
        )
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = MemoryUserStore::new();
        let first = User::new("dup@example.com".into(), "first".into(), "h1".into());
        let second = User::new("dup@example.com".into(), "second".into(), "h2".into());

        assert!(store.put(first.clone()));
        assert!(!store.put(second));
        // The original record is untouched.
        assert_eq!(store.get_by_email("dup@example.com").unwrap().name, "first");
        assert_eq!(store.get(first.id).unwrap().email, "dup@example.com");
    }

    #[test]
    fn test_email_lookup_is_case_sensitive() {
        let store = MemoryUserStore::new();
        store.put(User::new("Case@example.com".into(), "c".into(), "h".into()));

        assert!(store.get_by_email("Case@example.com").is_some());
        assert!(store.get_by_email("case@example.com").is_none());
        // A differently-cased email is a different account.
        assert!(store.put(User::new("case@example.com".into(), "c2".into(), "h".into())));
    }

    #[test]
    fn test_list_preserves_creation_order() {
        let store = MemoryTaskStore::new();
        let owner = Uuid::new_v4();
        for i in 0..5 {
            store.put(task(owner, &format!("task {}", i)));
        }

        let titles: Vec<String> = store.list(owner).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["task 0", "task 1", "task 2", "task 3", "task 4"]);

        // Deleting from the middle keeps the rest in order.
        let tasks = store.list(owner);
        assert!(store.delete(owner, tasks[2].id));
        let titles: Vec<String> = store.list(owner).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["task 0", "task 1", "task 3", "task 4"]);
    }

    #[test]
    fn test_absent_partition_lists_empty() {
        let store = MemoryTaskStore::new();
        assert!(store.list(Uuid::new_v4()).is_empty());

        let owner = Uuid::new_v4();
        store.init(owner);
        assert!(store.list(owner).is_empty());
    }

    #[test]
    fn test_modify_is_scoped_to_owner() {
        let store = MemoryTaskStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let t = task(alice, "alice's task");
        let task_id = t.id;
        store.put(t);
        store.init(bob);

        // Bob cannot reach Alice's task through his partition.
        assert!(store
            .modify(bob, task_id, &mut |task| task.completed = true)
            .is_none());
        assert!(!store.delete(bob, task_id));

        let updated = store
            .modify(alice, task_id, &mut |task| task.completed = true)
            .unwrap();
        assert!(updated.completed);
    }

    #[test]
    fn test_delete_unknown_task_is_false() {
        let store = MemoryTaskStore::new();
        let owner = Uuid::new_v4();
        store.put(task(owner, "only"));
        assert!(!store.delete(owner, Uuid::new_v4()));
        assert_eq!(store.list(owner).len(), 1);
    }
}
