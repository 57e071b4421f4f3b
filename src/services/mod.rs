//! Business logic, decoupled from HTTP.
//!
//! The route handlers are thin adapters over [`AuthService`] and
//! [`TaskService`]; both operate only on the store traits, so every
//! behavioral guarantee is unit-testable without a server.

pub mod auth;
pub mod todos;

use std::sync::Arc;

use crate::store::{MemoryTaskStore, MemoryUserStore, TaskStore, UserStore};

pub use auth::AuthService;
pub use todos::TaskService;

/// Shared application state: the two services over one pair of stores.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub todos: TaskService,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, tasks: Arc<dyn TaskStore>) -> Self {
        Self {
            auth: AuthService::new(users, Arc::clone(&tasks)),
            todos: TaskService::new(tasks),
        }
    }

    /// State backed by process-lifetime in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryTaskStore::new()),
        )
    }
}
