//! The `todolist_api` library crate.
//!
//! A stateless multi-user to-do list API: registration and login with
//! bcrypt-hashed credentials, JWT bearer-token sessions, and per-user task
//! CRUD with strict cross-user isolation. Storage lives behind the traits in
//! [`store`], so the in-memory backend can be swapped for a persistent one
//! without touching the services.
//!
//! The binary (`main.rs`) assembles [`services::AppState`] and the actix-web
//! application; everything else lives here so the integration tests can build
//! the same app in-process.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

pub use crate::error::AppError;
pub use crate::services::AppState;
