use std::sync::Arc;

use uuid::Uuid;

use crate::auth::{generate_token, hash_password, verify_password};
use crate::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::AppError;
use crate::models::{User, UserProfile};
use crate::store::{TaskStore, UserStore};

/// Registers and authenticates users and resolves profiles.
///
/// Login failures are reported with one generic message whether the email is
/// unknown or the password is wrong, so the endpoint cannot be used to
/// enumerate accounts.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tasks: Arc<dyn TaskStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tasks: Arc<dyn TaskStore>) -> Self {
        Self { users, tasks }
    }

    /// Creates an account, initializes its empty task partition, and issues a
    /// token. Fails with `Conflict` when the email is already registered
    /// (exact, case-sensitive match).
    pub fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        // Cheap pre-check before paying for the hash; the store's atomic
        // put is the backstop against a concurrent duplicate.
        if self.users.get_by_email(&request.email).is_some() {
            return Err(AppError::Conflict("User already exists".into()));
        }

        let name = match request.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => request
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
        };

        let password_hash = hash_password(&request.password)?;
        let user = User::new(request.email, name, password_hash);

        if !self.users.put(user.clone()) {
            return Err(AppError::Conflict("User already exists".into()));
        }
        self.tasks.init(user.id);

        let token = generate_token(user.id)?;
        log::info!("Registered user {}", user.id);

        Ok(AuthResponse {
            user: UserProfile::from(user),
            token,
        })
    }

    /// Authenticates by email and password and issues a fresh token.
    pub fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let user = self
            .users
            .get_by_email(&request.email)
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".into()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".into()));
        }

        let token = generate_token(user.id)?;

        Ok(AuthResponse {
            user: UserProfile::from(user),
            token,
        })
    }

    /// Resolves a verified user id to its public profile. Only reachable with
    /// an id the token layer produced; the `NotFound` arm is defensive.
    pub fn profile(&self, user_id: Uuid) -> Result<UserProfile, AppError> {
        self.users
            .get(user_id)
            .map(UserProfile::from)
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }
}
