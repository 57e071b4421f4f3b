use crate::{
    auth::{AuthenticatedUserId, LoginRequest, RegisterRequest},
    error::AppError,
    services::AppState,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns the profile together with an
/// authentication token. The email must not already be registered.
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let response = state.auth.register(register_data.into_inner())?;

    Ok(HttpResponse::Created().json(response))
}

/// Login user
///
/// Authenticates a user and returns the profile together with a fresh token.
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let response = state.auth.login(login_data.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

/// Get the authenticated user's profile.
#[get("/profile")]
pub async fn profile(
    state: web::Data<AppState>,
    user_id: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let profile = state.auth.profile(user_id.0)?;

    Ok(HttpResponse::Ok().json(profile))
}

/// Logout acknowledgement.
///
/// Tokens are stateless, so there is nothing to invalidate server-side; the
/// client discards its copy. The endpoint still sits behind the auth gate so
/// a logout with a bad token reports 401.
#[post("/logout")]
pub async fn logout(_user_id: AuthenticatedUserId) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(json!({
        "message": "Logged out successfully"
    })))
}
