use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::auth::dto::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest};
use crate::auth::extractors::CurrentUser;
use crate::auth::jwt::JwtKeys;
use crate::auth::password::verify_password;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, UserResponse};
use crate::users::repo::User;
use crate::users::services::{self, is_valid_email};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn token_pair(state: &AppState, user: &User) -> ApiResult<(String, String)> {
    let keys = JwtKeys::from_ref(state);
    let access = keys.sign_access(user.id, user.is_admin)?;
    let refresh = keys.sign_refresh(user.id, user.is_admin)?;
    Ok((access, refresh))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    // Self-registration never grants admin; the first-user bootstrap rule
    // inside create_user is the only exception.
    let user = services::create_user(
        &state.db,
        CreateUserRequest {
            email: payload.email,
            password: payload.password,
            is_admin: false,
        },
    )
    .await?;

    let (access_token, refresh_token) = token_pair(&state, &user)?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::Validation("Invalid email format".into()));
    }

    let user = User::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| {
            warn!(email = %payload.email, "login unknown email");
            ApiError::Unauthorized("Invalid credentials".into())
        })?;

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Invalid credentials".into()));
    }

    let (access_token, refresh_token) = token_pair(&state, &user)?;
    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

    // Reload the user so the new pair carries the current admin flag, not the
    // one captured at sign-in.
    let user = User::find_by_id(&state.db, claims.sub)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".into()))?;

    let (access_token, refresh_token) = token_pair(&state, &user)?;
    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    caller: CurrentUser,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, caller.id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".into()))?;
    Ok(Json(user.into()))
}
