use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::auth::extractors::AdminUser;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
use crate::users::services;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
}

#[instrument(skip(state))]
async fn list_users(
    State(state): State<AppState>,
    AdminUser(_caller): AdminUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = services::list_users(&state.db).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state, payload))]
async fn create_user(
    State(state): State<AppState>,
    AdminUser(_caller): AdminUser,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = services::create_user(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state, payload))]
async fn update_user(
    State(state): State<AppState>,
    AdminUser(caller): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = services::update_user(&state.db, &caller, id, payload).await?;
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
async fn delete_user(
    State(state): State<AppState>,
    AdminUser(caller): AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<MessageResponse>> {
    services::delete_user(&state.db, &caller, id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully".into(),
    }))
}
