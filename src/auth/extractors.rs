use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::auth::jwt::{JwtKeys, TokenKind};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Authenticated caller, built once per request from a verified access token.
///
/// The admin flag is re-read from the database rather than trusted from the
/// token, so a demotion takes effect on the caller's next request instead of
/// their next login.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub is_admin: bool,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".into()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header".into()))?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|_| {
            warn!("invalid or expired token");
            ApiError::Unauthorized("Invalid or expired token".into())
        })?;

        if claims.kind != TokenKind::Access {
            return Err(ApiError::Unauthorized("Access token required".into()));
        }

        let is_admin = User::find_is_admin(&state.db, claims.sub)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("User no longer exists".into()))?;

        Ok(CurrentUser {
            id: claims.sub,
            is_admin,
        })
    }
}

/// `CurrentUser` plus the admin precondition. Handlers taking this extractor
/// never run for non-admin callers.
pub struct AdminUser(pub CurrentUser);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin {
            warn!(user_id = %user.id, "non-admin caller on admin route");
            return Err(ApiError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
