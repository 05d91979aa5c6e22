use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo::User;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Partial update for `PUT /users/:id`. Absent fields leave the record
/// unchanged; presence is carried by the `Option`s, not by comparing values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.is_admin.is_none()
            && self.password.is_none()
    }
}

/// Public part of the user returned to clients. Never carries the hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub is_admin: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            is_admin: u.is_admin,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_body_is_detected() {
        let patch: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn explicit_false_is_present_not_absent() {
        let patch: UpdateUserRequest = serde_json::from_str(r#"{"isAdmin": false}"#).unwrap();
        assert!(!patch.is_empty());
        assert_eq!(patch.is_admin, Some(false));
    }

    #[test]
    fn unknown_fields_alone_still_count_as_empty() {
        let patch: UpdateUserRequest = serde_json::from_str(r#"{"favourite": "tea"}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn is_admin_must_be_boolean() {
        let err = serde_json::from_str::<UpdateUserRequest>(r#"{"isAdmin": "yes"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn response_uses_camel_case_and_omits_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: None,
            email: "grace@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            is_admin: false,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("isAdmin"));
        assert!(json.contains("createdAt"));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }
}
