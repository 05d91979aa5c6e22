use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub is_admin: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

const USER_COLUMNS: &str = "id, name, email, password_hash, is_admin, created_at, updated_at";

impl User {
    /// List all users, oldest first.
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at ASC"
        ))
        .fetch_all(db)
        .await
    }

    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Fresh read of the admin flag, used to refresh token claims per request.
    pub async fn find_is_admin(db: &PgPool, id: Uuid) -> sqlx::Result<Option<bool>> {
        sqlx::query_scalar::<_, bool>("SELECT is_admin FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn count(db: &PgPool) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
    }

    /// Create a new user with hashed password.
    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        is_admin: bool,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password_hash, is_admin)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(email)
        .bind(password_hash)
        .bind(is_admin)
        .fetch_one(db)
        .await
    }

    /// Load a row holding its lock until the surrounding transaction ends.
    pub async fn find_by_id_for_update(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Lock every admin row and return how many there are. Serializes
    /// concurrent demotions/deletions against each other for the rest of
    /// the transaction.
    pub async fn count_admins_locked(conn: &mut PgConnection) -> sqlx::Result<i64> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE is_admin = TRUE FOR UPDATE",
        )
        .fetch_all(conn)
        .await?;
        Ok(ids.len() as i64)
    }

    pub async fn email_taken_by_other(
        conn: &mut PgConnection,
        email: &str,
        id: Uuid,
    ) -> sqlx::Result<bool> {
        let existing = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE email = $1 AND id <> $2",
        )
        .bind(email)
        .bind(id)
        .fetch_optional(conn)
        .await?;
        Ok(existing.is_some())
    }

    /// Apply a partial update. `None` fields are left unchanged; `updated_at`
    /// is always refreshed.
    pub async fn apply_patch(
        conn: &mut PgConnection,
        id: Uuid,
        name: Option<&str>,
        email: Option<&str>,
        is_admin: Option<bool>,
        password_hash: Option<&str>,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                is_admin = COALESCE($4, is_admin),
                password_hash = COALESCE($5, password_hash),
                updated_at = now()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(is_admin)
        .bind(password_hash)
        .fetch_one(conn)
        .await
    }

    pub async fn delete(conn: &mut PgConnection, id: Uuid) -> sqlx::Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_json_never_contains_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: Some("Ada".into()),
            email: "ada@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            is_admin: true,
            created_at: OffsetDateTime::now_utc(),
            updated_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
        assert!(json.contains("ada@example.com"));
    }
}
