//! Admin floor guard: no mutation may leave the system without an admin.

use sqlx::PgConnection;

use crate::error::{ApiError, ApiResult};
use crate::users::repo::User;

/// The two mutations that can lower the admin count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminMutation {
    Demote,
    Delete,
}

/// Pure decision: would removing admin rights from (or deleting) the target
/// drop the admin count to zero?
pub fn admin_floor_violated(target_is_admin: bool, admin_count: i64) -> bool {
    target_is_admin && admin_count <= 1
}

/// Run the guard inside the caller's transaction.
///
/// Locks all admin rows before counting, so two concurrent guarded mutations
/// cannot both observe a count of two and jointly drop it to zero.
pub async fn check_admin_floor(
    conn: &mut PgConnection,
    target: &User,
    kind: AdminMutation,
) -> ApiResult<()> {
    if !target.is_admin {
        return Ok(());
    }
    let admin_count = User::count_admins_locked(conn).await?;
    if admin_floor_violated(target.is_admin, admin_count) {
        let message = match kind {
            AdminMutation::Demote => "Cannot remove admin status from the only admin user.",
            AdminMutation::Delete => "Cannot delete the only admin user.",
        };
        return Err(ApiError::InvariantViolation(message.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_admin_target_never_violates() {
        assert!(!admin_floor_violated(false, 0));
        assert!(!admin_floor_violated(false, 1));
        assert!(!admin_floor_violated(false, 5));
    }

    #[test]
    fn sole_admin_violates() {
        assert!(admin_floor_violated(true, 1));
        // A count of zero should be impossible for an admin target, but the
        // guard still refuses rather than underflowing the floor.
        assert!(admin_floor_violated(true, 0));
    }

    #[test]
    fn second_admin_allows_mutation() {
        assert!(!admin_floor_violated(true, 2));
        assert!(!admin_floor_violated(true, 100));
    }
}
