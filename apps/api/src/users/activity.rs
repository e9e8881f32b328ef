use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

/// Looks up a user by identifier and reports its activity flag.
/// "No such user" and "user exists but inactive" both come back as `false`;
/// the caller cannot tell them apart.
pub async fn check_user_active(pool: &PgPool, user_id: &str) -> Result<bool, AppError> {
    let user: Option<User> =
        sqlx::query_as("SELECT id, is_active, created_at FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

    Ok(resolve_activity(user.as_ref()))
}

/// Collapses a lookup result into the single boolean the endpoint reports.
fn resolve_activity(user: Option<&User>) -> bool {
    user.map(|u| u.is_active).unwrap_or(false)
}
