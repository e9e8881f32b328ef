use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record as stored by the external persistence layer.
/// The identifier is an opaque string token; no shape is enforced here.
/// This service only ever reads these rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
