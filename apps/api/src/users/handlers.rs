use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::users::activity::check_user_active;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCheckRequest {
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityCheckResponse {
    pub is_active: bool,
}

/// POST /api/v1/users/activity
/// Pure read: reports whether the given identifier belongs to an active account.
pub async fn handle_activity_check(
    State(state): State<AppState>,
    Json(req): Json<ActivityCheckRequest>,
) -> Result<Json<ActivityCheckResponse>, AppError> {
    let is_active = check_user_active(&state.db, &req.user_id).await?;
    Ok(Json(ActivityCheckResponse { is_active }))
}
