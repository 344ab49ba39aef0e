//! Handlers for the caller's own profile.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use patrika_core::error::CoreError;
use patrika_db::models::profile::{Profile, UpdateProfile};
use patrika_db::repositories::{ProfileRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
///
/// The caller's profile, created on the fly when missing.
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Profile>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let profile =
        ProfileRepo::ensure_exists(&state.pool, user.id, user.default_display_name()).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profile
///
/// Update the caller's display name.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<Profile>>> {
    input.validate()?;

    // Heal a missing row first so the update always has a target.
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;
    ProfileRepo::ensure_exists(&state.pool, user.id, user.default_display_name()).await?;

    let profile = ProfileRepo::update_name(&state.pool, user.id, input.full_name.trim())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "profile",
            key: user.id.to_string(),
        }))?;

    Ok(Json(DataResponse { data: profile }))
}
