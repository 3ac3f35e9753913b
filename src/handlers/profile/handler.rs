//! Profile handler implementations

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    constants::MAX_SKILLS,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{request::UpdateProfileRequest, response::ProfileResponse};

/// Get the caller's full profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProfileResponse>> {
    let user = UserService::get_own_profile(state.db(), &auth_user.id).await?;
    Ok(Json(user.into()))
}

/// Update the caller's profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ProfileResponse>> {
    payload.validate()?;

    for skills in [&payload.skills_offered, &payload.skills_wanted]
        .into_iter()
        .flatten()
    {
        if skills.len() > MAX_SKILLS {
            return Err(AppError::Validation(format!(
                "At most {} skills allowed",
                MAX_SKILLS
            )));
        }
    }

    let user = UserService::update_profile(
        state.db(),
        &auth_user.id,
        payload.display_name.as_deref(),
        payload.bio.as_deref(),
        payload.avatar_url.as_deref(),
        payload.skills_offered.as_deref(),
        payload.skills_wanted.as_deref(),
    )
    .await?;

    Ok(Json(user.into()))
}
