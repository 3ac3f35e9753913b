//! Admin dashboard handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::DashboardService,
    state::AppState,
};

use super::{
    request::{AdminUsersQuery, BanUserRequest, SetRoleRequest},
    response::{AdminUserResponse, AdminUsersListResponse, StatsResponse},
};

/// Platform totals
pub async fn stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<StatsResponse>> {
    auth_user.require_admin()?;

    let stats = DashboardService::stats(state.db(), state.hub()).await?;
    Ok(Json(stats))
}

/// Full user list
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<AdminUsersQuery>,
) -> AppResult<Json<AdminUsersListResponse>> {
    auth_user.require_admin()?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    let (users, total) =
        DashboardService::list_users(state.db(), page, per_page, query.search.as_deref()).await?;

    Ok(Json(AdminUsersListResponse {
        users,
        total,
        page,
        per_page,
    }))
}

/// Ban a user
pub async fn ban_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<BanUserRequest>,
) -> AppResult<Json<AdminUserResponse>> {
    auth_user.require_admin()?;
    payload.validate()?;

    let user = DashboardService::ban_user(
        state.db(),
        &auth_user.id,
        &id,
        &payload.reason,
        payload.expires_at,
    )
    .await?;

    Ok(Json(user))
}

/// Lift a ban
pub async fn unban_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AdminUserResponse>> {
    auth_user.require_admin()?;

    let user = DashboardService::unban_user(state.db(), &id).await?;
    Ok(Json(user))
}

/// Change a user's role
pub async fn set_role(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetRoleRequest>,
) -> AppResult<Json<AdminUserResponse>> {
    auth_user.require_admin()?;

    let user = DashboardService::set_role(state.db(), &auth_user.id, &id, &payload.role).await?;
    Ok(Json(user))
}
