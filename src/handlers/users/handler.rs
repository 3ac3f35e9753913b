//! User directory handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::AppResult,
    services::UserService,
    state::AppState,
};

use super::{
    request::{LeaderboardQuery, ListUsersQuery},
    response::{LeaderboardResponse, OnlineUsersResponse, PublicUserResponse, UsersListResponse},
};

/// List users with search
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UsersListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    let (users, total) =
        UserService::list_users(state.db(), page, per_page, query.search.as_deref()).await?;

    Ok(Json(UsersListResponse {
        users,
        total,
        page,
        per_page,
    }))
}

/// Get a public profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PublicUserResponse>> {
    let user = UserService::get_public_profile(state.db(), &id).await?;
    Ok(Json(user))
}

/// XP leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> AppResult<Json<LeaderboardResponse>> {
    let limit = query.limit.unwrap_or(10).min(MAX_PAGE_SIZE);
    let entries = UserService::leaderboard(state.db(), limit).await?;
    Ok(Json(LeaderboardResponse { entries }))
}

/// Users currently connected to the realtime hub
pub async fn online_users(State(state): State<AppState>) -> Json<OnlineUsersResponse> {
    let user_ids = state.hub().online_users().await;
    let count = user_ids.len();
    Json(OnlineUsersResponse { user_ids, count })
}
