//! Live room handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::RoomService,
    state::AppState,
};

use super::{
    request::{CreateRoomRequest, ListRoomsQuery},
    response::{RoomDetailResponse, RoomResponse, RoomsListResponse},
};

/// List active rooms
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(query): Query<ListRoomsQuery>,
) -> AppResult<Json<RoomsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    let (rooms, total) = RoomService::list_rooms(state.db(), page, per_page).await?;

    Ok(Json(RoomsListResponse {
        rooms,
        total,
        page,
        per_page,
    }))
}

/// Create a room
pub async fn create_room(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<RoomResponse>)> {
    payload.validate()?;

    let room = RoomService::create_room(
        state.db(),
        &state.config().rooms,
        &auth_user.id,
        &payload.name,
        payload.topic.as_deref(),
        payload.capacity,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// Get a room with its roster
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RoomDetailResponse>> {
    let room = RoomService::get_room(state.db(), &id).await?;
    Ok(Json(room))
}

/// Look up an active room by join code
pub async fn get_room_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<RoomDetailResponse>> {
    let room = RoomService::get_room_by_code(state.db(), &code).await?;
    Ok(Json(room))
}

/// Join a room
pub async fn join_room(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    RoomService::join(state.db(), &id, &auth_user.id).await?;
    Ok(StatusCode::OK)
}

/// Leave a room; the host leaving ends it
pub async fn leave_room(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    RoomService::leave(state.db(), &id, &auth_user.id).await?;
    Ok(StatusCode::OK)
}

/// End a room
pub async fn end_room(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RoomResponse>> {
    let room = RoomService::end_room(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(Json(room))
}
