//! Hackathon handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::HackathonService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{CreateHackathonRequest, ListHackathonsQuery, UpdateHackathonRequest},
    response::{
        HackathonResponse, HackathonsListResponse, ParticipantsListResponse, RegistrationResponse,
    },
};

/// List hackathons with filters
pub async fn list_hackathons(
    State(state): State<AppState>,
    Query(query): Query<ListHackathonsQuery>,
) -> AppResult<Json<HackathonsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    if let Some(mode) = query.mode.as_deref() {
        validation::validate_hackathon_mode(mode)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let (hackathons, total) = HackathonService::list_hackathons(
        state.db(),
        page,
        per_page,
        query.mode.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(HackathonsListResponse {
        hackathons,
        total,
        page,
        per_page,
    }))
}

/// Create a hackathon
pub async fn create_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateHackathonRequest>,
) -> AppResult<(StatusCode, Json<HackathonResponse>)> {
    payload.validate()?;
    validation::validate_hackathon_mode(&payload.mode)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let hackathon = HackathonService::create_hackathon(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(hackathon)))
}

/// Get a single hackathon
pub async fn get_hackathon(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<HackathonResponse>> {
    let hackathon = HackathonService::get_hackathon(state.db(), &id).await?;
    Ok(Json(hackathon))
}

/// Update a hackathon
pub async fn update_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateHackathonRequest>,
) -> AppResult<Json<HackathonResponse>> {
    payload.validate()?;
    if let Some(mode) = payload.mode.as_deref() {
        validation::validate_hackathon_mode(mode)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let hackathon =
        HackathonService::update_hackathon(state.db(), &id, &auth_user.id, &auth_user.role, payload)
            .await?;

    Ok(Json(hackathon))
}

/// Delete a hackathon
pub async fn delete_hackathon(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    HackathonService::delete_hackathon(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register for a hackathon
pub async fn register(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<RegistrationResponse>)> {
    HackathonService::register(state.db(), &id, &auth_user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            message: "Registered".to_string(),
            hackathon_id: id,
        }),
    ))
}

/// Withdraw a registration
pub async fn withdraw(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    HackathonService::withdraw(state.db(), &id, &auth_user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List registered participants
pub async fn list_participants(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ParticipantsListResponse>> {
    let participants = HackathonService::list_participants(state.db(), &id).await?;
    let count = participants.len();

    Ok(Json(ParticipantsListResponse { participants, count }))
}
