//! Hackathon service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::HackathonRepository,
    error::{AppError, AppResult},
    handlers::hackathons::{
        request::{CreateHackathonRequest, UpdateHackathonRequest},
        response::{HackathonResponse, ParticipantResponse},
    },
};

/// Hackathon business logic
pub struct HackathonService;

impl HackathonService {
    /// Create a hackathon
    pub async fn create_hackathon(
        pool: &PgPool,
        organizer_id: &Uuid,
        payload: CreateHackathonRequest,
    ) -> AppResult<HackathonResponse> {
        if payload.end_time <= payload.start_time {
            return Err(AppError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        let min_team_size = payload.min_team_size.unwrap_or(1);
        let max_team_size = payload.max_team_size.unwrap_or(4);
        if max_team_size < min_team_size {
            return Err(AppError::Validation(
                "Maximum team size must not be below minimum".to_string(),
            ));
        }

        let hackathon = HackathonRepository::create(
            pool,
            &payload.title,
            &payload.description,
            &payload.mode,
            payload.location.as_deref(),
            payload.start_time,
            payload.end_time,
            payload.prize_pool,
            min_team_size,
            max_team_size,
            organizer_id,
        )
        .await?;

        Ok(hackathon.into())
    }

    /// Get a hackathon
    pub async fn get_hackathon(pool: &PgPool, id: &Uuid) -> AppResult<HackathonResponse> {
        let hackathon = HackathonRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        Ok(hackathon.into())
    }

    /// List hackathons
    pub async fn list_hackathons(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        mode: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<HackathonResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (hackathons, total) =
            HackathonRepository::list(pool, offset, limit, mode, search).await?;

        Ok((
            hackathons.into_iter().map(HackathonResponse::from).collect(),
            total,
        ))
    }

    /// Update a hackathon; only the organizer or an admin may
    pub async fn update_hackathon(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateHackathonRequest,
    ) -> AppResult<HackathonResponse> {
        let hackathon = HackathonRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        if hackathon.organizer_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' hackathons".to_string(),
            ));
        }

        let start = payload.start_time.unwrap_or(hackathon.start_time);
        let end = payload.end_time.unwrap_or(hackathon.end_time);
        if end <= start {
            return Err(AppError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        let min = payload.min_team_size.unwrap_or(hackathon.min_team_size);
        let max = payload.max_team_size.unwrap_or(hackathon.max_team_size);
        if max < min {
            return Err(AppError::Validation(
                "Maximum team size must not be below minimum".to_string(),
            ));
        }

        let updated = HackathonRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.mode.as_deref(),
            payload.location.as_deref(),
            payload.start_time,
            payload.end_time,
            payload.prize_pool,
            payload.min_team_size,
            payload.max_team_size,
        )
        .await?;

        Ok(updated.into())
    }

    /// Delete a hackathon; only the organizer or an admin may
    pub async fn delete_hackathon(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let hackathon = HackathonRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        if hackathon.organizer_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot delete other users' hackathons".to_string(),
            ));
        }

        HackathonRepository::delete(pool, id).await
    }

    /// Register for a hackathon; closed once it has started
    pub async fn register(pool: &PgPool, hackathon_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        let hackathon = HackathonRepository::find_by_id(pool, hackathon_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        if !hackathon.is_registration_open() {
            return Err(AppError::Conflict(
                "Registration closed; hackathon has already started".to_string(),
            ));
        }

        HackathonRepository::add_registration(pool, hackathon_id, user_id).await
    }

    /// Withdraw a registration
    pub async fn withdraw(pool: &PgPool, hackathon_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        if !HackathonRepository::remove_registration(pool, hackathon_id, user_id).await? {
            return Err(AppError::NotFound("No registration to withdraw".to_string()));
        }
        Ok(())
    }

    /// List registered participants (public)
    pub async fn list_participants(
        pool: &PgPool,
        hackathon_id: &Uuid,
    ) -> AppResult<Vec<ParticipantResponse>> {
        HackathonRepository::find_by_id(pool, hackathon_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hackathon not found".to_string()))?;

        let participants = HackathonRepository::list_participants(pool, hackathon_id)
            .await?
            .into_iter()
            .map(|(user_id, username, registered_at)| ParticipantResponse {
                user_id,
                username,
                registered_at,
            })
            .collect();

        Ok(participants)
    }
}
