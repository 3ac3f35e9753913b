//! Live room service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    config::RoomConfig,
    constants::roles,
    db::repositories::RoomRepository,
    error::{AppError, AppResult},
    handlers::rooms::response::{RoomDetailResponse, RoomParticipantResponse, RoomResponse},
    models::{room::generate_join_code, Room},
};

/// How many times to re-roll a colliding join code before giving up
const CODE_RETRIES: usize = 5;

/// Live room business logic
pub struct RoomService;

impl RoomService {
    /// Create a room; the host is its first participant
    pub async fn create_room(
        pool: &PgPool,
        config: &RoomConfig,
        host_id: &Uuid,
        name: &str,
        topic: Option<&str>,
        capacity: Option<i32>,
    ) -> AppResult<RoomResponse> {
        let capacity = capacity.unwrap_or(config.default_capacity);
        if capacity > config.max_capacity {
            return Err(AppError::Validation(format!(
                "Capacity cannot exceed {}",
                config.max_capacity
            )));
        }

        let mut code = generate_join_code();
        let mut retries = 0;
        while RoomRepository::code_exists(pool, &code).await? {
            retries += 1;
            if retries > CODE_RETRIES {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "Could not generate a unique join code"
                )));
            }
            code = generate_join_code();
        }

        let room = RoomRepository::create(pool, name, topic, host_id, &code, capacity).await?;
        Ok(room.into())
    }

    async fn active_room(pool: &PgPool, id: &Uuid) -> AppResult<Room> {
        let room = RoomRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;
        if !room.is_active {
            return Err(AppError::Conflict("Room has ended".to_string()));
        }
        Ok(room)
    }

    /// Get a room with its roster
    pub async fn get_room(pool: &PgPool, id: &Uuid) -> AppResult<RoomDetailResponse> {
        let room = RoomRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let participants = Self::roster(pool, id).await?;
        Ok(RoomDetailResponse {
            room: room.into(),
            participants,
        })
    }

    /// Look up an active room by join code
    pub async fn get_room_by_code(pool: &PgPool, code: &str) -> AppResult<RoomDetailResponse> {
        let room = RoomRepository::find_by_code(pool, &code.to_uppercase())
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        let participants = Self::roster(pool, &room.id).await?;
        Ok(RoomDetailResponse {
            room: room.into(),
            participants,
        })
    }

    async fn roster(pool: &PgPool, room_id: &Uuid) -> AppResult<Vec<RoomParticipantResponse>> {
        Ok(RoomRepository::list_participants(pool, room_id)
            .await?
            .into_iter()
            .map(|(user_id, username, joined_at)| RoomParticipantResponse {
                user_id,
                username,
                joined_at,
            })
            .collect())
    }

    /// List active rooms
    pub async fn list_rooms(
        pool: &PgPool,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<RoomResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (rooms, total) = RoomRepository::list_active(pool, offset, limit).await?;
        Ok((rooms.into_iter().map(RoomResponse::from).collect(), total))
    }

    /// Join an active room, capacity permitting
    pub async fn join(pool: &PgPool, room_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        let room = Self::active_room(pool, room_id).await?;

        if RoomRepository::is_participant(pool, room_id, user_id).await? {
            return Err(AppError::AlreadyExists("Already in this room".to_string()));
        }

        let joined =
            RoomRepository::add_participant(pool, room_id, user_id, room.capacity).await?;
        if !joined {
            return Err(AppError::Conflict("Room is full".to_string()));
        }

        Ok(())
    }

    /// Leave a room; the host leaving ends it
    pub async fn leave(pool: &PgPool, room_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        let room = Self::active_room(pool, room_id).await?;

        if room.host_id == *user_id {
            RoomRepository::end_room(pool, room_id).await?;
            return Ok(());
        }

        if !RoomRepository::remove_participant(pool, room_id, user_id).await? {
            return Err(AppError::NotFound("Not in this room".to_string()));
        }
        Ok(())
    }

    /// End a room; only the host or an admin may
    pub async fn end_room(
        pool: &PgPool,
        room_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<RoomResponse> {
        let room = Self::active_room(pool, room_id).await?;

        if room.host_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only the host can end the room".to_string(),
            ));
        }

        let ended = RoomRepository::end_room(pool, room_id).await?;
        Ok(ended.into())
    }
}
