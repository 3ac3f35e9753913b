//! Live room response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Room;

/// Room response
#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub name: String,
    pub topic: Option<String>,
    pub host_id: Uuid,
    pub code: String,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            topic: room.topic,
            host_id: room.host_id,
            code: room.code,
            capacity: room.capacity,
            is_active: room.is_active,
            created_at: room.created_at,
            ended_at: room.ended_at,
        }
    }
}

/// Room with its participant roster
#[derive(Debug, Serialize)]
pub struct RoomDetailResponse {
    #[serde(flatten)]
    pub room: RoomResponse,
    pub participants: Vec<RoomParticipantResponse>,
}

/// Room participant entry
#[derive(Debug, Serialize)]
pub struct RoomParticipantResponse {
    pub user_id: Uuid,
    pub username: String,
    pub joined_at: DateTime<Utc>,
}

/// Paginated active room list
#[derive(Debug, Serialize)]
pub struct RoomsListResponse {
    pub rooms: Vec<RoomResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
