//! Hackathon response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Hackathon, HackathonStatus};

/// Hackathon response with clock-derived status
#[derive(Debug, Serialize)]
pub struct HackathonResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub mode: String,
    pub location: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub prize_pool: Option<i32>,
    pub min_team_size: i32,
    pub max_team_size: i32,
    pub status: HackathonStatus,
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Hackathon> for HackathonResponse {
    fn from(hackathon: Hackathon) -> Self {
        let status = hackathon.status();
        Self {
            id: hackathon.id,
            title: hackathon.title,
            description: hackathon.description,
            mode: hackathon.mode,
            location: hackathon.location,
            start_time: hackathon.start_time,
            end_time: hackathon.end_time,
            prize_pool: hackathon.prize_pool,
            min_team_size: hackathon.min_team_size,
            max_team_size: hackathon.max_team_size,
            status,
            organizer_id: hackathon.organizer_id,
            created_at: hackathon.created_at,
            updated_at: hackathon.updated_at,
        }
    }
}

/// Paginated hackathon list response
#[derive(Debug, Serialize)]
pub struct HackathonsListResponse {
    pub hackathons: Vec<HackathonResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Registered participant entry
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub user_id: Uuid,
    pub username: String,
    pub registered_at: DateTime<Utc>,
}

/// Participant list response
#[derive(Debug, Serialize)]
pub struct ParticipantsListResponse {
    pub participants: Vec<ParticipantResponse>,
    pub count: usize,
}

/// Registration confirmation
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub message: String,
    pub hackathon_id: Uuid,
}
