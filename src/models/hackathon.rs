//! Hackathon model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Hackathon database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Hackathon {
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
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Clock-derived hackathon status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HackathonStatus {
    Upcoming,
    Ongoing,
    Ended,
}

impl HackathonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Ended => "ended",
        }
    }
}

impl Hackathon {
    /// Get current status of the hackathon
    pub fn status(&self) -> HackathonStatus {
        let now = Utc::now();
        if now < self.start_time {
            HackathonStatus::Upcoming
        } else if now < self.end_time {
            HackathonStatus::Ongoing
        } else {
            HackathonStatus::Ended
        }
    }

    /// Registration stays open until the hackathon starts
    pub fn is_registration_open(&self) -> bool {
        Utc::now() < self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hackathon(start_offset_hours: i64, end_offset_hours: i64) -> Hackathon {
        let now = Utc::now();
        Hackathon {
            id: Uuid::new_v4(),
            title: "Test Jam".to_string(),
            description: "desc".to_string(),
            mode: "online".to_string(),
            location: None,
            start_time: now + chrono::Duration::hours(start_offset_hours),
            end_time: now + chrono::Duration::hours(end_offset_hours),
            prize_pool: None,
            min_team_size: 1,
            max_team_size: 4,
            organizer_id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_derivation() {
        assert_eq!(hackathon(1, 2).status(), HackathonStatus::Upcoming);
        assert_eq!(hackathon(-1, 1).status(), HackathonStatus::Ongoing);
        assert_eq!(hackathon(-2, -1).status(), HackathonStatus::Ended);
    }

    #[test]
    fn test_registration_closes_at_start() {
        assert!(hackathon(1, 2).is_registration_open());
        assert!(!hackathon(-1, 1).is_registration_open());
    }
}
