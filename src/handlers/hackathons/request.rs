//! Hackathon request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

/// Create hackathon request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHackathonRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    /// Participation mode: online, onsite, hybrid
    pub mode: String,

    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub location: Option<String>,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    #[validate(range(min = 0))]
    pub prize_pool: Option<i32>,

    #[validate(range(min = 1, max = 20))]
    pub min_team_size: Option<i32>,

    #[validate(range(min = 1, max = 20))]
    pub max_team_size: Option<i32>,
}

/// Update hackathon request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateHackathonRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub mode: Option<String>,

    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub location: Option<String>,

    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,

    #[validate(range(min = 0))]
    pub prize_pool: Option<i32>,

    #[validate(range(min = 1, max = 20))]
    pub min_team_size: Option<i32>,

    #[validate(range(min = 1, max = 20))]
    pub max_team_size: Option<i32>,
}

/// List hackathons query parameters
#[derive(Debug, Deserialize)]
pub struct ListHackathonsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub mode: Option<String>,
    pub search: Option<String>,
}
