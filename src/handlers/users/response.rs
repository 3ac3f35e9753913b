//! User directory response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// Public profile view (no email or balance details)
#[derive(Debug, Serialize)]
pub struct PublicUserResponse {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub xp: i32,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            skills_offered: user.skills_offered,
            skills_wanted: user.skills_wanted,
            xp: user.xp,
            created_at: user.created_at,
        }
    }
}

/// Paginated user list response
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<PublicUserResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Leaderboard entry
#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub user_id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub xp: i32,
}

/// Leaderboard response
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

/// Online users response
#[derive(Debug, Serialize)]
pub struct OnlineUsersResponse {
    pub user_ids: Vec<Uuid>,
    pub count: usize,
}
