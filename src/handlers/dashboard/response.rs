//! Admin dashboard response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::User;

/// Platform-wide totals
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub users: i64,
    pub jobs: i64,
    pub courses: i64,
    pub hackathons: i64,
    pub quizzes: i64,
    pub posts: i64,
    pub messages: i64,
    pub projects: i64,
    pub active_rooms: i64,
    pub online_users: usize,
}

/// Full user row for admin views (email and ban state included)
#[derive(Debug, Serialize)]
pub struct AdminUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub role: String,
    pub coins: i32,
    pub xp: i32,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub ban_expires_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for AdminUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            role: user.role,
            coins: user.coins,
            xp: user.xp,
            is_banned: user.is_banned,
            ban_reason: user.ban_reason,
            ban_expires_at: user.ban_expires_at,
            last_login_at: user.last_login_at,
            created_at: user.created_at,
        }
    }
}

/// Paginated admin user list
#[derive(Debug, Serialize)]
pub struct AdminUsersListResponse {
    pub users: Vec<AdminUserResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}
