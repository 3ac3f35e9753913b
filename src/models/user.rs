//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub skills_offered: Vec<String>,
    pub skills_wanted: Vec<String>,
    pub role: String,
    pub coins: i32,
    pub xp: i32,
    pub is_banned: bool,
    pub ban_reason: Option<String>,
    pub ban_expires_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user is currently banned
    pub fn is_currently_banned(&self) -> bool {
        if !self.is_banned {
            return false;
        }

        // Check if ban has expired
        if let Some(expires_at) = self.ban_expires_at {
            if expires_at < Utc::now() {
                return false;
            }
        }

        true
    }

    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Check whether the user can cover a coin price
    pub fn can_afford(&self, price: i32) -> bool {
        self.coins >= price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: None,
            bio: None,
            avatar_url: None,
            skills_offered: vec!["rust".to_string()],
            skills_wanted: vec![],
            role: "member".to_string(),
            coins: 100,
            xp: 0,
            is_banned: false,
            ban_reason: None,
            ban_expires_at: None,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_expired_ban_is_not_active() {
        let mut user = test_user();
        user.is_banned = true;
        user.ban_expires_at = Some(Utc::now() - chrono::Duration::hours(1));
        assert!(!user.is_currently_banned());

        user.ban_expires_at = Some(Utc::now() + chrono::Duration::hours(1));
        assert!(user.is_currently_banned());

        // Permanent ban has no expiry
        user.ban_expires_at = None;
        assert!(user.is_currently_banned());
    }

    #[test]
    fn test_can_afford() {
        let user = test_user();
        assert!(user.can_afford(100));
        assert!(!user.can_afford(101));
    }
}
