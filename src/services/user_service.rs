//! User directory and profile service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    handlers::users::response::{LeaderboardEntry, PublicUserResponse},
    models::User,
};

/// User service for directory and profile logic
pub struct UserService;

impl UserService {
    /// List users with pagination and search
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> AppResult<(Vec<PublicUserResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (users, total) = UserRepository::list(pool, offset, limit, search).await?;
        let users = users.into_iter().map(PublicUserResponse::from).collect();

        Ok((users, total))
    }

    /// Get a user's public profile
    pub async fn get_public_profile(pool: &PgPool, id: &Uuid) -> AppResult<PublicUserResponse> {
        let user = UserRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.into())
    }

    /// Top users by XP
    pub async fn leaderboard(pool: &PgPool, limit: u32) -> AppResult<Vec<LeaderboardEntry>> {
        let users = UserRepository::leaderboard(pool, limit as i64).await?;

        let entries = users
            .into_iter()
            .enumerate()
            .map(|(i, user)| LeaderboardEntry {
                rank: (i + 1) as u32,
                user_id: user.id,
                username: user.username,
                display_name: user.display_name,
                xp: user.xp,
            })
            .collect();

        Ok(entries)
    }

    /// Update the caller's profile fields
    pub async fn update_profile(
        pool: &PgPool,
        user_id: &Uuid,
        display_name: Option<&str>,
        bio: Option<&str>,
        avatar_url: Option<&str>,
        skills_offered: Option<&[String]>,
        skills_wanted: Option<&[String]>,
    ) -> AppResult<User> {
        UserRepository::update_profile(
            pool,
            user_id,
            display_name,
            bio,
            avatar_url,
            skills_offered,
            skills_wanted,
        )
        .await
    }

    /// Fetch own record
    pub async fn get_own_profile(pool: &PgPool, user_id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
