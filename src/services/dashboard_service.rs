//! Admin dashboard service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{
        CourseRepository, HackathonRepository, JobRepository, MessageRepository, PostRepository,
        ProjectRepository, QuizRepository, RoomRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::dashboard::response::{AdminUserResponse, StatsResponse},
    realtime::Hub,
    utils::validation,
};

/// Admin dashboard business logic
pub struct DashboardService;

impl DashboardService {
    /// Platform-wide totals plus the live online count
    pub async fn stats(pool: &PgPool, hub: &Hub) -> AppResult<StatsResponse> {
        let users = UserRepository::count(pool).await?;
        let jobs = JobRepository::count(pool).await?;
        let courses = CourseRepository::count(pool).await?;
        let hackathons = HackathonRepository::count(pool).await?;
        let quizzes = QuizRepository::count(pool).await?;
        let posts = PostRepository::count(pool).await?;
        let messages = MessageRepository::count(pool).await?;
        let projects = ProjectRepository::count(pool).await?;
        let active_rooms = RoomRepository::active_count(pool).await?;
        let online_users = hub.online_count().await;

        Ok(StatsResponse {
            users,
            jobs,
            courses,
            hackathons,
            quizzes,
            posts,
            messages,
            projects,
            active_rooms,
            online_users,
        })
    }

    /// Full user list for admins
    pub async fn list_users(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> AppResult<(Vec<AdminUserResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (users, total) = UserRepository::list(pool, offset, limit, search).await?;

        Ok((
            users.into_iter().map(AdminUserResponse::from).collect(),
            total,
        ))
    }

    /// Ban a user; admins cannot ban themselves or other admins
    pub async fn ban_user(
        pool: &PgPool,
        admin_id: &Uuid,
        target_id: &Uuid,
        reason: &str,
        expires_at: Option<DateTime<Utc>>,
    ) -> AppResult<AdminUserResponse> {
        if admin_id == target_id {
            return Err(AppError::Validation("Cannot ban yourself".to_string()));
        }

        let target = UserRepository::find_by_id(pool, target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if target.is_admin() {
            return Err(AppError::Forbidden("Cannot ban an admin".to_string()));
        }
        if let Some(expires_at) = expires_at {
            if expires_at <= Utc::now() {
                return Err(AppError::Validation(
                    "Ban expiry must be in the future".to_string(),
                ));
            }
        }

        let user = UserRepository::set_ban(pool, target_id, true, Some(reason), expires_at).await?;
        Ok(user.into())
    }

    /// Lift a ban
    pub async fn unban_user(pool: &PgPool, target_id: &Uuid) -> AppResult<AdminUserResponse> {
        UserRepository::find_by_id(pool, target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let user = UserRepository::set_ban(pool, target_id, false, None, None).await?;
        Ok(user.into())
    }

    /// Change a user's role; admins cannot demote themselves
    pub async fn set_role(
        pool: &PgPool,
        admin_id: &Uuid,
        target_id: &Uuid,
        role: &str,
    ) -> AppResult<AdminUserResponse> {
        validation::validate_role(role).map_err(|e| AppError::Validation(e.to_string()))?;

        if admin_id == target_id {
            return Err(AppError::Validation(
                "Cannot change your own role".to_string(),
            ));
        }

        UserRepository::find_by_id(pool, target_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let user = UserRepository::set_role(pool, target_id, role).await?;
        Ok(user.into())
    }
}
