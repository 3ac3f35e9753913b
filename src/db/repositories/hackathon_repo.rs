//! Hackathon repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Hackathon};

/// Repository for hackathon database operations
pub struct HackathonRepository;

impl HackathonRepository {
    /// Create a new hackathon
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        mode: &str,
        location: Option<&str>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        prize_pool: Option<i32>,
        min_team_size: i32,
        max_team_size: i32,
        organizer_id: &Uuid,
    ) -> AppResult<Hackathon> {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            INSERT INTO hackathons (
                title, description, mode, location, start_time, end_time,
                prize_pool, min_team_size, max_team_size, organizer_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(mode)
        .bind(location)
        .bind(start_time)
        .bind(end_time)
        .bind(prize_pool)
        .bind(min_team_size)
        .bind(max_team_size)
        .bind(organizer_id)
        .fetch_one(pool)
        .await?;

        Ok(hackathon)
    }

    /// Find hackathon by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Hackathon>> {
        let hackathon = sqlx::query_as::<_, Hackathon>(r#"SELECT * FROM hackathons WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(hackathon)
    }

    /// List hackathons, newest start first
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        mode: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Hackathon>, i64)> {
        let pattern = search.map(|s| format!("%{}%", s));

        let hackathons = sqlx::query_as::<_, Hackathon>(
            r#"
            SELECT * FROM hackathons
            WHERE ($1::TEXT IS NULL OR mode = $1)
              AND ($2::TEXT IS NULL OR title ILIKE $2)
            ORDER BY start_time DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(mode)
        .bind(pattern.as_deref())
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM hackathons
            WHERE ($1::TEXT IS NULL OR mode = $1)
              AND ($2::TEXT IS NULL OR title ILIKE $2)
            "#,
        )
        .bind(mode)
        .bind(pattern.as_deref())
        .fetch_one(pool)
        .await?;

        Ok((hackathons, total))
    }

    /// Update a hackathon (COALESCE keeps unset fields)
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        mode: Option<&str>,
        location: Option<&str>,
        start_time: Option<DateTime<Utc>>,
        end_time: Option<DateTime<Utc>>,
        prize_pool: Option<i32>,
        min_team_size: Option<i32>,
        max_team_size: Option<i32>,
    ) -> AppResult<Hackathon> {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            UPDATE hackathons
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                mode = COALESCE($4, mode),
                location = COALESCE($5, location),
                start_time = COALESCE($6, start_time),
                end_time = COALESCE($7, end_time),
                prize_pool = COALESCE($8, prize_pool),
                min_team_size = COALESCE($9, min_team_size),
                max_team_size = COALESCE($10, max_team_size),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(mode)
        .bind(location)
        .bind(start_time)
        .bind(end_time)
        .bind(prize_pool)
        .bind(min_team_size)
        .bind(max_team_size)
        .fetch_one(pool)
        .await?;

        Ok(hackathon)
    }

    /// Delete a hackathon
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM hackathons WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Register a participant
    pub async fn add_registration(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(r#"INSERT INTO hackathon_registrations (hackathon_id, user_id) VALUES ($1, $2)"#)
            .bind(hackathon_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Withdraw a registration; returns whether one existed
    pub async fn remove_registration(
        pool: &PgPool,
        hackathon_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"DELETE FROM hackathon_registrations WHERE hackathon_id = $1 AND user_id = $2"#,
        )
        .bind(hackathon_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List registered participants
    pub async fn list_participants(
        pool: &PgPool,
        hackathon_id: &Uuid,
    ) -> AppResult<Vec<(Uuid, String, DateTime<Utc>)>> {
        let rows = sqlx::query_as::<_, (Uuid, String, DateTime<Utc>)>(
            r#"
            SELECT u.id, u.username, r.registered_at
            FROM hackathon_registrations r
            JOIN users u ON u.id = r.user_id
            WHERE r.hackathon_id = $1
            ORDER BY r.registered_at ASC
            "#,
        )
        .bind(hackathon_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Registration count for a hackathon
    pub async fn participant_count(pool: &PgPool, hackathon_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM hackathon_registrations WHERE hackathon_id = $1"#,
        )
        .bind(hackathon_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Total hackathon count
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM hackathons"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
