//! Live room repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Room};

/// Repository for live room database operations
pub struct RoomRepository;

impl RoomRepository {
    /// Create a room; the host is inserted as the first participant
    pub async fn create(
        pool: &PgPool,
        name: &str,
        topic: Option<&str>,
        host_id: &Uuid,
        code: &str,
        capacity: i32,
    ) -> AppResult<Room> {
        let mut tx = pool.begin().await?;

        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (name, topic, host_id, code, capacity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(topic)
        .bind(host_id)
        .bind(code)
        .bind(capacity)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"INSERT INTO room_participants (room_id, user_id) VALUES ($1, $2)"#)
            .bind(room.id)
            .bind(host_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(room)
    }

    /// Find room by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Room>> {
        let room = sqlx::query_as::<_, Room>(r#"SELECT * FROM rooms WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(room)
    }

    /// Find an active room by join code
    pub async fn find_by_code(pool: &PgPool, code: &str) -> AppResult<Option<Room>> {
        let room = sqlx::query_as::<_, Room>(r#"SELECT * FROM rooms WHERE code = $1 AND is_active"#)
            .bind(code)
            .fetch_optional(pool)
            .await?;

        Ok(room)
    }

    /// Whether a join code is already taken by an active room
    pub async fn code_exists(pool: &PgPool, code: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM rooms WHERE code = $1 AND is_active)"#)
                .bind(code)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// List active rooms, newest first
    pub async fn list_active(pool: &PgPool, offset: i64, limit: i64) -> AppResult<(Vec<Room>, i64)> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"SELECT * FROM rooms WHERE is_active ORDER BY created_at DESC OFFSET $1 LIMIT $2"#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM rooms WHERE is_active"#)
            .fetch_one(pool)
            .await?;

        Ok((rooms, total))
    }

    /// Add a participant
    /// Add a participant, but only while the room has a free slot.
    ///
    /// The count and the insert run as one statement so concurrent
    /// joins cannot overfill the room. Returns whether the user got in.
    pub async fn add_participant(
        pool: &PgPool,
        room_id: &Uuid,
        user_id: &Uuid,
        capacity: i32,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO room_participants (room_id, user_id)
            SELECT $1, $2
            WHERE (SELECT COUNT(*) FROM room_participants WHERE room_id = $1) < $3
            "#,
        )
        .bind(room_id)
        .bind(user_id)
        .bind(capacity as i64)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Remove a participant; returns whether they were present
    pub async fn remove_participant(
        pool: &PgPool,
        room_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<bool> {
        let result =
            sqlx::query(r#"DELETE FROM room_participants WHERE room_id = $1 AND user_id = $2"#)
                .bind(room_id)
                .bind(user_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether a user is a participant
    pub async fn is_participant(pool: &PgPool, room_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM room_participants WHERE room_id = $1 AND user_id = $2)"#,
        )
        .bind(room_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// List participants
    pub async fn list_participants(
        pool: &PgPool,
        room_id: &Uuid,
    ) -> AppResult<Vec<(Uuid, String, chrono::DateTime<chrono::Utc>)>> {
        let rows = sqlx::query_as::<_, (Uuid, String, chrono::DateTime<chrono::Utc>)>(
            r#"
            SELECT u.id, u.username, p.joined_at
            FROM room_participants p
            JOIN users u ON u.id = p.user_id
            WHERE p.room_id = $1
            ORDER BY p.joined_at ASC
            "#,
        )
        .bind(room_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Mark a room ended and clear its participants
    pub async fn end_room(pool: &PgPool, room_id: &Uuid) -> AppResult<Room> {
        let mut tx = pool.begin().await?;

        let room = sqlx::query_as::<_, Room>(
            r#"UPDATE rooms SET is_active = FALSE, ended_at = NOW() WHERE id = $1 RETURNING *"#,
        )
        .bind(room_id)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"DELETE FROM room_participants WHERE room_id = $1"#)
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(room)
    }

    /// Active room count
    pub async fn active_count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM rooms WHERE is_active"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
