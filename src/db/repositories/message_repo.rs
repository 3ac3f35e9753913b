//! Direct message repository
//!
//! Conversations are not a stored entity; the conversation list is
//! derived from the messages table (distinct partners, last message,
//! unread count).

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Message};

/// One derived conversation entry
#[derive(Debug, sqlx::FromRow)]
pub struct ConversationRow {
    pub partner_id: Uuid,
    pub partner_username: String,
    pub last_message: String,
    pub last_sender_id: Uuid,
    pub last_sent_at: chrono::DateTime<chrono::Utc>,
    pub unread_count: i64,
}

/// Repository for direct message database operations
pub struct MessageRepository;

impl MessageRepository {
    /// Persist a message
    pub async fn create(
        pool: &PgPool,
        sender_id: &Uuid,
        recipient_id: &Uuid,
        content: &str,
    ) -> AppResult<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, recipient_id, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(recipient_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(message)
    }

    /// Paginated history between two users, newest first
    pub async fn history(
        pool: &PgPool,
        user_id: &Uuid,
        partner_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Message>, i64)> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE (sender_id = $1 AND recipient_id = $2)
               OR (sender_id = $2 AND recipient_id = $1)
            ORDER BY sent_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(partner_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM messages
            WHERE (sender_id = $1 AND recipient_id = $2)
               OR (sender_id = $2 AND recipient_id = $1)
            "#,
        )
        .bind(user_id)
        .bind(partner_id)
        .fetch_one(pool)
        .await?;

        Ok((messages, total))
    }

    /// Derive the conversation list for a user: one row per distinct
    /// partner with the latest message and unread count, ordered by the
    /// latest message time.
    pub async fn conversations(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<ConversationRow>> {
        let rows = sqlx::query_as::<_, ConversationRow>(
            r#"
            SELECT DISTINCT ON (partner_id)
                CASE WHEN m.sender_id = $1 THEN m.recipient_id ELSE m.sender_id END AS partner_id,
                u.username AS partner_username,
                m.content AS last_message,
                m.sender_id AS last_sender_id,
                m.sent_at AS last_sent_at,
                (
                    SELECT COUNT(*) FROM messages n
                    WHERE n.recipient_id = $1
                      AND n.sender_id = CASE WHEN m.sender_id = $1 THEN m.recipient_id ELSE m.sender_id END
                      AND NOT n.is_read
                ) AS unread_count
            FROM messages m
            JOIN users u
              ON u.id = CASE WHEN m.sender_id = $1 THEN m.recipient_id ELSE m.sender_id END
            WHERE m.sender_id = $1 OR m.recipient_id = $1
            ORDER BY partner_id, m.sent_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        // DISTINCT ON requires ordering by partner first; re-sort by recency
        let mut rows = rows;
        rows.sort_by(|a, b| b.last_sent_at.cmp(&a.last_sent_at));
        Ok(rows)
    }

    /// Mark every message from a partner as read; returns rows affected
    pub async fn mark_read(pool: &PgPool, user_id: &Uuid, partner_id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE messages SET is_read = TRUE
            WHERE recipient_id = $1 AND sender_id = $2 AND NOT is_read
            "#,
        )
        .bind(user_id)
        .bind(partner_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Unread message count across all conversations
    pub async fn unread_count(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND NOT is_read"#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Total message count
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM messages"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
