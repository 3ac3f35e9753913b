//! Direct message service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{MessageRepository, UserRepository},
    error::{AppError, AppResult},
    models::Message,
    realtime::{Hub, ServerEvent},
};

/// Direct message business logic
pub struct MessageService;

impl MessageService {
    /// Persist a message, then relay it over the hub if the recipient
    /// is connected. Used by both the REST endpoint and the socket path.
    pub async fn send(
        pool: &PgPool,
        hub: &Hub,
        sender_id: &Uuid,
        recipient_id: &Uuid,
        content: &str,
    ) -> AppResult<Message> {
        if sender_id == recipient_id {
            return Err(AppError::Validation(
                "Cannot message yourself".to_string(),
            ));
        }
        if content.trim().is_empty() {
            return Err(AppError::Validation("Message cannot be empty".to_string()));
        }

        UserRepository::find_by_id(pool, recipient_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Recipient not found".to_string()))?;

        let message = MessageRepository::create(pool, sender_id, recipient_id, content).await?;

        hub.send_to(
            *recipient_id,
            ServerEvent::Message {
                message: message.clone(),
            },
        )
        .await;

        Ok(message)
    }

    /// Paginated history with one partner; marks incoming messages read
    pub async fn history(
        pool: &PgPool,
        user_id: &Uuid,
        partner_id: &Uuid,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Message>, i64)> {
        UserRepository::find_by_id(pool, partner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (messages, total) =
            MessageRepository::history(pool, user_id, partner_id, offset, limit).await?;

        MessageRepository::mark_read(pool, user_id, partner_id).await?;

        Ok((messages, total))
    }

    /// Derived conversation list, most recent first
    pub async fn conversations(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<crate::db::repositories::ConversationRow>> {
        MessageRepository::conversations(pool, user_id).await
    }

    /// Mark every message from a partner as read
    pub async fn mark_read(pool: &PgPool, user_id: &Uuid, partner_id: &Uuid) -> AppResult<u64> {
        MessageRepository::mark_read(pool, user_id, partner_id).await
    }
}
