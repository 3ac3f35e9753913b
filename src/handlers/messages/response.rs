//! Direct message response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{db::repositories::ConversationRow, models::Message};

/// A single message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub content: String,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            recipient_id: message.recipient_id,
            content: message.content,
            is_read: message.is_read,
            sent_at: message.sent_at,
        }
    }
}

/// Paginated history response
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// A derived conversation entry
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub partner_id: Uuid,
    pub partner_username: String,
    pub last_message: String,
    pub last_sender_id: Uuid,
    pub last_sent_at: DateTime<Utc>,
    pub unread_count: i64,
}

impl From<ConversationRow> for ConversationResponse {
    fn from(row: ConversationRow) -> Self {
        Self {
            partner_id: row.partner_id,
            partner_username: row.partner_username,
            last_message: row.last_message,
            last_sender_id: row.last_sender_id,
            last_sent_at: row.last_sent_at,
            unread_count: row.unread_count,
        }
    }
}

/// Conversation list response
#[derive(Debug, Serialize)]
pub struct ConversationsResponse {
    pub conversations: Vec<ConversationResponse>,
}

/// Mark-read result
#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    pub marked: u64,
}
