//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Course database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub price_coins: i32,
    /// Ordered lesson list: `[{"title": ..., "content": ..., "video_url": ...}]`
    pub lessons: serde_json::Value,
    pub instructor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Whether enrolling costs coins
    pub fn is_free(&self) -> bool {
        self.price_coins == 0
    }
}
