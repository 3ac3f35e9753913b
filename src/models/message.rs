//! Direct message model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Direct message database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub content: String,
    pub is_read: bool,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// The conversation partner from one participant's point of view
    pub fn partner_of(&self, user_id: Uuid) -> Uuid {
        if self.sender_id == user_id {
            self.recipient_id
        } else {
            self.sender_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_of_is_symmetric() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let message = Message {
            id: Uuid::new_v4(),
            sender_id: alice,
            recipient_id: bob,
            content: "hi".to_string(),
            is_read: false,
            sent_at: Utc::now(),
        };
        assert_eq!(message.partner_of(alice), bob);
        assert_eq!(message.partner_of(bob), alice);
    }
}
