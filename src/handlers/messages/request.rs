//! Direct message request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_MESSAGE_LENGTH;

/// Send message request (REST fallback to the socket path)
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = MAX_MESSAGE_LENGTH))]
    pub content: String,
}

/// History query parameters
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
