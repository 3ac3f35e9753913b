//! Live room request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_TITLE_LENGTH;

/// Create room request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub topic: Option<String>,

    #[validate(range(min = 2))]
    pub capacity: Option<i32>,
}

/// List rooms query parameters
#[derive(Debug, Deserialize)]
pub struct ListRoomsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
