//! Community feed request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_COMMENT_LENGTH, MAX_POST_LENGTH};

/// Create post request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = MAX_POST_LENGTH))]
    pub content: String,

    #[validate(url)]
    pub image_url: Option<String>,

    #[validate(length(max = 10))]
    pub tags: Option<Vec<String>>,
}

/// Update post request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = MAX_POST_LENGTH))]
    pub content: Option<String>,

    #[validate(url)]
    pub image_url: Option<String>,

    #[validate(length(max = 10))]
    pub tags: Option<Vec<String>>,
}

/// Add comment request
#[derive(Debug, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(min = 1, max = MAX_COMMENT_LENGTH))]
    pub content: String,
}

/// Feed query parameters
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub author_id: Option<uuid::Uuid>,
}
