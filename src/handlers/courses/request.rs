//! Course request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

/// Create course request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub category: String,

    /// Difficulty level: beginner, intermediate, advanced
    pub level: String,

    #[validate(range(min = 0))]
    pub price_coins: Option<i32>,

    /// Ordered lesson list
    pub lessons: Option<serde_json::Value>,
}

/// Update course request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCourseRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub category: Option<String>,

    pub level: Option<String>,

    #[validate(range(min = 0))]
    pub price_coins: Option<i32>,

    pub lessons: Option<serde_json::Value>,
}

/// List courses query parameters
#[derive(Debug, Deserialize)]
pub struct ListCoursesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub search: Option<String>,
}
