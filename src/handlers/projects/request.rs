//! Collaborative project request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub language: String,

    pub is_public: Option<bool>,
}

/// Update project request; `code` and `whiteboard` persist last-write-wins
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub name: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub language: Option<String>,

    pub code: Option<String>,
    pub whiteboard: Option<serde_json::Value>,
    pub is_public: Option<bool>,
}

/// Add collaborator request
#[derive(Debug, Deserialize)]
pub struct AddCollaboratorRequest {
    pub user_id: Uuid,
}
