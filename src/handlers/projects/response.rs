//! Collaborative project response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Project;

/// Project response
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub language: String,
    pub code: String,
    pub whiteboard: serde_json::Value,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            owner_id: project.owner_id,
            name: project.name,
            description: project.description,
            language: project.language,
            code: project.code,
            whiteboard: project.whiteboard,
            is_public: project.is_public,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Project with its collaborator roster
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    #[serde(flatten)]
    pub project: ProjectResponse,
    pub collaborators: Vec<CollaboratorResponse>,
}

/// Collaborator entry
#[derive(Debug, Serialize)]
pub struct CollaboratorResponse {
    pub user_id: Uuid,
    pub username: String,
}

/// Project list response
#[derive(Debug, Serialize)]
pub struct ProjectsListResponse {
    pub projects: Vec<ProjectResponse>,
}
