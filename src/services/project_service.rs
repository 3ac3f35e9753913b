//! Collaborative project service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{ProjectRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::projects::{
        request::{CreateProjectRequest, UpdateProjectRequest},
        response::{CollaboratorResponse, ProjectDetailResponse, ProjectResponse},
    },
    models::Project,
};

/// Collaborative project business logic
pub struct ProjectService;

impl ProjectService {
    async fn can_write(pool: &PgPool, project: &Project, user_id: &Uuid, role: &str) -> AppResult<bool> {
        if project.owner_id == *user_id || role == roles::ADMIN {
            return Ok(true);
        }
        ProjectRepository::is_collaborator(pool, &project.id, user_id).await
    }

    async fn can_read(pool: &PgPool, project: &Project, user_id: &Uuid, role: &str) -> AppResult<bool> {
        if project.is_public {
            return Ok(true);
        }
        Self::can_write(pool, project, user_id, role).await
    }

    /// Create a project
    pub async fn create_project(
        pool: &PgPool,
        owner_id: &Uuid,
        payload: CreateProjectRequest,
    ) -> AppResult<ProjectResponse> {
        let project = ProjectRepository::create(
            pool,
            owner_id,
            &payload.name,
            payload.description.as_deref(),
            &payload.language,
            payload.is_public.unwrap_or(false),
        )
        .await?;

        Ok(project.into())
    }

    /// Get a project with its roster; private projects require membership
    pub async fn get_project(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<ProjectDetailResponse> {
        let project = ProjectRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if !Self::can_read(pool, &project, requester_id, requester_role).await? {
            return Err(AppError::Forbidden("Project is private".to_string()));
        }

        let collaborators = ProjectRepository::list_collaborators(pool, id)
            .await?
            .into_iter()
            .map(|(user_id, username)| CollaboratorResponse { user_id, username })
            .collect();

        Ok(ProjectDetailResponse {
            project: project.into(),
            collaborators,
        })
    }

    /// Projects the caller owns or collaborates on
    pub async fn list_projects(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<ProjectResponse>> {
        let projects = ProjectRepository::list_for_user(pool, user_id).await?;
        Ok(projects.into_iter().map(ProjectResponse::from).collect())
    }

    /// Update a project; owner and collaborators may write.
    /// `code` and `whiteboard` are persisted last-write-wins.
    pub async fn update_project(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateProjectRequest,
    ) -> AppResult<ProjectResponse> {
        let project = ProjectRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if !Self::can_write(pool, &project, requester_id, requester_role).await? {
            return Err(AppError::Forbidden(
                "Only the owner or collaborators can edit".to_string(),
            ));
        }

        // Visibility changes stay with the owner
        if payload.is_public.is_some()
            && project.owner_id != *requester_id
            && requester_role != roles::ADMIN
        {
            return Err(AppError::Forbidden(
                "Only the owner can change visibility".to_string(),
            ));
        }

        let updated = ProjectRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.description.as_deref(),
            payload.language.as_deref(),
            payload.code.as_deref(),
            payload.whiteboard.as_ref(),
            payload.is_public,
        )
        .await?;

        Ok(updated.into())
    }

    /// Delete a project; only the owner or an admin may
    pub async fn delete_project(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let project = ProjectRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if project.owner_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only the owner can delete the project".to_string(),
            ));
        }

        ProjectRepository::delete(pool, id).await
    }

    /// Add a collaborator; only the owner may
    pub async fn add_collaborator(
        pool: &PgPool,
        project_id: &Uuid,
        requester_id: &Uuid,
        collaborator_id: &Uuid,
    ) -> AppResult<()> {
        let project = ProjectRepository::find_by_id(pool, project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if project.owner_id != *requester_id {
            return Err(AppError::Forbidden(
                "Only the owner can manage collaborators".to_string(),
            ));
        }
        if project.owner_id == *collaborator_id {
            return Err(AppError::Validation(
                "The owner is already a member".to_string(),
            ));
        }

        UserRepository::find_by_id(pool, collaborator_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if ProjectRepository::is_collaborator(pool, project_id, collaborator_id).await? {
            return Err(AppError::AlreadyExists(
                "Already a collaborator".to_string(),
            ));
        }

        ProjectRepository::add_collaborator(pool, project_id, collaborator_id).await
    }

    /// Remove a collaborator; only the owner may
    pub async fn remove_collaborator(
        pool: &PgPool,
        project_id: &Uuid,
        requester_id: &Uuid,
        collaborator_id: &Uuid,
    ) -> AppResult<()> {
        let project = ProjectRepository::find_by_id(pool, project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        if project.owner_id != *requester_id {
            return Err(AppError::Forbidden(
                "Only the owner can manage collaborators".to_string(),
            ));
        }

        if !ProjectRepository::remove_collaborator(pool, project_id, collaborator_id).await? {
            return Err(AppError::NotFound("Not a collaborator".to_string()));
        }
        Ok(())
    }
}
