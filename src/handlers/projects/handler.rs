//! Collaborative project handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ProjectService,
    state::AppState,
};

use super::{
    request::{AddCollaboratorRequest, CreateProjectRequest, UpdateProjectRequest},
    response::{ProjectDetailResponse, ProjectResponse, ProjectsListResponse},
};

/// Projects the caller owns or collaborates on
pub async fn list_projects(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProjectsListResponse>> {
    let projects = ProjectService::list_projects(state.db(), &auth_user.id).await?;
    Ok(Json(ProjectsListResponse { projects }))
}

/// Create a project
pub async fn create_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    payload.validate()?;

    let project = ProjectService::create_project(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// Get a project with its collaborators
pub async fn get_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ProjectDetailResponse>> {
    let project =
        ProjectService::get_project(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(Json(project))
}

/// Update a project (code/whiteboard writes are last-write-wins)
pub async fn update_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    payload.validate()?;

    let project =
        ProjectService::update_project(state.db(), &id, &auth_user.id, &auth_user.role, payload)
            .await?;

    Ok(Json(project))
}

/// Delete a project
pub async fn delete_project(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    ProjectService::delete_project(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a collaborator
pub async fn add_collaborator(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddCollaboratorRequest>,
) -> AppResult<StatusCode> {
    ProjectService::add_collaborator(state.db(), &id, &auth_user.id, &payload.user_id).await?;
    Ok(StatusCode::CREATED)
}

/// Remove a collaborator
pub async fn remove_collaborator(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, user_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    ProjectService::remove_collaborator(state.db(), &id, &auth_user.id, &user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
