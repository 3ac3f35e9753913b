//! Job board handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::JobService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{CreateJobRequest, ListJobsQuery, UpdateJobRequest},
    response::{ApplicantsListResponse, ApplicationResponse, JobResponse, JobsListResponse},
};

/// List job listings with filters
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> AppResult<Json<JobsListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    if let Some(status) = query.status.as_deref() {
        validation::validate_job_status(status)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }
    if let Some(job_type) = query.job_type.as_deref() {
        validation::validate_job_type(job_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let (jobs, total) = JobService::list_jobs(
        state.db(),
        page,
        per_page,
        query.status.as_deref(),
        query.job_type.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(JobsListResponse {
        jobs,
        total,
        page,
        per_page,
    }))
}

/// Create a job listing
pub async fn create_job(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateJobRequest>,
) -> AppResult<(StatusCode, Json<JobResponse>)> {
    payload.validate()?;
    validation::validate_job_type(&payload.job_type)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let job = JobService::create_job(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// Get a single job listing
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<JobResponse>> {
    let job = JobService::get_job(state.db(), &id).await?;
    Ok(Json(job))
}

/// Update a job listing
pub async fn update_job(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateJobRequest>,
) -> AppResult<Json<JobResponse>> {
    payload.validate()?;
    if let Some(job_type) = payload.job_type.as_deref() {
        validation::validate_job_type(job_type)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }
    if let Some(status) = payload.status.as_deref() {
        validation::validate_job_status(status)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let job =
        JobService::update_job(state.db(), &id, &auth_user.id, &auth_user.role, payload).await?;

    Ok(Json(job))
}

/// Delete a job listing
pub async fn delete_job(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    JobService::delete_job(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Apply to a job
pub async fn apply(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<ApplicationResponse>)> {
    JobService::apply(state.db(), &id, &auth_user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse {
            message: "Application submitted".to_string(),
            job_id: id,
        }),
    ))
}

/// Withdraw an application
pub async fn withdraw(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    JobService::withdraw(state.db(), &id, &auth_user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List applicants for a listing
pub async fn list_applicants(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApplicantsListResponse>> {
    let applicants =
        JobService::list_applicants(state.db(), &id, &auth_user.id, &auth_user.role).await?;

    Ok(Json(ApplicantsListResponse { applicants }))
}
