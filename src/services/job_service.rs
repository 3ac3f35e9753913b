//! Job board service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{job_statuses, roles},
    db::repositories::JobRepository,
    error::{AppError, AppResult},
    handlers::jobs::{
        request::{CreateJobRequest, UpdateJobRequest},
        response::{ApplicantResponse, JobResponse},
    },
};

/// Job board business logic
pub struct JobService;

impl JobService {
    /// Create a job listing
    pub async fn create_job(
        pool: &PgPool,
        poster_id: &Uuid,
        payload: CreateJobRequest,
    ) -> AppResult<JobResponse> {
        if let (Some(min), Some(max)) = (payload.salary_min, payload.salary_max) {
            if max < min {
                return Err(AppError::Validation(
                    "Salary range maximum must not be below minimum".to_string(),
                ));
            }
        }

        let job = JobRepository::create(
            pool,
            &payload.title,
            &payload.company,
            payload.location.as_deref(),
            &payload.job_type,
            &payload.description,
            &payload.skills.unwrap_or_default(),
            payload.salary_min,
            payload.salary_max,
            poster_id,
        )
        .await?;

        Ok(job.into())
    }

    /// Get a job listing
    pub async fn get_job(pool: &PgPool, id: &Uuid) -> AppResult<JobResponse> {
        let job = JobRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        Ok(job.into())
    }

    /// List job listings
    pub async fn list_jobs(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        status: Option<&str>,
        job_type: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<JobResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (jobs, total) =
            JobRepository::list(pool, offset, limit, status, job_type, search).await?;

        Ok((jobs.into_iter().map(JobResponse::from).collect(), total))
    }

    /// Update a listing; only the poster or an admin may
    pub async fn update_job(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateJobRequest,
    ) -> AppResult<JobResponse> {
        let job = JobRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        if job.posted_by != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' job listings".to_string(),
            ));
        }

        let updated = JobRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.company.as_deref(),
            payload.location.as_deref(),
            payload.job_type.as_deref(),
            payload.description.as_deref(),
            payload.skills.as_deref(),
            payload.salary_min,
            payload.salary_max,
            payload.status.as_deref(),
        )
        .await?;

        Ok(updated.into())
    }

    /// Delete a listing; only the poster or an admin may
    pub async fn delete_job(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let job = JobRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        if job.posted_by != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot delete other users' job listings".to_string(),
            ));
        }

        JobRepository::delete(pool, id).await
    }

    /// Apply to an open listing
    pub async fn apply(pool: &PgPool, job_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        let job = JobRepository::find_by_id(pool, job_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        if job.status != job_statuses::OPEN {
            return Err(AppError::Conflict(
                "Job is no longer accepting applications".to_string(),
            ));
        }

        if job.posted_by == *user_id {
            return Err(AppError::Validation("Cannot apply to your own listing".to_string()));
        }

        if JobRepository::has_applied(pool, job_id, user_id).await? {
            return Err(AppError::AlreadyExists("Already applied to this job".to_string()));
        }

        JobRepository::add_applicant(pool, job_id, user_id).await
    }

    /// Withdraw an application
    pub async fn withdraw(pool: &PgPool, job_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        if !JobRepository::remove_applicant(pool, job_id, user_id).await? {
            return Err(AppError::NotFound("No application to withdraw".to_string()));
        }
        Ok(())
    }

    /// List applicants; only the poster or an admin may view
    pub async fn list_applicants(
        pool: &PgPool,
        job_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<Vec<ApplicantResponse>> {
        let job = JobRepository::find_by_id(pool, job_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;

        if job.posted_by != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only the poster can view applicants".to_string(),
            ));
        }

        let applicants = JobRepository::list_applicants(pool, job_id)
            .await?
            .into_iter()
            .map(|(user_id, username, applied_at)| ApplicantResponse {
                user_id,
                username,
                applied_at,
            })
            .collect();

        Ok(applicants)
    }
}
