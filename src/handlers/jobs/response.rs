//! Job board response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Job;

/// Job listing response
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: String,
    pub description: String,
    pub skills: Vec<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub status: String,
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            job_type: job.job_type,
            description: job.description,
            skills: job.skills,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            status: job.status,
            posted_by: job.posted_by,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Paginated job list response
#[derive(Debug, Serialize)]
pub struct JobsListResponse {
    pub jobs: Vec<JobResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Applicant entry
#[derive(Debug, Serialize)]
pub struct ApplicantResponse {
    pub user_id: Uuid,
    pub username: String,
    pub applied_at: DateTime<Utc>,
}

/// Applicants list response
#[derive(Debug, Serialize)]
pub struct ApplicantsListResponse {
    pub applicants: Vec<ApplicantResponse>,
}

/// Application confirmation
#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub message: String,
    pub job_id: Uuid,
}
