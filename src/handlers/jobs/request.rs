//! Job board request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

/// Create job request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub company: String,

    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub location: Option<String>,

    /// Employment type: full_time, part_time, contract, internship
    pub job_type: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    pub skills: Option<Vec<String>>,

    #[validate(range(min = 0))]
    pub salary_min: Option<i32>,

    #[validate(range(min = 0))]
    pub salary_max: Option<i32>,
}

/// Update job request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub company: Option<String>,

    #[validate(length(max = MAX_TITLE_LENGTH))]
    pub location: Option<String>,

    pub job_type: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub skills: Option<Vec<String>>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,

    /// Listing status: open, closed
    pub status: Option<String>,
}

/// List jobs query parameters
#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<String>,
    pub job_type: Option<String>,
    pub search: Option<String>,
}
