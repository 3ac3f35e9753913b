//! Admin dashboard request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Ban user request
#[derive(Debug, Deserialize, Validate)]
pub struct BanUserRequest {
    #[validate(length(min = 1, max = 500))]
    pub reason: String,

    /// Omit for a permanent ban
    pub expires_at: Option<DateTime<Utc>>,
}

/// Change role request
#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    /// Target role: admin, mentor, member
    pub role: String,
}

/// Admin user list query parameters
#[derive(Debug, Deserialize)]
pub struct AdminUsersQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}
