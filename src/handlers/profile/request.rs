//! Profile request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_BIO_LENGTH;

/// Update profile request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 64))]
    pub display_name: Option<String>,

    #[validate(length(max = MAX_BIO_LENGTH))]
    pub bio: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,

    pub skills_offered: Option<Vec<String>>,
    pub skills_wanted: Option<Vec<String>>,
}
