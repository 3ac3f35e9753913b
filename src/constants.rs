//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// GAMIFICATION DEFAULTS
// =============================================================================

/// Coins granted to every new account
pub const SIGNUP_COINS: i32 = 100;

/// XP awarded for enrolling in a course
pub const COURSE_ENROLL_XP: i32 = 20;

/// XP awarded for publishing a community post
pub const POST_XP: i32 = 5;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const MENTOR: &str = "mentor";
    pub const MEMBER: &str = "member";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, MENTOR, MEMBER];
}

// =============================================================================
// JOB BOARD
// =============================================================================

/// Job employment types
pub mod job_types {
    pub const FULL_TIME: &str = "full_time";
    pub const PART_TIME: &str = "part_time";
    pub const CONTRACT: &str = "contract";
    pub const INTERNSHIP: &str = "internship";

    /// All supported job types
    pub const ALL: &[&str] = &[FULL_TIME, PART_TIME, CONTRACT, INTERNSHIP];
}

/// Job listing statuses
pub mod job_statuses {
    pub const OPEN: &str = "open";
    pub const CLOSED: &str = "closed";

    pub const ALL: &[&str] = &[OPEN, CLOSED];
}

// =============================================================================
// COURSES & QUIZZES
// =============================================================================

/// Course difficulty levels
pub mod course_levels {
    pub const BEGINNER: &str = "beginner";
    pub const INTERMEDIATE: &str = "intermediate";
    pub const ADVANCED: &str = "advanced";

    pub const ALL: &[&str] = &[BEGINNER, INTERMEDIATE, ADVANCED];
}

/// Quiz difficulty levels
pub mod quiz_difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

// =============================================================================
// HACKATHONS
// =============================================================================

/// Hackathon modes
pub mod hackathon_modes {
    pub const ONLINE: &str = "online";
    pub const ONSITE: &str = "onsite";
    pub const HYBRID: &str = "hybrid";

    pub const ALL: &[&str] = &[ONLINE, ONSITE, HYBRID];
}

// =============================================================================
// LIVE ROOMS
// =============================================================================

/// Length of a room join code
pub const ROOM_CODE_LENGTH: usize = 6;

/// Attempts at generating a unique join code before giving up
pub const ROOM_CODE_MAX_RETRIES: u32 = 5;

/// Default room capacity
pub const DEFAULT_ROOM_CAPACITY: i32 = 10;

/// Maximum room capacity
pub const MAX_ROOM_CAPACITY: i32 = 50;

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Message send endpoint - max requests
    pub const MESSAGE_MAX_REQUESTS: i64 = 30;
    /// Message send endpoint - window in seconds
    pub const MESSAGE_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum title length (jobs, courses, hackathons, quizzes, rooms)
pub const MAX_TITLE_LENGTH: u64 = 256;

/// Maximum description/body length
pub const MAX_DESCRIPTION_LENGTH: u64 = 65535;

/// Maximum post content length
pub const MAX_POST_LENGTH: u64 = 5000;

/// Maximum chat message length
pub const MAX_MESSAGE_LENGTH: u64 = 2000;

/// Maximum post comment length
pub const MAX_COMMENT_LENGTH: u64 = 2000;

/// Maximum bio length
pub const MAX_BIO_LENGTH: u64 = 1000;

/// Maximum number of skills on a profile
pub const MAX_SKILLS: usize = 20;

/// Maximum number of questions in a quiz
pub const MAX_QUIZ_QUESTIONS: usize = 50;

/// Maximum collaborative code document size in bytes (1 MB)
pub const MAX_CODE_SIZE: usize = 1024 * 1024;
