//! Input validation utilities

use crate::constants;

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false) {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Validate job employment type
pub fn validate_job_type(job_type: &str) -> Result<(), &'static str> {
    if constants::job_types::ALL.contains(&job_type) {
        Ok(())
    } else {
        Err("Invalid job type")
    }
}

/// Validate job listing status
pub fn validate_job_status(status: &str) -> Result<(), &'static str> {
    if constants::job_statuses::ALL.contains(&status) {
        Ok(())
    } else {
        Err("Invalid job status")
    }
}

/// Validate course level
pub fn validate_course_level(level: &str) -> Result<(), &'static str> {
    if constants::course_levels::ALL.contains(&level) {
        Ok(())
    } else {
        Err("Invalid course level")
    }
}

/// Validate quiz difficulty
pub fn validate_quiz_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if constants::quiz_difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err("Invalid quiz difficulty")
    }
}

/// Validate hackathon mode
pub fn validate_hackathon_mode(mode: &str) -> Result<(), &'static str> {
    if constants::hackathon_modes::ALL.contains(&mode) {
        Ok(())
    } else {
        Err("Invalid hackathon mode")
    }
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("alice_smith-2").is_ok());
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username("2alice").is_err());
        assert!(validate_username("alice smith").is_err());
        assert!(validate_username(&"a".repeat(40)).is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user@localhost").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password("Passw0rd").is_ok());
        assert!(validate_password("short1A").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("ALLUPPERCASE1").is_err());
        assert!(validate_password("NoNumbersHere").is_err());
    }

    #[test]
    fn test_enum_string_validation() {
        assert!(validate_job_type("full_time").is_ok());
        assert!(validate_job_type("gig").is_err());
        assert!(validate_course_level("beginner").is_ok());
        assert!(validate_course_level("expert").is_err());
        assert!(validate_hackathon_mode("hybrid").is_ok());
        assert!(validate_hackathon_mode("metaverse").is_err());
        assert!(validate_role("mentor").is_ok());
        assert!(validate_role("superuser").is_err());
    }
}
