//! Course response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Course;

/// Course response
#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub price_coins: i32,
    pub lessons: serde_json::Value,
    pub instructor_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            category: course.category,
            level: course.level,
            price_coins: course.price_coins,
            lessons: course.lessons,
            instructor_id: course.instructor_id,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

/// Course with enrollment details
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    #[serde(flatten)]
    pub course: CourseResponse,
    pub student_count: i64,
    pub is_enrolled: bool,
}

/// Paginated course list response
#[derive(Debug, Serialize)]
pub struct CoursesListResponse {
    pub courses: Vec<CourseResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Enrolled student entry
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub user_id: Uuid,
    pub username: String,
    pub enrolled_at: DateTime<Utc>,
}

/// Student list response
#[derive(Debug, Serialize)]
pub struct StudentsListResponse {
    pub students: Vec<StudentResponse>,
}

/// Enrollment confirmation
#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub message: String,
    pub course_id: Uuid,
    pub coins_spent: i32,
}
