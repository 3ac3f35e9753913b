//! Course service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{roles, COURSE_ENROLL_XP},
    db::repositories::{CourseRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::courses::{
        request::{CreateCourseRequest, UpdateCourseRequest},
        response::{CourseDetailResponse, CourseResponse, StudentResponse},
    },
};

/// Course business logic
pub struct CourseService;

impl CourseService {
    /// Create a course
    pub async fn create_course(
        pool: &PgPool,
        instructor_id: &Uuid,
        payload: CreateCourseRequest,
    ) -> AppResult<CourseResponse> {
        let lessons = payload.lessons.unwrap_or_else(|| serde_json::json!([]));
        if !lessons.is_array() {
            return Err(AppError::Validation("Lessons must be an array".to_string()));
        }

        let course = CourseRepository::create(
            pool,
            &payload.title,
            &payload.description,
            &payload.category,
            &payload.level,
            payload.price_coins.unwrap_or(0),
            &lessons,
            instructor_id,
        )
        .await?;

        Ok(course.into())
    }

    /// Get a course with enrollment details
    pub async fn get_course(
        pool: &PgPool,
        id: &Uuid,
        viewer_id: Option<&Uuid>,
    ) -> AppResult<CourseDetailResponse> {
        let course = CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let student_count = CourseRepository::student_count(pool, id).await?;
        let is_enrolled = match viewer_id {
            Some(viewer_id) => CourseRepository::is_enrolled(pool, id, viewer_id).await?,
            None => false,
        };

        Ok(CourseDetailResponse {
            course: course.into(),
            student_count,
            is_enrolled,
        })
    }

    /// List courses
    pub async fn list_courses(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        category: Option<&str>,
        level: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<CourseResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (courses, total) =
            CourseRepository::list(pool, offset, limit, category, level, search).await?;

        Ok((courses.into_iter().map(CourseResponse::from).collect(), total))
    }

    /// Update a course; only the instructor or an admin may
    pub async fn update_course(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateCourseRequest,
    ) -> AppResult<CourseResponse> {
        let course = CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if course.instructor_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' courses".to_string(),
            ));
        }

        if let Some(lessons) = &payload.lessons {
            if !lessons.is_array() {
                return Err(AppError::Validation("Lessons must be an array".to_string()));
            }
        }

        let updated = CourseRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.description.as_deref(),
            payload.category.as_deref(),
            payload.level.as_deref(),
            payload.price_coins,
            payload.lessons.as_ref(),
        )
        .await?;

        Ok(updated.into())
    }

    /// Delete a course; only the instructor or an admin may
    pub async fn delete_course(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let course = CourseRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if course.instructor_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot delete other users' courses".to_string(),
            ));
        }

        CourseRepository::delete(pool, id).await
    }

    /// Enroll in a course; transfers the coin price to the instructor
    pub async fn enroll(pool: &PgPool, course_id: &Uuid, student_id: &Uuid) -> AppResult<i32> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if course.instructor_id == *student_id {
            return Err(AppError::Validation(
                "Cannot enroll in your own course".to_string(),
            ));
        }

        if CourseRepository::is_enrolled(pool, course_id, student_id).await? {
            return Err(AppError::AlreadyExists(
                "Already enrolled in this course".to_string(),
            ));
        }

        // Fast-path balance check; the debit itself re-verifies the
        // balance inside the enrollment transaction
        let student = UserRepository::find_by_id(pool, student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        if !student.can_afford(course.price_coins) {
            return Err(AppError::InsufficientCoins {
                needed: course.price_coins,
                available: student.coins,
            });
        }

        CourseRepository::enroll(
            pool,
            course_id,
            student_id,
            &course.instructor_id,
            course.price_coins,
            COURSE_ENROLL_XP,
        )
        .await?;

        Ok(course.price_coins)
    }

    /// Drop an enrollment; no refund
    pub async fn unenroll(pool: &PgPool, course_id: &Uuid, student_id: &Uuid) -> AppResult<()> {
        if !CourseRepository::unenroll(pool, course_id, student_id).await? {
            return Err(AppError::NotFound("Not enrolled in this course".to_string()));
        }
        Ok(())
    }

    /// List students; only the instructor or an admin may view
    pub async fn list_students(
        pool: &PgPool,
        course_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<Vec<StudentResponse>> {
        let course = CourseRepository::find_by_id(pool, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if course.instructor_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Only the instructor can view students".to_string(),
            ));
        }

        let students = CourseRepository::list_students(pool, course_id)
            .await?
            .into_iter()
            .map(|(user_id, username, enrolled_at)| StudentResponse {
                user_id,
                username,
                enrolled_at,
            })
            .collect();

        Ok(students)
    }
}
