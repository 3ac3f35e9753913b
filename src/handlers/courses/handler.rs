//! Course handler implementations

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
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::CourseService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{CreateCourseRequest, ListCoursesQuery, UpdateCourseRequest},
    response::{
        CourseDetailResponse, CourseResponse, CoursesListResponse, EnrollmentResponse,
        StudentsListResponse,
    },
};

/// List courses with filters
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQuery>,
) -> AppResult<Json<CoursesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    if let Some(level) = query.level.as_deref() {
        validation::validate_course_level(level)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let (courses, total) = CourseService::list_courses(
        state.db(),
        page,
        per_page,
        query.category.as_deref(),
        query.level.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(CoursesListResponse {
        courses,
        total,
        page,
        per_page,
    }))
}

/// Create a course
pub async fn create_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCourseRequest>,
) -> AppResult<(StatusCode, Json<CourseResponse>)> {
    payload.validate()?;
    validation::validate_course_level(&payload.level)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let course = CourseService::create_course(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Get a course with enrollment details
pub async fn get_course(
    State(state): State<AppState>,
    OptionalAuth(auth): OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CourseDetailResponse>> {
    let viewer_id = auth.map(|u| u.id);
    let course = CourseService::get_course(state.db(), &id, viewer_id.as_ref()).await?;
    Ok(Json(course))
}

/// Update a course
pub async fn update_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> AppResult<Json<CourseResponse>> {
    payload.validate()?;
    if let Some(level) = payload.level.as_deref() {
        validation::validate_course_level(level)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let course =
        CourseService::update_course(state.db(), &id, &auth_user.id, &auth_user.role, payload)
            .await?;

    Ok(Json(course))
}

/// Delete a course
pub async fn delete_course(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    CourseService::delete_course(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Enroll in a course
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<(StatusCode, Json<EnrollmentResponse>)> {
    let coins_spent = CourseService::enroll(state.db(), &id, &auth_user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(EnrollmentResponse {
            message: "Enrolled".to_string(),
            course_id: id,
            coins_spent,
        }),
    ))
}

/// Drop an enrollment
pub async fn unenroll(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    CourseService::unenroll(state.db(), &id, &auth_user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List enrolled students
pub async fn list_students(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StudentsListResponse>> {
    let students =
        CourseService::list_students(state.db(), &id, &auth_user.id, &auth_user.role).await?;

    Ok(Json(StudentsListResponse { students }))
}
