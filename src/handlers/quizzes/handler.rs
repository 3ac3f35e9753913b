//! Quiz handler implementations

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
    services::QuizService,
    state::AppState,
    utils::validation,
};

use super::{
    request::{CreateQuizRequest, ListQuizzesQuery, SubmitQuizRequest, UpdateQuizRequest},
    response::{AttemptsListResponse, QuizResponse, QuizzesListResponse, SubmissionResponse},
};

/// List quizzes
pub async fn list_quizzes(
    State(state): State<AppState>,
    Query(query): Query<ListQuizzesQuery>,
) -> AppResult<Json<QuizzesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    if let Some(difficulty) = query.difficulty.as_deref() {
        validation::validate_quiz_difficulty(difficulty)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let (quizzes, total) = QuizService::list_quizzes(
        state.db(),
        page,
        per_page,
        query.category.as_deref(),
        query.difficulty.as_deref(),
    )
    .await?;

    Ok(Json(QuizzesListResponse {
        quizzes,
        total,
        page,
        per_page,
    }))
}

/// Create a quiz
pub async fn create_quiz(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateQuizRequest>,
) -> AppResult<(StatusCode, Json<QuizResponse>)> {
    payload.validate()?;
    validation::validate_quiz_difficulty(&payload.difficulty)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let quiz = QuizService::create_quiz(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(quiz)))
}

/// Get a quiz; correct answers withheld from non-authors
pub async fn get_quiz(
    State(state): State<AppState>,
    OptionalAuth(auth): OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QuizResponse>> {
    let viewer_id = auth.as_ref().map(|u| u.id);
    let viewer_role = auth.as_ref().map(|u| u.role.as_str());
    let quiz = QuizService::get_quiz(state.db(), &id, viewer_id.as_ref(), viewer_role).await?;
    Ok(Json(quiz))
}

/// Update a quiz
pub async fn update_quiz(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateQuizRequest>,
) -> AppResult<Json<QuizResponse>> {
    payload.validate()?;
    if let Some(difficulty) = payload.difficulty.as_deref() {
        validation::validate_quiz_difficulty(difficulty)
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let quiz =
        QuizService::update_quiz(state.db(), &id, &auth_user.id, &auth_user.role, payload).await?;

    Ok(Json(quiz))
}

/// Delete a quiz
pub async fn delete_quiz(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    QuizService::delete_quiz(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Submit answers for grading
pub async fn submit(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SubmitQuizRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    let result = QuizService::submit(state.db(), &id, &auth_user.id, &payload.answers).await?;
    Ok(Json(result))
}

/// List the caller's attempts
pub async fn list_attempts(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AttemptsListResponse>> {
    let attempts = QuizService::list_attempts(state.db(), &id, &auth_user.id).await?;
    Ok(Json(AttemptsListResponse { attempts }))
}
