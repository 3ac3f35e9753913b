//! Community feed handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::MAX_PAGE_SIZE,
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::PostService,
    state::AppState,
};

use super::{
    request::{AddCommentRequest, CreatePostRequest, FeedQuery, UpdatePostRequest},
    response::{
        CommentResponse, CommentsListResponse, FeedResponse, LikeResponse, PostResponse,
    },
};

/// Feed listing, newest first
pub async fn list_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<FeedResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(MAX_PAGE_SIZE);

    let (posts, total) =
        PostService::list_feed(state.db(), page, per_page, query.author_id.as_ref()).await?;

    Ok(Json(FeedResponse {
        posts,
        total,
        page,
        per_page,
    }))
}

/// Create a post
pub async fn create_post(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<PostResponse>)> {
    payload.validate()?;

    let post = PostService::create_post(state.db(), &auth_user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a single post
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PostResponse>> {
    let post = PostService::get_post(state.db(), &id).await?;
    Ok(Json(post))
}

/// Update a post
pub async fn update_post(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePostRequest>,
) -> AppResult<Json<PostResponse>> {
    payload.validate()?;

    let post =
        PostService::update_post(state.db(), &id, &auth_user.id, &auth_user.role, payload).await?;

    Ok(Json(post))
}

/// Delete a post
pub async fn delete_post(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    PostService::delete_post(state.db(), &id, &auth_user.id, &auth_user.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Like a post
pub async fn like(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LikeResponse>> {
    let like_count = PostService::like(state.db(), &id, &auth_user.id).await?;

    Ok(Json(LikeResponse {
        post_id: id,
        like_count,
    }))
}

/// Remove a like
pub async fn unlike(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LikeResponse>> {
    let like_count = PostService::unlike(state.db(), &id, &auth_user.id).await?;

    Ok(Json(LikeResponse {
        post_id: id,
        like_count,
    }))
}

/// Comment on a post
pub async fn add_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddCommentRequest>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    payload.validate()?;

    let comment =
        PostService::add_comment(state.db(), &id, &auth_user.id, &payload.content).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// List comments on a post
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<CommentsListResponse>> {
    let comments = PostService::list_comments(state.db(), &id).await?;
    Ok(Json(CommentsListResponse { comments }))
}

/// Delete a comment
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((id, comment_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    PostService::delete_comment(state.db(), &id, &comment_id, &auth_user.id, &auth_user.role)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
