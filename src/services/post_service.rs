//! Community feed service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{roles, POST_XP},
    db::repositories::PostRepository,
    error::{AppError, AppResult},
    handlers::posts::{
        request::{CreatePostRequest, UpdatePostRequest},
        response::{CommentResponse, FeedPostResponse, PostResponse},
    },
};

/// Community feed business logic
pub struct PostService;

impl PostService {
    /// Create a post; grants posting XP
    pub async fn create_post(
        pool: &PgPool,
        author_id: &Uuid,
        payload: CreatePostRequest,
    ) -> AppResult<PostResponse> {
        let post = PostRepository::create(
            pool,
            author_id,
            &payload.content,
            payload.image_url.as_deref(),
            &payload.tags.unwrap_or_default(),
            POST_XP,
        )
        .await?;

        Ok(post.into())
    }

    /// Feed listing, newest first
    pub async fn list_feed(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        author_id: Option<&Uuid>,
    ) -> AppResult<(Vec<FeedPostResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (posts, total) = PostRepository::list_feed(pool, offset, limit, author_id).await?;

        Ok((posts.into_iter().map(FeedPostResponse::from).collect(), total))
    }

    /// Get a single post
    pub async fn get_post(pool: &PgPool, id: &Uuid) -> AppResult<PostResponse> {
        let post = PostRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        Ok(post.into())
    }

    /// Update a post; only the author or an admin may
    pub async fn update_post(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdatePostRequest,
    ) -> AppResult<PostResponse> {
        let post = PostRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if post.author_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' posts".to_string(),
            ));
        }

        let updated = PostRepository::update(
            pool,
            id,
            payload.content.as_deref(),
            payload.image_url.as_deref(),
            payload.tags.as_deref(),
        )
        .await?;

        Ok(updated.into())
    }

    /// Delete a post; only the author or an admin may
    pub async fn delete_post(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let post = PostRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if post.author_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot delete other users' posts".to_string(),
            ));
        }

        PostRepository::delete(pool, id).await
    }

    /// Like a post; repeated likes are no-ops
    pub async fn like(pool: &PgPool, post_id: &Uuid, user_id: &Uuid) -> AppResult<i64> {
        PostRepository::find_by_id(pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        PostRepository::add_like(pool, post_id, user_id).await?;
        PostRepository::like_count(pool, post_id).await
    }

    /// Remove a like
    pub async fn unlike(pool: &PgPool, post_id: &Uuid, user_id: &Uuid) -> AppResult<i64> {
        if !PostRepository::remove_like(pool, post_id, user_id).await? {
            return Err(AppError::NotFound("Post not liked".to_string()));
        }
        PostRepository::like_count(pool, post_id).await
    }

    /// Comment on a post
    pub async fn add_comment(
        pool: &PgPool,
        post_id: &Uuid,
        author_id: &Uuid,
        content: &str,
    ) -> AppResult<CommentResponse> {
        PostRepository::find_by_id(pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let comment = PostRepository::add_comment(pool, post_id, author_id, content).await?;
        Ok(comment.into())
    }

    /// List comments, oldest first
    pub async fn list_comments(pool: &PgPool, post_id: &Uuid) -> AppResult<Vec<CommentResponse>> {
        PostRepository::find_by_id(pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let comments = PostRepository::list_comments(pool, post_id)
            .await?
            .into_iter()
            .map(CommentResponse::from)
            .collect();

        Ok(comments)
    }

    /// Delete a comment; the comment author, post author, or an admin may
    pub async fn delete_comment(
        pool: &PgPool,
        post_id: &Uuid,
        comment_id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let post = PostRepository::find_by_id(pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let comment = PostRepository::find_comment(pool, comment_id)
            .await?
            .filter(|c| c.post_id == *post_id)
            .ok_or_else(|| AppError::NotFound("Comment not found".to_string()))?;

        let allowed = comment.author_id == *requester_id
            || post.author_id == *requester_id
            || requester_role == roles::ADMIN;
        if !allowed {
            return Err(AppError::Forbidden(
                "Cannot delete other users' comments".to_string(),
            ));
        }

        PostRepository::delete_comment(pool, comment_id).await
    }
}
