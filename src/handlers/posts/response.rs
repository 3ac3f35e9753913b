//! Community feed response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::repositories::PostWithCounts,
    models::{Post, PostComment},
};

/// Feed post with aggregate counts
#[derive(Debug, Serialize)]
pub struct FeedPostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostWithCounts> for FeedPostResponse {
    fn from(p: PostWithCounts) -> Self {
        Self {
            id: p.id,
            author_id: p.author_id,
            author_username: p.author_username,
            content: p.content,
            image_url: p.image_url,
            tags: p.tags,
            like_count: p.like_count,
            comment_count: p.comment_count,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Bare post response (create/update results)
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            content: post.content,
            image_url: post.image_url,
            tags: post.tags,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Paginated feed response
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub posts: Vec<FeedPostResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Comment response
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<PostComment> for CommentResponse {
    fn from(comment: PostComment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Comment list response
#[derive(Debug, Serialize)]
pub struct CommentsListResponse {
    pub comments: Vec<CommentResponse>,
}

/// Like state after a toggle
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub post_id: Uuid,
    pub like_count: i64,
}
