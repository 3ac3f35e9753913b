//! Community feed repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Post, PostComment},
};

/// Post row with aggregate counts for feed views
#[derive(Debug, sqlx::FromRow)]
pub struct PostWithCounts {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub content: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Repository for community feed database operations
pub struct PostRepository;

impl PostRepository {
    /// Create a post and grant the author posting XP in one transaction
    pub async fn create(
        pool: &PgPool,
        author_id: &Uuid,
        content: &str,
        image_url: Option<&str>,
        tags: &[String],
        post_xp: i32,
    ) -> AppResult<Post> {
        let mut tx = pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (author_id, content, image_url, tags)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(author_id)
        .bind(content)
        .bind(image_url)
        .bind(tags)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(r#"UPDATE users SET xp = xp + $2, updated_at = NOW() WHERE id = $1"#)
            .bind(author_id)
            .bind(post_xp)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(post)
    }

    /// Find post by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(r#"SELECT * FROM posts WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(post)
    }

    /// Feed listing, newest first, with like/comment counts
    pub async fn list_feed(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        author_id: Option<&Uuid>,
    ) -> AppResult<(Vec<PostWithCounts>, i64)> {
        let posts = sqlx::query_as::<_, PostWithCounts>(
            r#"
            SELECT
                p.id, p.author_id, u.username AS author_username,
                p.content, p.image_url, p.tags,
                (SELECT COUNT(*) FROM post_likes l WHERE l.post_id = p.id) AS like_count,
                (SELECT COUNT(*) FROM post_comments c WHERE c.post_id = p.id) AS comment_count,
                p.created_at, p.updated_at
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE ($1::UUID IS NULL OR p.author_id = $1)
            ORDER BY p.created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(author_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM posts WHERE ($1::UUID IS NULL OR author_id = $1)"#,
        )
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok((posts, total))
    }

    /// Update post content (COALESCE keeps unset fields)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        content: Option<&str>,
        image_url: Option<&str>,
        tags: Option<&[String]>,
    ) -> AppResult<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET
                content = COALESCE($2, content),
                image_url = COALESCE($3, image_url),
                tags = COALESCE($4, tags),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(content)
        .bind(image_url)
        .bind(tags)
        .fetch_one(pool)
        .await?;

        Ok(post)
    }

    /// Delete a post
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM posts WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Add a like; idempotent via ON CONFLICT
    pub async fn add_like(pool: &PgPool, post_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        sqlx::query(
            r#"INSERT INTO post_likes (post_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove a like; returns whether one existed
    pub async fn remove_like(pool: &PgPool, post_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2"#)
            .bind(post_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Like count for a post
    pub async fn like_count(pool: &PgPool, post_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM post_likes WHERE post_id = $1"#)
                .bind(post_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Add a comment
    pub async fn add_comment(
        pool: &PgPool,
        post_id: &Uuid,
        author_id: &Uuid,
        content: &str,
    ) -> AppResult<PostComment> {
        let comment = sqlx::query_as::<_, PostComment>(
            r#"
            INSERT INTO post_comments (post_id, author_id, content)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(post_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(pool)
        .await?;

        Ok(comment)
    }

    /// Find a comment by ID
    pub async fn find_comment(pool: &PgPool, comment_id: &Uuid) -> AppResult<Option<PostComment>> {
        let comment =
            sqlx::query_as::<_, PostComment>(r#"SELECT * FROM post_comments WHERE id = $1"#)
                .bind(comment_id)
                .fetch_optional(pool)
                .await?;

        Ok(comment)
    }

    /// Comments for a post, oldest first
    pub async fn list_comments(pool: &PgPool, post_id: &Uuid) -> AppResult<Vec<PostComment>> {
        let comments = sqlx::query_as::<_, PostComment>(
            r#"SELECT * FROM post_comments WHERE post_id = $1 ORDER BY created_at ASC"#,
        )
        .bind(post_id)
        .fetch_all(pool)
        .await?;

        Ok(comments)
    }

    /// Delete a comment
    pub async fn delete_comment(pool: &PgPool, comment_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM post_comments WHERE id = $1"#)
            .bind(comment_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Total post count
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM posts"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
