//! Collaborative project repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Project};

/// Repository for collaborative project database operations
pub struct ProjectRepository;

impl ProjectRepository {
    /// Create a new project
    pub async fn create(
        pool: &PgPool,
        owner_id: &Uuid,
        name: &str,
        description: Option<&str>,
        language: &str,
        is_public: bool,
    ) -> AppResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (owner_id, name, description, language, is_public)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(name)
        .bind(description)
        .bind(language)
        .bind(is_public)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Find project by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(r#"SELECT * FROM projects WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(project)
    }

    /// Projects a user owns or collaborates on
    pub async fn list_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT p.* FROM projects p
            WHERE p.owner_id = $1
               OR EXISTS (
                    SELECT 1 FROM project_collaborators c
                    WHERE c.project_id = p.id AND c.user_id = $1
               )
            ORDER BY p.updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(projects)
    }

    /// Update metadata and document state (COALESCE keeps unset fields;
    /// code/whiteboard writes are last-write-wins)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
        language: Option<&str>,
        code: Option<&str>,
        whiteboard: Option<&serde_json::Value>,
        is_public: Option<bool>,
    ) -> AppResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                language = COALESCE($4, language),
                code = COALESCE($5, code),
                whiteboard = COALESCE($6, whiteboard),
                is_public = COALESCE($7, is_public),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(language)
        .bind(code)
        .bind(whiteboard)
        .bind(is_public)
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Delete a project
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM projects WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Add a collaborator
    pub async fn add_collaborator(pool: &PgPool, project_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"INSERT INTO project_collaborators (project_id, user_id) VALUES ($1, $2)"#)
            .bind(project_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Remove a collaborator; returns whether one existed
    pub async fn remove_collaborator(
        pool: &PgPool,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"DELETE FROM project_collaborators WHERE project_id = $1 AND user_id = $2"#,
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether a user is a collaborator
    pub async fn is_collaborator(
        pool: &PgPool,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM project_collaborators WHERE project_id = $1 AND user_id = $2)"#,
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// List collaborator users
    pub async fn list_collaborators(
        pool: &PgPool,
        project_id: &Uuid,
    ) -> AppResult<Vec<(Uuid, String)>> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            r#"
            SELECT u.id, u.username
            FROM project_collaborators c
            JOIN users u ON u.id = c.user_id
            WHERE c.project_id = $1
            ORDER BY c.added_at ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Total project count
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM projects"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
