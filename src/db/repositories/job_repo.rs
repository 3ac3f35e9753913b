//! Job repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Job};

/// Repository for job board database operations
pub struct JobRepository;

impl JobRepository {
    /// Create a new job listing
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        company: &str,
        location: Option<&str>,
        job_type: &str,
        description: &str,
        skills: &[String],
        salary_min: Option<i32>,
        salary_max: Option<i32>,
        posted_by: &Uuid,
    ) -> AppResult<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (title, company, location, job_type, description, skills, salary_min, salary_max, posted_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(company)
        .bind(location)
        .bind(job_type)
        .bind(description)
        .bind(skills)
        .bind(salary_min)
        .bind(salary_max)
        .bind(posted_by)
        .fetch_one(pool)
        .await?;

        Ok(job)
    }

    /// Find job by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(r#"SELECT * FROM jobs WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(job)
    }

    /// List jobs with filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        status: Option<&str>,
        job_type: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Job>, i64)> {
        let pattern = search.map(|s| format!("%{}%", s));

        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT * FROM jobs
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::TEXT IS NULL OR job_type = $2)
              AND ($3::TEXT IS NULL OR title ILIKE $3 OR company ILIKE $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(status)
        .bind(job_type)
        .bind(pattern.as_deref())
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM jobs
            WHERE ($1::TEXT IS NULL OR status = $1)
              AND ($2::TEXT IS NULL OR job_type = $2)
              AND ($3::TEXT IS NULL OR title ILIKE $3 OR company ILIKE $3)
            "#,
        )
        .bind(status)
        .bind(job_type)
        .bind(pattern.as_deref())
        .fetch_one(pool)
        .await?;

        Ok((jobs, total))
    }

    /// Update a job listing (COALESCE keeps unset fields)
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        company: Option<&str>,
        location: Option<&str>,
        job_type: Option<&str>,
        description: Option<&str>,
        skills: Option<&[String]>,
        salary_min: Option<i32>,
        salary_max: Option<i32>,
        status: Option<&str>,
    ) -> AppResult<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET
                title = COALESCE($2, title),
                company = COALESCE($3, company),
                location = COALESCE($4, location),
                job_type = COALESCE($5, job_type),
                description = COALESCE($6, description),
                skills = COALESCE($7, skills),
                salary_min = COALESCE($8, salary_min),
                salary_max = COALESCE($9, salary_max),
                status = COALESCE($10, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(company)
        .bind(location)
        .bind(job_type)
        .bind(description)
        .bind(skills)
        .bind(salary_min)
        .bind(salary_max)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(job)
    }

    /// Delete a job listing
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM jobs WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Record an application
    pub async fn add_applicant(pool: &PgPool, job_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"INSERT INTO job_applicants (job_id, user_id) VALUES ($1, $2)"#)
            .bind(job_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Withdraw an application; returns whether one existed
    pub async fn remove_applicant(pool: &PgPool, job_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM job_applicants WHERE job_id = $1 AND user_id = $2"#)
            .bind(job_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Whether a user has applied
    pub async fn has_applied(pool: &PgPool, job_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM job_applicants WHERE job_id = $1 AND user_id = $2)"#,
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// List applicant user ids with application time
    pub async fn list_applicants(
        pool: &PgPool,
        job_id: &Uuid,
    ) -> AppResult<Vec<(Uuid, String, chrono::DateTime<chrono::Utc>)>> {
        let rows = sqlx::query_as::<_, (Uuid, String, chrono::DateTime<chrono::Utc>)>(
            r#"
            SELECT u.id, u.username, a.applied_at
            FROM job_applicants a
            JOIN users u ON u.id = a.user_id
            WHERE a.job_id = $1
            ORDER BY a.applied_at ASC
            "#,
        )
        .bind(job_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Total job count
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM jobs"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
