//! Course repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Course,
};

/// Repository for course database operations
pub struct CourseRepository;

impl CourseRepository {
    /// Create a new course
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
        category: &str,
        level: &str,
        price_coins: i32,
        lessons: &serde_json::Value,
        instructor_id: &Uuid,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, category, level, price_coins, lessons, instructor_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(level)
        .bind(price_coins)
        .bind(lessons)
        .bind(instructor_id)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Find course by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(r#"SELECT * FROM courses WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(course)
    }

    /// List courses with filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category: Option<&str>,
        level: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<(Vec<Course>, i64)> {
        let pattern = search.map(|s| format!("%{}%", s));

        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT * FROM courses
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::TEXT IS NULL OR level = $2)
              AND ($3::TEXT IS NULL OR title ILIKE $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(category)
        .bind(level)
        .bind(pattern.as_deref())
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM courses
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::TEXT IS NULL OR level = $2)
              AND ($3::TEXT IS NULL OR title ILIKE $3)
            "#,
        )
        .bind(category)
        .bind(level)
        .bind(pattern.as_deref())
        .fetch_one(pool)
        .await?;

        Ok((courses, total))
    }

    /// Update a course (COALESCE keeps unset fields)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
        level: Option<&str>,
        price_coins: Option<i32>,
        lessons: Option<&serde_json::Value>,
    ) -> AppResult<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                level = COALESCE($5, level),
                price_coins = COALESCE($6, price_coins),
                lessons = COALESCE($7, lessons),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(level)
        .bind(price_coins)
        .bind(lessons)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Delete a course
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM courses WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Whether a user is enrolled
    pub async fn is_enrolled(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM course_enrollments WHERE course_id = $1 AND user_id = $2)"#,
        )
        .bind(course_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Enroll a student, transferring the coin price to the instructor.
    ///
    /// Runs in a single transaction: the debit, the credit, the XP grant,
    /// and the membership row all commit or none do. The debit update is
    /// conditional on balance so a concurrent spend cannot drive the
    /// balance negative.
    pub async fn enroll(
        pool: &PgPool,
        course_id: &Uuid,
        student_id: &Uuid,
        instructor_id: &Uuid,
        price_coins: i32,
        enroll_xp: i32,
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        if price_coins > 0 {
            let debited = sqlx::query(
                r#"UPDATE users SET coins = coins - $2, updated_at = NOW() WHERE id = $1 AND coins >= $2"#,
            )
            .bind(student_id)
            .bind(price_coins)
            .execute(&mut *tx)
            .await?;

            if debited.rows_affected() == 0 {
                tx.rollback().await?;
                let available: i32 =
                    sqlx::query_scalar(r#"SELECT coins FROM users WHERE id = $1"#)
                        .bind(student_id)
                        .fetch_one(pool)
                        .await?;
                return Err(AppError::InsufficientCoins {
                    needed: price_coins,
                    available,
                });
            }

            sqlx::query(r#"UPDATE users SET coins = coins + $2, updated_at = NOW() WHERE id = $1"#)
                .bind(instructor_id)
                .bind(price_coins)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query(r#"UPDATE users SET xp = xp + $2, updated_at = NOW() WHERE id = $1"#)
            .bind(student_id)
            .bind(enroll_xp)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r#"INSERT INTO course_enrollments (course_id, user_id) VALUES ($1, $2)"#)
            .bind(course_id)
            .bind(student_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Drop an enrollment (no refund); returns whether one existed
    pub async fn unenroll(pool: &PgPool, course_id: &Uuid, user_id: &Uuid) -> AppResult<bool> {
        let result =
            sqlx::query(r#"DELETE FROM course_enrollments WHERE course_id = $1 AND user_id = $2"#)
                .bind(course_id)
                .bind(user_id)
                .execute(pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List enrolled students
    pub async fn list_students(
        pool: &PgPool,
        course_id: &Uuid,
    ) -> AppResult<Vec<(Uuid, String, chrono::DateTime<chrono::Utc>)>> {
        let rows = sqlx::query_as::<_, (Uuid, String, chrono::DateTime<chrono::Utc>)>(
            r#"
            SELECT u.id, u.username, e.enrolled_at
            FROM course_enrollments e
            JOIN users u ON u.id = e.user_id
            WHERE e.course_id = $1
            ORDER BY e.enrolled_at ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Enrollment count for a course
    pub async fn student_count(pool: &PgPool, course_id: &Uuid) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM course_enrollments WHERE course_id = $1"#)
                .bind(course_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }

    /// Total course count
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM courses"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
