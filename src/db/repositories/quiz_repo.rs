//! Quiz repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Quiz, QuizAttempt},
};

/// Repository for quiz database operations
pub struct QuizRepository;

impl QuizRepository {
    /// Create a new quiz
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &PgPool,
        title: &str,
        category: &str,
        difficulty: &str,
        questions: &serde_json::Value,
        pass_score: i32,
        coin_reward: i32,
        xp_reward: i32,
        author_id: &Uuid,
    ) -> AppResult<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            INSERT INTO quizzes (title, category, difficulty, questions, pass_score, coin_reward, xp_reward, author_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(category)
        .bind(difficulty)
        .bind(questions)
        .bind(pass_score)
        .bind(coin_reward)
        .bind(xp_reward)
        .bind(author_id)
        .fetch_one(pool)
        .await?;

        Ok(quiz)
    }

    /// Find quiz by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Quiz>> {
        let quiz = sqlx::query_as::<_, Quiz>(r#"SELECT * FROM quizzes WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(quiz)
    }

    /// List quizzes with filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<(Vec<Quiz>, i64)> {
        let quizzes = sqlx::query_as::<_, Quiz>(
            r#"
            SELECT * FROM quizzes
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::TEXT IS NULL OR difficulty = $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(category)
        .bind(difficulty)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM quizzes
            WHERE ($1::TEXT IS NULL OR category = $1)
              AND ($2::TEXT IS NULL OR difficulty = $2)
            "#,
        )
        .bind(category)
        .bind(difficulty)
        .fetch_one(pool)
        .await?;

        Ok((quizzes, total))
    }

    /// Update a quiz (COALESCE keeps unset fields)
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        category: Option<&str>,
        difficulty: Option<&str>,
        questions: Option<&serde_json::Value>,
        pass_score: Option<i32>,
        coin_reward: Option<i32>,
        xp_reward: Option<i32>,
    ) -> AppResult<Quiz> {
        let quiz = sqlx::query_as::<_, Quiz>(
            r#"
            UPDATE quizzes
            SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                difficulty = COALESCE($4, difficulty),
                questions = COALESCE($5, questions),
                pass_score = COALESCE($6, pass_score),
                coin_reward = COALESCE($7, coin_reward),
                xp_reward = COALESCE($8, xp_reward),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(category)
        .bind(difficulty)
        .bind(questions)
        .bind(pass_score)
        .bind(coin_reward)
        .bind(xp_reward)
        .fetch_one(pool)
        .await?;

        Ok(quiz)
    }

    /// Delete a quiz
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM quizzes WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Record an attempt, optionally granting the reward in the same
    /// transaction so a crash cannot award twice.
    ///
    /// The `idx_quiz_attempts_once_rewarded` unique index backs the
    /// once-per-user guarantee: a concurrent submission that already
    /// claimed the reward downgrades this attempt to unrewarded, and
    /// no coins or XP are credited. Callers must read the reward
    /// outcome off the returned attempt's `rewarded` flag.
    pub async fn record_attempt(
        pool: &PgPool,
        quiz_id: &Uuid,
        user_id: &Uuid,
        score: i32,
        total: i32,
        passed: bool,
        reward: Option<(i32, i32)>,
    ) -> AppResult<QuizAttempt> {
        let mut tx = pool.begin().await?;

        let attempt = if let Some((coins, xp)) = reward {
            let inserted = sqlx::query_as::<_, QuizAttempt>(
                r#"
                INSERT INTO quiz_attempts (quiz_id, user_id, score, total, passed, rewarded)
                VALUES ($1, $2, $3, $4, $5, TRUE)
                ON CONFLICT (quiz_id, user_id) WHERE rewarded DO NOTHING
                RETURNING *
                "#,
            )
            .bind(quiz_id)
            .bind(user_id)
            .bind(score)
            .bind(total)
            .bind(passed)
            .fetch_optional(&mut *tx)
            .await?;

            match inserted {
                Some(attempt) => {
                    sqlx::query(
                        r#"UPDATE users SET coins = coins + $2, xp = xp + $3, updated_at = NOW() WHERE id = $1"#,
                    )
                    .bind(user_id)
                    .bind(coins)
                    .bind(xp)
                    .execute(&mut *tx)
                    .await?;
                    attempt
                }
                None => Self::insert_unrewarded(&mut tx, quiz_id, user_id, score, total, passed).await?,
            }
        } else {
            Self::insert_unrewarded(&mut tx, quiz_id, user_id, score, total, passed).await?
        };

        tx.commit().await?;
        Ok(attempt)
    }

    async fn insert_unrewarded(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        quiz_id: &Uuid,
        user_id: &Uuid,
        score: i32,
        total: i32,
        passed: bool,
    ) -> AppResult<QuizAttempt> {
        let attempt = sqlx::query_as::<_, QuizAttempt>(
            r#"
            INSERT INTO quiz_attempts (quiz_id, user_id, score, total, passed, rewarded)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING *
            "#,
        )
        .bind(quiz_id)
        .bind(user_id)
        .bind(score)
        .bind(total)
        .bind(passed)
        .fetch_one(&mut **tx)
        .await?;

        Ok(attempt)
    }

    /// Whether the user was already rewarded for this quiz
    pub async fn has_been_rewarded(
        pool: &PgPool,
        quiz_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS (SELECT 1 FROM quiz_attempts WHERE quiz_id = $1 AND user_id = $2 AND rewarded)"#,
        )
        .bind(quiz_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// A user's attempts on one quiz, newest first
    pub async fn list_attempts(
        pool: &PgPool,
        quiz_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<QuizAttempt>> {
        let attempts = sqlx::query_as::<_, QuizAttempt>(
            r#"
            SELECT * FROM quiz_attempts
            WHERE quiz_id = $1 AND user_id = $2
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(quiz_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(attempts)
    }

    /// Total quiz count
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM quizzes"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
