//! Quiz service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::QuizRepository,
    error::{AppError, AppResult},
    handlers::quizzes::{
        request::{CreateQuizRequest, UpdateQuizRequest},
        response::{AttemptResponse, PublicQuestion, QuizResponse, QuizSummaryResponse, SubmissionResponse},
    },
    models::{Quiz, QuizQuestion},
};

/// Quiz business logic
pub struct QuizService;

impl QuizService {
    fn validate_questions(questions: &[QuizQuestion], pass_score: i32) -> AppResult<()> {
        for (i, q) in questions.iter().enumerate() {
            if q.options.len() < 2 {
                return Err(AppError::Validation(format!(
                    "Question {} needs at least two options",
                    i + 1
                )));
            }
            if q.answer >= q.options.len() {
                return Err(AppError::Validation(format!(
                    "Question {} answer index out of range",
                    i + 1
                )));
            }
        }
        if pass_score as usize > questions.len() {
            return Err(AppError::Validation(
                "Pass score cannot exceed the question count".to_string(),
            ));
        }
        Ok(())
    }

    fn to_response(quiz: Quiz, include_answers: bool) -> AppResult<QuizResponse> {
        let questions = quiz.parse_questions()?;
        let question_count = questions.len();

        let questions_json = if include_answers {
            quiz.questions.clone()
        } else {
            let public: Vec<PublicQuestion> =
                questions.into_iter().map(PublicQuestion::from).collect();
            serde_json::to_value(public)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialize questions: {}", e)))?
        };

        Ok(QuizResponse {
            id: quiz.id,
            title: quiz.title,
            category: quiz.category,
            difficulty: quiz.difficulty,
            questions: questions_json,
            question_count,
            pass_score: quiz.pass_score,
            coin_reward: quiz.coin_reward,
            xp_reward: quiz.xp_reward,
            author_id: quiz.author_id,
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
        })
    }

    /// Create a quiz
    pub async fn create_quiz(
        pool: &PgPool,
        author_id: &Uuid,
        payload: CreateQuizRequest,
    ) -> AppResult<QuizResponse> {
        Self::validate_questions(&payload.questions, payload.pass_score)?;

        let questions = serde_json::to_value(&payload.questions)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialize questions: {}", e)))?;

        let quiz = QuizRepository::create(
            pool,
            &payload.title,
            &payload.category,
            &payload.difficulty,
            &questions,
            payload.pass_score,
            payload.coin_reward.unwrap_or(0),
            payload.xp_reward.unwrap_or(0),
            author_id,
        )
        .await?;

        Self::to_response(quiz, true)
    }

    /// Get a quiz; answers visible only to the author or an admin
    pub async fn get_quiz(
        pool: &PgPool,
        id: &Uuid,
        viewer_id: Option<&Uuid>,
        viewer_role: Option<&str>,
    ) -> AppResult<QuizResponse> {
        let quiz = QuizRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let include_answers = viewer_id == Some(&quiz.author_id)
            || viewer_role == Some(roles::ADMIN);

        Self::to_response(quiz, include_answers)
    }

    /// List quizzes (summaries, no question bodies)
    pub async fn list_quizzes(
        pool: &PgPool,
        page: u32,
        per_page: u32,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<(Vec<QuizSummaryResponse>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        let (quizzes, total) =
            QuizRepository::list(pool, offset, limit, category, difficulty).await?;

        Ok((
            quizzes.iter().map(QuizSummaryResponse::from).collect(),
            total,
        ))
    }

    /// Update a quiz; only the author or an admin may
    pub async fn update_quiz(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
        payload: UpdateQuizRequest,
    ) -> AppResult<QuizResponse> {
        let quiz = QuizRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if quiz.author_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot update other users' quizzes".to_string(),
            ));
        }

        let pass_score = payload.pass_score.unwrap_or(quiz.pass_score);
        let questions_json = match &payload.questions {
            Some(questions) => {
                Self::validate_questions(questions, pass_score)?;
                Some(
                    serde_json::to_value(questions).map_err(|e| {
                        AppError::Internal(anyhow::anyhow!("Serialize questions: {}", e))
                    })?,
                )
            }
            None => {
                Self::validate_questions(&quiz.parse_questions()?, pass_score)?;
                None
            }
        };

        let updated = QuizRepository::update(
            pool,
            id,
            payload.title.as_deref(),
            payload.category.as_deref(),
            payload.difficulty.as_deref(),
            questions_json.as_ref(),
            payload.pass_score,
            payload.coin_reward,
            payload.xp_reward,
        )
        .await?;

        Self::to_response(updated, true)
    }

    /// Delete a quiz; only the author or an admin may
    pub async fn delete_quiz(
        pool: &PgPool,
        id: &Uuid,
        requester_id: &Uuid,
        requester_role: &str,
    ) -> AppResult<()> {
        let quiz = QuizRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if quiz.author_id != *requester_id && requester_role != roles::ADMIN {
            return Err(AppError::Forbidden(
                "Cannot delete other users' quizzes".to_string(),
            ));
        }

        QuizRepository::delete(pool, id).await
    }

    /// Grade a submission. Passing awards coins and XP once per user;
    /// later submissions re-grade but never re-award.
    pub async fn submit(
        pool: &PgPool,
        quiz_id: &Uuid,
        user_id: &Uuid,
        answers: &[usize],
    ) -> AppResult<SubmissionResponse> {
        let quiz = QuizRepository::find_by_id(pool, quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        if quiz.author_id == *user_id {
            return Err(AppError::Validation("Cannot take your own quiz".to_string()));
        }

        let (score, total) = quiz.grade(answers)?;
        let passed = quiz.is_passing(score);

        let already_rewarded = QuizRepository::has_been_rewarded(pool, quiz_id, user_id).await?;
        let reward = if passed && !already_rewarded {
            Some((quiz.coin_reward, quiz.xp_reward))
        } else {
            None
        };

        let attempt =
            QuizRepository::record_attempt(pool, quiz_id, user_id, score, total, passed, reward)
                .await?;

        // The attempt row is authoritative: a concurrent submission may
        // have claimed the one-time reward first, downgrading this one.
        let (coins_earned, xp_earned) = Self::reward_earned(&quiz, attempt.rewarded);
        Ok(SubmissionResponse {
            score: attempt.score,
            total: attempt.total,
            passed: attempt.passed,
            rewarded: attempt.rewarded,
            coins_earned,
            xp_earned,
        })
    }

    /// List the caller's attempts on a quiz
    pub async fn list_attempts(
        pool: &PgPool,
        quiz_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<AttemptResponse>> {
        QuizRepository::find_by_id(pool, quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

        let attempts = QuizRepository::list_attempts(pool, quiz_id, user_id)
            .await?
            .into_iter()
            .map(AttemptResponse::from)
            .collect();

        Ok(attempts)
    }

    /// Coins and XP actually earned, based on whether the stored attempt
    /// carries the one-time reward
    fn reward_earned(quiz: &Quiz, rewarded: bool) -> (i32, i32) {
        if rewarded {
            (quiz.coin_reward, quiz.xp_reward)
        } else {
            (0, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz {
            id: Uuid::new_v4(),
            title: "Ownership".to_string(),
            category: "programming".to_string(),
            difficulty: "medium".to_string(),
            questions: serde_json::json!([
                {"prompt": "Borrow?", "options": ["&", "*"], "answer": 0},
                {"prompt": "Move?", "options": ["copy", "transfer"], "answer": 1},
            ]),
            pass_score: 2,
            coin_reward: 15,
            xp_reward: 40,
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_reward_earned_follows_attempt_flag() {
        let quiz = sample_quiz();

        assert_eq!(QuizService::reward_earned(&quiz, true), (15, 40));

        // A passing attempt whose reward was claimed by an earlier or
        // concurrent submission pays out nothing
        assert_eq!(QuizService::reward_earned(&quiz, false), (0, 0));
    }

    #[test]
    fn test_validate_questions_rejects_bad_answer_index() {
        let questions = vec![QuizQuestion {
            prompt: "Pick one".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            answer: 2,
        }];

        assert!(QuizService::validate_questions(&questions, 1).is_err());
    }
}
