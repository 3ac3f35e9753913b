//! Quiz response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Quiz, QuizAttempt, QuizQuestion};

/// A question as shown to quiz takers (correct answer withheld)
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub prompt: String,
    pub options: Vec<String>,
}

impl From<QuizQuestion> for PublicQuestion {
    fn from(q: QuizQuestion) -> Self {
        Self {
            prompt: q.prompt,
            options: q.options,
        }
    }
}

/// Quiz response; `questions` carries answers only for the author
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub questions: serde_json::Value,
    pub question_count: usize,
    pub pass_score: i32,
    pub coin_reward: i32,
    pub xp_reward: i32,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Quiz list entry without question bodies
#[derive(Debug, Serialize)]
pub struct QuizSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub question_count: usize,
    pub pass_score: i32,
    pub coin_reward: i32,
    pub xp_reward: i32,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&Quiz> for QuizSummaryResponse {
    fn from(quiz: &Quiz) -> Self {
        let question_count = quiz
            .questions
            .as_array()
            .map(|a| a.len())
            .unwrap_or_default();
        Self {
            id: quiz.id,
            title: quiz.title.clone(),
            category: quiz.category.clone(),
            difficulty: quiz.difficulty.clone(),
            question_count,
            pass_score: quiz.pass_score,
            coin_reward: quiz.coin_reward,
            xp_reward: quiz.xp_reward,
            author_id: quiz.author_id,
            created_at: quiz.created_at,
        }
    }
}

/// Paginated quiz list response
#[derive(Debug, Serialize)]
pub struct QuizzesListResponse {
    pub quizzes: Vec<QuizSummaryResponse>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Grading outcome for a submission
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub score: i32,
    pub total: i32,
    pub passed: bool,
    pub rewarded: bool,
    pub coins_earned: i32,
    pub xp_earned: i32,
}

/// A past attempt
#[derive(Debug, Serialize)]
pub struct AttemptResponse {
    pub id: Uuid,
    pub score: i32,
    pub total: i32,
    pub passed: bool,
    pub rewarded: bool,
    pub submitted_at: DateTime<Utc>,
}

impl From<QuizAttempt> for AttemptResponse {
    fn from(attempt: QuizAttempt) -> Self {
        Self {
            id: attempt.id,
            score: attempt.score,
            total: attempt.total,
            passed: attempt.passed,
            rewarded: attempt.rewarded,
            submitted_at: attempt.submitted_at,
        }
    }
}

/// Attempt list response
#[derive(Debug, Serialize)]
pub struct AttemptsListResponse {
    pub attempts: Vec<AttemptResponse>,
}
