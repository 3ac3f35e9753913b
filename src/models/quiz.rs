//! Quiz model and grading

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Quiz database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    /// Question list stored as JSON, see [`QuizQuestion`]
    pub questions: serde_json::Value,
    /// Minimum number of correct answers to pass
    pub pass_score: i32,
    pub coin_reward: i32,
    pub xp_reward: i32,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single multiple-choice question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer
    pub answer: usize,
}

/// A stored quiz attempt
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub user_id: Uuid,
    pub score: i32,
    pub total: i32,
    pub passed: bool,
    /// Whether coins/XP were granted for this attempt
    pub rewarded: bool,
    pub submitted_at: DateTime<Utc>,
}

impl Quiz {
    /// Parse the stored question JSON
    pub fn parse_questions(&self) -> AppResult<Vec<QuizQuestion>> {
        serde_json::from_value(self.questions.clone())
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt quiz questions: {}", e)))
    }

    /// Grade an answer vector against the stored questions.
    ///
    /// Returns `(score, total)`. The answer vector length must match the
    /// question count; out-of-range option indexes count as wrong.
    pub fn grade(&self, answers: &[usize]) -> AppResult<(i32, i32)> {
        let questions = self.parse_questions()?;

        if answers.len() != questions.len() {
            return Err(AppError::InvalidInput(format!(
                "Expected {} answers, got {}",
                questions.len(),
                answers.len()
            )));
        }

        let score = questions
            .iter()
            .zip(answers)
            .filter(|(q, a)| q.answer == **a)
            .count() as i32;

        Ok((score, questions.len() as i32))
    }

    /// Whether a score passes this quiz
    pub fn is_passing(&self, score: i32) -> bool {
        score >= self.pass_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_with_questions() -> Quiz {
        Quiz {
            id: Uuid::new_v4(),
            title: "Rust basics".to_string(),
            category: "programming".to_string(),
            difficulty: "easy".to_string(),
            questions: serde_json::json!([
                {"prompt": "1+1?", "options": ["1", "2"], "answer": 1},
                {"prompt": "2+2?", "options": ["4", "5"], "answer": 0},
                {"prompt": "3+3?", "options": ["6", "7"], "answer": 0},
            ]),
            pass_score: 2,
            coin_reward: 10,
            xp_reward: 25,
            author_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_grading_counts_correct_answers() {
        let quiz = quiz_with_questions();
        let (score, total) = quiz.grade(&[1, 0, 1]).unwrap();
        assert_eq!(score, 2);
        assert_eq!(total, 3);
        assert!(quiz.is_passing(score));
    }

    #[test]
    fn test_grading_rejects_wrong_answer_count() {
        let quiz = quiz_with_questions();
        assert!(quiz.grade(&[1, 0]).is_err());
    }

    #[test]
    fn test_out_of_range_answer_is_wrong() {
        let quiz = quiz_with_questions();
        let (score, _) = quiz.grade(&[9, 9, 9]).unwrap();
        assert_eq!(score, 0);
        assert!(!quiz.is_passing(score));
    }
}
