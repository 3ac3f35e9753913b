//! Quiz request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_TITLE_LENGTH;
use crate::models::QuizQuestion;

/// Create quiz request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub category: String,

    /// Difficulty: easy, medium, hard
    pub difficulty: String,

    #[validate(length(min = 1, max = 50))]
    pub questions: Vec<QuizQuestion>,

    #[validate(range(min = 1))]
    pub pass_score: i32,

    #[validate(range(min = 0))]
    pub coin_reward: Option<i32>,

    #[validate(range(min = 0))]
    pub xp_reward: Option<i32>,
}

/// Update quiz request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub category: Option<String>,

    pub difficulty: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub questions: Option<Vec<QuizQuestion>>,

    #[validate(range(min = 1))]
    pub pass_score: Option<i32>,

    #[validate(range(min = 0))]
    pub coin_reward: Option<i32>,

    #[validate(range(min = 0))]
    pub xp_reward: Option<i32>,
}

/// Submit answers request
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    /// One chosen option index per question, in order
    pub answers: Vec<usize>,
}

/// List quizzes query parameters
#[derive(Debug, Deserialize)]
pub struct ListQuizzesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}
