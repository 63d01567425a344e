//! Trivia records
//!
//! Questions and categories are owned by the store; the core only reads them.
//! `NewQuestion` validates user input at construction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TriviaError};

/// Store-assigned question identifier
pub type QuestionId = i64;

/// Store-assigned category identifier
pub type CategoryId = i64;

/// Lowest accepted difficulty score
pub const MIN_DIFFICULTY: i32 = 1;

/// Highest accepted difficulty score
pub const MAX_DIFFICULTY: i32 = 5;

/// A trivia question as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Validated payload for inserting a question.
///
/// Does not check that `category` exists; that is the store's constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    difficulty: i32,
    category: CategoryId,
}

impl NewQuestion {
    /// Create a new question payload.
    ///
    /// # Rules
    /// - Question and answer text are trimmed and must not be empty
    /// - Difficulty within `MIN_DIFFICULTY..=MAX_DIFFICULTY`
    /// - Category id must be positive
    ///
    /// # Example
    /// ```
    /// use trivia_core::NewQuestion;
    ///
    /// assert!(NewQuestion::new("Capital of Peru?", "Lima", 2, 3).is_ok());
    /// assert!(NewQuestion::new("  ", "Lima", 2, 3).is_err());
    /// assert!(NewQuestion::new("Capital of Peru?", "Lima", 9, 3).is_err());
    /// ```
    pub fn new(
        question: &str,
        answer: &str,
        difficulty: i32,
        category: CategoryId,
    ) -> Result<Self> {
        let question = question.trim();
        if question.is_empty() {
            return Err(TriviaError::invalid_input("question", "cannot be empty"));
        }

        let answer = answer.trim();
        if answer.is_empty() {
            return Err(TriviaError::invalid_input("answer", "cannot be empty"));
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(TriviaError::invalid_input(
                "difficulty",
                format!("must be between {} and {}", MIN_DIFFICULTY, MAX_DIFFICULTY),
            ));
        }

        if category <= 0 {
            return Err(TriviaError::invalid_input("category", "must be a positive id"));
        }

        Ok(Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
            difficulty,
            category,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn difficulty(&self) -> i32 {
        self.difficulty
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// Attach a store-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
