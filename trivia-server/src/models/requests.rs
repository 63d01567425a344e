//! Request bodies for question and quiz endpoints

use serde::Deserialize;
use trivia_core::{CategorySelector, NewQuestion, QuestionId, Result, TriviaError};

use super::NumericId;

/// Body of `POST /questions/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, alias = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    /// The trimmed search term; blank or missing is invalid.
    pub fn term(&self) -> Result<&str> {
        match self.search_term.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => Ok(term),
            _ => Err(TriviaError::invalid_input("search_term", "cannot be empty")),
        }
    }
}

/// Body of `POST /questions`: either a new question or a search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(default, alias = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<NumericId>,
    #[serde(default)]
    pub category: Option<NumericId>,
}

impl QuestionsPostRequest {
    /// A search request when a search term was sent.
    pub fn as_search(&self) -> Option<SearchRequest> {
        self.search_term.as_ref().map(|term| SearchRequest {
            search_term: Some(term.clone()),
        })
    }

    /// Validate the create fields into a `NewQuestion`.
    pub fn to_new_question(&self) -> Result<NewQuestion> {
        let question = self
            .question
            .as_deref()
            .ok_or_else(|| TriviaError::invalid_input("question", "is required"))?;
        let answer = self
            .answer
            .as_deref()
            .ok_or_else(|| TriviaError::invalid_input("answer", "is required"))?;
        let difficulty = required_number(self.difficulty.as_ref(), "difficulty")?;
        let category = required_number(self.category.as_ref(), "category")?;

        let difficulty = i32::try_from(difficulty)
            .map_err(|_| TriviaError::invalid_input("difficulty", "out of range"))?;

        NewQuestion::new(question, answer, difficulty, category)
    }
}

/// `quiz_category` object; the `type` label is ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryPayload {
    #[serde(default)]
    pub id: Option<NumericId>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<NumericId>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryPayload>,
}

impl QuizRequest {
    /// Split into the category selector and the history ids.
    ///
    /// Both fields are required; an empty history is fine.
    pub fn into_parts(self) -> Result<(CategorySelector, Vec<QuestionId>)> {
        let previous = self
            .previous_questions
            .ok_or_else(|| TriviaError::invalid_input("previous_questions", "is required"))?;
        let category = self
            .quiz_category
            .ok_or_else(|| TriviaError::invalid_input("quiz_category", "is required"))?;
        let category_id = required_number(category.id.as_ref(), "quiz_category.id")?;

        let previous = previous
            .iter()
            .map(|id| {
                id.value().ok_or_else(|| {
                    TriviaError::invalid_input("previous_questions", "ids must be integers")
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((CategorySelector::from_id(category_id), previous))
    }
}

fn required_number(value: Option<&NumericId>, field: &'static str) -> Result<i64> {
    value
        .ok_or_else(|| TriviaError::invalid_input(field, "is required"))?
        .value()
        .ok_or_else(|| TriviaError::invalid_input(field, "must be an integer"))
}
