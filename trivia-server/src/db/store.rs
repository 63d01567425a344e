//! Storage seam between the HTTP layer and the database
//!
//! Handlers only see `dyn TriviaStore`. `PgStore` backs it with Postgres,
//! `MemoryStore` with a locked in-process table set.

use async_trait::async_trait;
use trivia_core::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Insert referenced a category that does not exist
    #[error("unknown category '{0}'")]
    UnknownCategory(CategoryId),
}

/// Question and category storage.
///
/// Each call is atomic on its own; nothing spans calls.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// A single category, if it exists.
    async fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError>;

    /// All questions, newest (highest id) first.
    async fn questions(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions in one category, ordered by id.
    async fn questions_in_category(&self, id: CategoryId) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Insert a question and return it with its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// Delete a question. Returns false if no such question existed.
    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError>;
}
