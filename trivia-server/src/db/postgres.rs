//! Postgres-backed store

use async_trait::async_trait;
use sqlx::PgPool;
use trivia_core::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::repos::{CategoryRepo, QuestionRepo};
use super::{StoreError, TriviaStore};

/// `TriviaStore` over a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn questions_in_category(&self, id: CategoryId) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).list_for_category(id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        QuestionRepo::new(&self.pool).create(question).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}
