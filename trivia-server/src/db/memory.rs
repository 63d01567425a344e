//! In-process store for tests and `serve --in-memory`

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::{sample, StoreError, TriviaStore};

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_question_id: QuestionId,
}

/// `TriviaStore` kept in memory behind a `RwLock`.
///
/// Mirrors the Postgres schema rules: question ids are never reused and
/// inserts must reference an existing category.
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty store with no categories.
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new())
    }

    /// The stock categories and sample questions.
    pub fn with_sample_data() -> Self {
        Self::from_records(sample::categories(), sample::questions())
    }

    pub fn from_records(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            next_question_id,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.tables.read().await.questions.values().rev().cloned().collect())
    }

    async fn questions_in_category(&self, id: CategoryId) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&question.category()) {
            return Err(StoreError::UnknownCategory(question.category()));
        }

        let id = tables.next_question_id;
        tables.next_question_id += 1;
        let question = question.into_question(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}
