//! Question repository
//!
//! Reads return whole ordered result sets; paging happens in trivia-core.

use sqlx::{FromRow, PgPool};
use trivia_core::{CategoryId, NewQuestion, Question, QuestionId};

use super::db_id;
use crate::db::StoreError;

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    difficulty: i32,
    category: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: i64::from(row.id),
            question: row.question,
            answer: row.answer,
            category: i64::from(row.category),
            difficulty: row.difficulty,
        }
    }
}

/// Escape LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All questions, newest first.
    pub async fn list(&self) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, difficulty, category FROM questions ORDER BY id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    pub async fn list_for_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StoreError> {
        let Some(category) = db_id(category) else {
            return Ok(Vec::new());
        };

        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    /// Insert, relying on the foreign key to reject unknown categories.
    pub async fn create(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let category = db_id(new.category()).ok_or(StoreError::UnknownCategory(new.category()))?;

        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, difficulty, category
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.difficulty())
        .bind(category)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                StoreError::UnknownCategory(new.category())
            }
            other => StoreError::Sqlx(other),
        })?;

        Ok(Question::from(row))
    }

    pub async fn delete(&self, id: QuestionId) -> Result<bool, StoreError> {
        let Some(id) = db_id(id) else {
            return Ok(false);
        };

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
