//! Category repository

use sqlx::{FromRow, PgPool};
use trivia_core::{Category, CategoryId};

use super::db_id;
use crate::db::StoreError;

/// Category record from database
#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i32,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: i64::from(row.id),
            kind: row.kind,
        }
    }
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let rows: Vec<CategoryRow> = sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>, StoreError> {
        let Some(id) = db_id(id) else {
            return Ok(None);
        };

        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Category::from))
    }
}
