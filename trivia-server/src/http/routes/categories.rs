//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{Category, CategoryId, Page};

use super::category_map;
use super::questions::QuestionListResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, PathId};
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    pub category: Category,
}

/// GET /categories - `{id: type}` for every category
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound {
            resource: "categories",
            id: "all".into(),
        });
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}
async fn get_category(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<CategoryResponse>, ApiError> {
    let category = find_category(&state, id).await?;
    Ok(Json(CategoryResponse {
        success: true,
        category,
    }))
}

/// GET /categories/{id}/questions - one category's questions, paginated.
///
/// An empty category answers with an empty first page; paging past the end
/// of a non-empty one is 404.
async fn category_questions(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let category = find_category(&state, id).await?;
    let questions = state.store.questions_in_category(category.id).await?;

    let page = Page::new(&questions, page, state.page_size);
    if page.past_end() || (page.is_empty() && page.page != 1) {
        return Err(ApiError::NotFound {
            resource: "page",
            id: page.page.to_string(),
        });
    }

    tracing::debug!(category = category.id, total = page.total, "listing category questions");
    Ok(Json(QuestionListResponse::from_page(page, Some(category.kind))))
}

async fn find_category(state: &AppState, id: CategoryId) -> Result<Category, ApiError> {
    state.store.category(id).await?.ok_or_else(|| ApiError::NotFound {
        resource: "category",
        id: id.to_string(),
    })
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}", get(get_category))
        .route("/categories/{id}/questions", get(category_questions))
}
