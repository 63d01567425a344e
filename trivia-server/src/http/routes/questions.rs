//! Question endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use trivia_core::{CategoryId, Page, Question, QuestionId};

use super::category_map;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PageQuery, PathId};
use crate::http::server::AppState;
use crate::models::{QuestionsPostRequest, SearchRequest};

/// A page (or search result) of questions
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<CategoryId, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
}

impl QuestionListResponse {
    pub fn from_page(page: Page<'_, Question>, current_category: Option<String>) -> Self {
        Self {
            success: true,
            questions: page.items.to_vec(),
            total_questions: page.total,
            current_category,
            categories: None,
            page: Some(page.page),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// GET /questions - all questions, newest first, paginated
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageQuery(page): PageQuery,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let questions = state.store.questions().await?;
    let categories = state.store.categories().await?;

    let page = Page::new(&questions, page, state.page_size).require_items()?;
    tracing::debug!(page = page.page, total = page.total, "listing questions");

    let mut response = QuestionListResponse::from_page(page, None);
    response.categories = Some(category_map(&categories));
    Ok(Json(response))
}

/// POST /questions - create a question, or search when a term is sent
async fn create_or_search(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuestionsPostRequest>,
) -> Result<Response, ApiError> {
    if let Some(search) = req.as_search() {
        return Ok(search_with(&state, &search).await?.into_response());
    }

    let new = req.to_new_question()?;
    let question = state.store.insert_question(new).await?;
    tracing::info!(id = question.id, category = question.category, "question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    })
    .into_response())
}

/// POST /questions/search - substring search on question text
async fn search_questions(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    search_with(&state, &req).await
}

async fn search_with(
    state: &AppState,
    req: &SearchRequest,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let term = req.term()?;
    let questions = state.store.search_questions(term).await?;
    tracing::debug!(term, matches = questions.len(), "searched questions");

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
        categories: None,
        page: None,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    PathId(id): PathId,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !state.store.delete_question(id).await? {
        return Err(ApiError::NotFound {
            resource: "question",
            id: id.to_string(),
        });
    }

    tracing::info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
