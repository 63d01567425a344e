//! Quiz endpoint
//!
//! Stateless: the client sends its full history with every draw.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use trivia_core::{draw_for_category, Question, QuizSelection};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::QuizRequest;

/// `success: false` with no question means the quiz is over
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// POST /quizzes - next unseen question, optionally within one category
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (selector, previous) = req.into_parts()?;

    let categories = state.store.categories().await?;
    let selector = selector.validate(&categories)?;
    let questions = state.store.questions().await?;

    let mut rng = StdRng::from_entropy();
    let response = match draw_for_category(&questions, selector, &previous, &mut rng) {
        QuizSelection::Found(question) => {
            tracing::debug!(id = question.id, ?selector, "quiz question drawn");
            QuizResponse {
                success: true,
                question: Some(question.clone()),
            }
        }
        QuizSelection::Exhausted => {
            tracing::debug!(?selector, asked = previous.len(), "quiz exhausted");
            QuizResponse {
                success: false,
                question: None,
            }
        }
    };

    Ok(Json(response))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
