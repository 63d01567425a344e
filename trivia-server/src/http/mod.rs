//! HTTP layer: axum router, extractors and JSON error bodies
//!
//! Routes are grouped per resource (`categories`, `questions`, `quizzes`,
//! `health`) and share an `Arc<AppState>` holding the store.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
