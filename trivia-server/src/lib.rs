//! trivia-server: HTTP API and question storage for the trivia service
//!
//! Handlers parse requests into typed values, fetch ordered records from a
//! [`TriviaStore`](db::TriviaStore), and hand them to `trivia-core` for
//! paging, category scoping and quiz draws.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStore, PgStore, StoreError, TriviaStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
