//! Database layer - store trait, Postgres and in-memory backends
//!
//! - Connection pool (max 5 connections by default)
//! - Referential integrity from the schema, not check-then-insert
//! - Read queries return full ordered sets; paging is done by trivia-core

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod repos;
pub mod sample;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;
pub use store::{StoreError, TriviaStore};
