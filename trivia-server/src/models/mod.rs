//! Request payloads
//!
//! Bodies are parsed leniently (ids may arrive as numbers or numeric
//! strings) and turned into validated trivia-core values here, so handlers
//! only see typed input.

pub mod id;
pub mod requests;

pub use id::NumericId;
pub use requests::{QuestionsPostRequest, QuizCategoryPayload, QuizRequest, SearchRequest};
