//! trivia-core: the decision-making parts of the trivia service
//!
//! Page windows over ordered results, category scoping, and the quiz draw.
//! Everything here works on already-fetched, in-memory data; storage and
//! HTTP live in `trivia-server`.

pub mod error;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod quiz;

pub use error::{Result, TriviaError};
pub use filter::{filter_by_category, CategorySelector, ALL_CATEGORIES};
pub use model::{Category, CategoryId, NewQuestion, Question, QuestionId};
pub use pagination::{page_count, paginate, parse_page, Page, QUESTIONS_PER_PAGE};
pub use quiz::{draw_for_category, select_quiz_question, QuizSelection};
