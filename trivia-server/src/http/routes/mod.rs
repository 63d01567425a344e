//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use std::collections::BTreeMap;

use trivia_core::{Category, CategoryId};

/// `{id: type}` map clients use to label questions
pub(crate) fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}
