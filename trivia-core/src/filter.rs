//! Category-scoped question filtering

use crate::error::{Result, TriviaError};
use crate::model::{Category, CategoryId, Question};

/// Category id clients send to mean "every category"
pub const ALL_CATEGORIES: CategoryId = 0;

/// Which categories a listing or quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    /// No restriction
    All,
    /// Only questions in this category
    Category(CategoryId),
}

impl CategorySelector {
    /// Interpret a raw category id; [`ALL_CATEGORIES`] selects everything.
    pub fn from_id(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(id)
        }
    }

    /// Check that a specific category exists among `known`.
    ///
    /// `All` always passes. An unknown id is `NotFound` instead of quietly
    /// selecting nothing.
    pub fn validate(self, known: &[Category]) -> Result<Self> {
        match self {
            Self::All => Ok(self),
            Self::Category(id) if known.iter().any(|c| c.id == id) => Ok(self),
            Self::Category(id) => Err(TriviaError::not_found("category", id)),
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(id) => question.category == *id,
        }
    }
}

/// Keep the questions the selector matches, in their original order.
pub fn filter_by_category(items: &[Question], selector: CategorySelector) -> Vec<&Question> {
    items.iter().filter(|q| selector.matches(q)).collect()
}
