//! Quiz question selection
//!
//! Each draw is a pure function of the candidate pool, the caller's history
//! and an explicit random source. Nothing is remembered between calls; the
//! client resends the full history with every request.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::filter::{filter_by_category, CategorySelector};
use crate::model::{Question, QuestionId};

/// Outcome of one quiz draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizSelection<'a> {
    /// A question the player has not seen yet
    Found(&'a Question),
    /// Every candidate is already in the history; the game is over
    Exhausted,
}

impl<'a> QuizSelection<'a> {
    pub fn found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn question(&self) -> Option<&'a Question> {
        match *self {
            Self::Found(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Draw one question from `pool` that is not in `previous`.
///
/// Duplicate history entries are harmless; membership is all that counts.
/// Survivors are drawn with equal probability.
pub fn select_quiz_question<'a, I, R>(
    pool: I,
    previous: &[QuestionId],
    rng: &mut R,
) -> QuizSelection<'a>
where
    I: IntoIterator<Item = &'a Question>,
    R: Rng + ?Sized,
{
    let seen: HashSet<QuestionId> = previous.iter().copied().collect();
    let survivors: Vec<&'a Question> = pool.into_iter().filter(|q| !seen.contains(&q.id)).collect();

    tracing::debug!(
        survivors = survivors.len(),
        history = seen.len(),
        "quiz candidates after exclusion"
    );

    match survivors.choose(rng) {
        Some(&question) => QuizSelection::Found(question),
        None => QuizSelection::Exhausted,
    }
}

/// Scope `questions` to `selector`, then draw as [`select_quiz_question`].
pub fn draw_for_category<'a, R>(
    questions: &'a [Question],
    selector: CategorySelector,
    previous: &[QuestionId],
    rng: &mut R,
) -> QuizSelection<'a>
where
    R: Rng + ?Sized,
{
    select_quiz_question(filter_by_category(questions, selector), previous, rng)
}
