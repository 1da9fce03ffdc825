use std::collections::HashSet;

use crate::db::Question;

/// Picks the next quiz question: the first candidate, in the given order,
/// that belongs to `category` and has not been asked yet.
pub fn next_question<'a>(
    candidates: &'a [Question],
    previous: &HashSet<i64>,
    category: i64,
) -> Option<&'a Question> {
    candidates
        .iter()
        .find(|q| q.category == category && !previous.contains(&q.id))
}
