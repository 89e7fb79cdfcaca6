//! Edit-distance ranking of candidate titles against a query.
//!
//! # Responsibility
//! - Score every candidate title against a case-folded query.
//! - Order candidates by ascending distance.
//!
//! # Invariants
//! - Ties keep input order (stable sort).
//! - Output depends only on inputs; repeated calls return identical results.
//! - An empty query scores each candidate with its own title length.

use crate::model::task::Task;
use crate::search::distance::{case_fold, edit_distance_chars};

/// Anything carrying a searchable title.
pub trait Titled {
    fn title(&self) -> &str;
}

impl Titled for Task {
    fn title(&self) -> &str {
        &self.title
    }
}

/// `(id, title)` pairs, as handed over by lightweight callers.
impl<K, S: AsRef<str>> Titled for (K, S) {
    fn title(&self) -> &str {
        self.1.as_ref()
    }
}

/// One ranked candidate.
#[derive(Debug, PartialEq, Eq)]
pub struct RankedMatch<'a, T> {
    pub item: &'a T,
    /// Levenshtein distance between folded query and folded title.
    pub distance: usize,
}

impl<T> Clone for RankedMatch<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RankedMatch<'_, T> {}

/// Ranks `candidates` against `query`, most similar first.
///
/// Returns an empty list when `candidates` is empty. No candidate is ever
/// dropped here; thresholds and limits belong to callers such as
/// [`crate::service::search_service::search_tasks`].
pub fn rank<'a, T: Titled>(query: &str, candidates: &'a [T]) -> Vec<RankedMatch<'a, T>> {
    rank_folded(query, candidates, case_fold)
}

/// Same as [`rank`], with `fold` applied to the query and every title.
pub(crate) fn rank_folded<'a, T, F>(
    query: &str,
    candidates: &'a [T],
    fold: F,
) -> Vec<RankedMatch<'a, T>>
where
    T: Titled,
    F: Fn(&str) -> String,
{
    let folded_query: Vec<char> = fold(query).chars().collect();

    let mut ranked = candidates
        .iter()
        .map(|item| {
            let folded_title: Vec<char> = fold(item.title()).chars().collect();
            RankedMatch {
                item,
                distance: edit_distance_chars(&folded_query, &folded_title),
            }
        })
        .collect::<Vec<_>>();

    // `sort_by_key` is stable: equal distances keep candidate order.
    ranked.sort_by_key(|hit| hit.distance);
    ranked
}
