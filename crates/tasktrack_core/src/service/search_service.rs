//! Task search use-case.
//!
//! # Responsibility
//! - Normalize raw query text from the search box.
//! - Rank a user's tasks and apply distance threshold and limit.
//!
//! # Invariants
//! - Blank queries return no hits.
//! - Whitespace runs count as one space in both query and titles, so a
//!   title typed back exactly always scores 0.
//! - Filtering never reorders hits; ordering comes from the ranker.

use crate::config::SearchConfig;
use crate::search::distance::case_fold;
use crate::search::rank::{rank_folded, RankedMatch, Titled};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Instant;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Trims and collapses inner whitespace; returns `None` for blank input.
pub fn normalize_query(raw: &str) -> Option<String> {
    let collapsed = WHITESPACE_RE.replace_all(raw.trim(), " ");
    if collapsed.is_empty() {
        return None;
    }
    Some(collapsed.into_owned())
}

fn fold_for_search(text: &str) -> String {
    WHITESPACE_RE
        .replace_all(case_fold(text).trim(), " ")
        .into_owned()
}

/// Searches `tasks` by title similarity to `query`.
///
/// Hits farther than `config.max_distance` are dropped, then at most
/// `config.limit` hits are kept.
pub fn search_tasks<'a, T: Titled>(
    tasks: &'a [T],
    query: &str,
    config: &SearchConfig,
) -> Vec<RankedMatch<'a, T>> {
    let Some(query) = normalize_query(query) else {
        debug!("event=search_rank module=service status=skipped reason=blank_query");
        return Vec::new();
    };

    let started_at = Instant::now();
    let mut hits = rank_folded(&query, tasks, fold_for_search);
    if let Some(max_distance) = config.max_distance {
        hits.retain(|hit| hit.distance <= max_distance);
    }
    if let Some(limit) = config.limit {
        hits.truncate(limit);
    }

    debug!(
        "event=search_rank module=service status=ok candidates={} hits={} duration_us={}",
        tasks.len(),
        hits.len(),
        started_at.elapsed().as_micros()
    );
    hits
}
