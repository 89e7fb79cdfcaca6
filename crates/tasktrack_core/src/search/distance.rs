//! Levenshtein edit distance over Unicode scalar values.
//!
//! # Invariants
//! - Distance is symmetric and zero only for equal inputs.
//! - Lengths are counted in `char`s, so multi-byte titles cost one edit per
//!   visible character.

/// Returns the minimum number of single-character insertions, deletions or
/// substitutions turning `a` into `b`.
///
/// Comparison is exact; callers wanting case-insensitive matching fold both
/// sides first (see [`case_fold`]).
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance_chars(&a, &b)
}

/// Case-folds text for matching.
pub fn case_fold(value: &str) -> String {
    value.to_lowercase()
}

/// Edit distance over pre-split character slices.
///
/// `d[i][j]` is the cost of turning `a[..i]` into `b[..j]`, with
/// `d[i][0] = i`, `d[0][j] = j` and
/// `d[i][j] = d[i-1][j-1]` on a match, else
/// `1 + min(d[i-1][j], d[i][j-1], d[i-1][j-1])`.
/// Only the previous row is needed to fill the next one, so two rows of
/// `b.len() + 1` cells are kept instead of the full table.
pub(crate) fn edit_distance_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
