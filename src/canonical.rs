//! Canonical form of a result set: distinct members in ascending order.
//!
//! Solvers hand back raw candidate sets that may repeat a subsequence many
//! times (every tie reached along two paths contributes a copy). The
//! canonicalizer collects them through an ordered set, so duplicates are
//! removed whether or not they end up adjacent.

use std::collections::BTreeSet;

use crate::candidates::CandidateSet;
use crate::traits::Symbol;

/// Distinct members of `set`, sorted lexicographically ascending.
///
/// `{ [] }` becomes `[ [] ]`; the result is never empty for solver output.
pub fn canonicalize<T: Symbol>(set: CandidateSet<T>) -> Vec<Vec<T>> {
    set.into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Render canonical character sequences as strings.
///
/// String order is code-point order, which matches the order of the
/// underlying `char` sequences, so the output stays sorted.
pub fn render_strings(results: Vec<Vec<char>>) -> Vec<String> {
    results
        .into_iter()
        .map(|s| s.into_iter().collect())
        .collect()
}
