//! Length-only helpers.
//!
//! These never build candidate sets, so they stay cheap on inputs where
//! reconstructing every LCS would blow up. Callers that only need one
//! number should use them instead of a solver.

/// LCS length of `x` and `y` via the two-row form of the classic recurrence.
///
/// O(|x|·|y|) time, O(|y|) space.
pub fn lcs_length<T: PartialEq>(x: &[T], y: &[T]) -> usize {
    let m = y.len();
    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];

    for cx in x {
        for j in 1..=m {
            curr[j] = if *cx == y[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Whether `needle` can be obtained from `haystack` by deleting elements.
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|n| rest.any(|h| h == n))
}
