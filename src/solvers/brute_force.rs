//! Brute-force recursive solver.
//!
//! Direct transcription of the LCS recurrence over prefix lengths, with no
//! memoization. It is exponential in the worst case and exists as the
//! obviously-correct baseline the grid-based solvers are checked against.
//!
//! Recursion depth is at most `|X| + |Y|`, so very long inputs can exhaust
//! the call stack.

use crate::candidates::CandidateSet;
use crate::traits::{LcsSolver, Symbol};

#[derive(Clone, Debug)]
pub struct BruteForce<'a, T> {
    pub x: &'a [T],
    pub y: &'a [T],
}

impl<'a, T: Symbol> BruteForce<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// All maximal common subsequences of `X[..a]` and `Y[..b]`.
    pub fn solve_prefixes(&self, a: usize, b: usize) -> CandidateSet<T> {
        if a == 0 || b == 0 {
            return CandidateSet::empty_sequence();
        }
        let (i, j) = (a - 1, b - 1);

        if self.x[i] == self.y[j] {
            return self.solve_prefixes(i, j).into_extended(&self.x[i]);
        }

        let up = self.solve_prefixes(i, b);
        let left = self.solve_prefixes(a, j);
        CandidateSet::longest_of(up, left)
    }
}

impl<'a, T: Symbol> LcsSolver<T> for BruteForce<'a, T> {
    fn solve(&self) -> CandidateSet<T> {
        self.solve_prefixes(self.x.len(), self.y.len())
    }
}
