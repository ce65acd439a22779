//! Full dynamic-programming solver.
//!
//! Every cell of the scoring grid stores the complete candidate set for its
//! subproblem, so the answer sits in the bottom-right cell once the fill is
//! done. The fill evaluates O(n·m) cells, but a single cell may hold
//! exponentially many candidates when ties pile up; memory is not
//! polynomially bounded in general.

use crate::candidates::CandidateSet;
use crate::grid::Grid;
use crate::traits::{LcsSolver, Symbol};

#[derive(Clone, Debug)]
pub struct FullDp<'a, T> {
    pub x: &'a [T],
    pub y: &'a [T],
}

impl<'a, T: Symbol> FullDp<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self { x, y }
    }

    /// Fill the candidate grid bottom-up, row by row.
    ///
    /// Cell `(i, j)` holds the candidates for `Y[..i]` against `X[..j]`.
    pub fn fill_grid(&self) -> Grid<CandidateSet<T>> {
        let n = self.x.len();
        let m = self.y.len();
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("full_dp_fill", n, m).entered();

        let mut grid = Grid::for_prefixes(n, m, CandidateSet::empty_sequence());
        for i in 1..=m {
            for j in 1..=n {
                let cell = if self.x[j - 1] == self.y[i - 1] {
                    grid[(i - 1, j - 1)].extended(&self.x[j - 1])
                } else {
                    CandidateSet::longest_of_ref(&grid[(i - 1, j)], &grid[(i, j - 1)])
                };
                grid[(i, j)] = cell;
            }
        }
        grid
    }
}

impl<'a, T: Symbol> LcsSolver<T> for FullDp<'a, T> {
    fn solve(&self) -> CandidateSet<T> {
        self.fill_grid().into_last()
    }
}
