//! Length grid plus traceback reconstruction.
//!
//! Phase 1 fills an integer grid with the classic recurrence; cells hold
//! scores only, which keeps memory at O(n·m) integers. Phase 2 walks back
//! from the bottom-right cell and rebuilds every optimal subsequence using
//! nothing but those scores.
//!
//! Grid orientation matches [`Grid`]: row `b` is the prefix `Y[..b]`, column
//! `a` the prefix `X[..a]`. During traceback over `(a, b)`:
//! - dropping the last symbol of X reads `grid[(b, a - 1)]`,
//! - dropping the last symbol of Y reads `grid[(b - 1, a)]`.
//!
//! The scores are a merit, not necessarily a length: with a
//! [`SymbolWeight`] other than [`UnitWeight`] the same two phases return
//! every common subsequence of maximal total weight.

use crate::candidates::{keep_sides, CandidateSet};
use crate::grid::Grid;
use crate::traits::{LcsSolver, Symbol, SymbolWeight, UnitWeight};

#[derive(Clone, Debug)]
pub struct Traceback<'a, T, W = UnitWeight> {
    pub x: &'a [T],
    pub y: &'a [T],
    weight: W,
}

impl<'a, T: Symbol> Traceback<'a, T> {
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self {
            x,
            y,
            weight: UnitWeight,
        }
    }
}

impl<'a, T: Symbol, W: SymbolWeight<T>> Traceback<'a, T, W> {
    /// Traceback scoring each matched symbol with `weight` instead of 1.
    pub fn with_weight(x: &'a [T], y: &'a [T], weight: W) -> Self {
        Self { x, y, weight }
    }

    /// Phase 1: bottom-up score grid.
    ///
    /// `grid[(i, j)]` is the best score for `Y[..i]` against `X[..j]`; with
    /// unit weights that is the LCS length of the two prefixes.
    pub fn score_grid(&self) -> Grid<u64> {
        let n = self.x.len();
        let m = self.y.len();
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("traceback_scores", n, m).entered();

        let mut grid = Grid::for_prefixes(n, m, 0u64);
        for i in 1..=m {
            for j in 1..=n {
                grid[(i, j)] = if self.x[j - 1] == self.y[i - 1] {
                    let w = self.weight.weight(&self.x[j - 1]);
                    grid[(i - 1, j - 1)] + u64::from(w.get())
                } else {
                    grid[(i - 1, j)].max(grid[(i, j - 1)])
                };
            }
        }
        grid
    }

    /// Phase 2: every optimal subsequence of `X[..a]` and `Y[..b]`, read off
    /// a grid produced by [`score_grid`](Self::score_grid).
    pub fn traceback(&self, grid: &Grid<u64>, a: usize, b: usize) -> CandidateSet<T> {
        if a == 0 || b == 0 {
            return CandidateSet::empty_sequence();
        }
        let (i, j) = (a - 1, b - 1);

        if self.x[i] == self.y[j] {
            return self.traceback(grid, i, j).into_extended(&self.x[i]);
        }

        let drop_x = grid[(b, i)];
        let drop_y = grid[(j, a)];
        match keep_sides(drop_x, drop_y) {
            (true, true) => self
                .traceback(grid, i, b)
                .union(self.traceback(grid, a, j)),
            (true, false) => self.traceback(grid, i, b),
            _ => self.traceback(grid, a, j),
        }
    }
}

impl<'a, T: Symbol, W: SymbolWeight<T>> LcsSolver<T> for Traceback<'a, T, W> {
    fn solve(&self) -> CandidateSet<T> {
        let grid = self.score_grid();
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("traceback_reconstruct", score = *grid.last()).entered();
        self.traceback(&grid, self.x.len(), self.y.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn weight(w: u32) -> NonZeroU32 {
        NonZeroU32::new(w).expect("non-zero weight")
    }

    fn render(set: CandidateSet<char>) -> Vec<String> {
        let mut out: Vec<String> = set.into_iter().map(|s| s.into_iter().collect()).collect();
        out.sort();
        out.dedup();
        out
    }

    #[test]
    fn score_grid_rows_follow_y() {
        // X = "AGCAT" (columns), Y = "GAC" (rows).
        let (x, y) = (chars("AGCAT"), chars("GAC"));
        let grid = Traceback::new(&x, &y).score_grid();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.row(0), &[0, 0, 0, 0, 0, 0]);
        assert_eq!(grid.row(1), &[0, 0, 1, 1, 1, 1]);
        assert_eq!(grid.row(2), &[0, 1, 1, 1, 2, 2]);
        assert_eq!(grid.row(3), &[0, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn traceback_reads_both_axes_correctly() {
        let (x, y) = (chars("AGCAT"), chars("GAC"));
        assert_eq!(render(Traceback::new(&x, &y).solve()), vec!["AC", "GA", "GC"]);
        // Swapping the inputs transposes the grid but not the answer.
        assert_eq!(render(Traceback::new(&y, &x).solve()), vec!["AC", "GA", "GC"]);
    }

    #[test]
    fn lopsided_inputs() {
        let (x, y) = (chars("XXXXXXXXAB"), chars("BA"));
        assert_eq!(render(Traceback::new(&x, &y).solve()), vec!["A", "B"]);
        assert_eq!(render(Traceback::new(&y, &x).solve()), vec!["A", "B"]);

        let (x, y) = (chars("A"), chars("QQQQAQQQ"));
        assert_eq!(render(Traceback::new(&x, &y).solve()), vec!["A"]);
    }

    #[test]
    fn partial_prefix_traceback() {
        let (x, y) = (chars("AGCAT"), chars("GAC"));
        let solver = Traceback::new(&x, &y);
        let grid = solver.score_grid();
        // X[..2] = "AG", Y[..2] = "GA".
        assert_eq!(render(solver.traceback(&grid, 2, 2)), vec!["A", "G"]);
    }

    #[test]
    fn weighted_scores_prefer_heavy_symbols() {
        // Unit weights: "AB" (length 2) beats "C".
        let (x, y) = (chars("ABC"), chars("CAB"));
        assert_eq!(render(Traceback::new(&x, &y).solve()), vec!["AB"]);

        // C worth 5: the single "C" now outscores "AB".
        let heavy_c = |c: &char| weight(if *c == 'C' { 5 } else { 1 });
        let solver = Traceback::with_weight(&x, &y, heavy_c);
        assert_eq!(*solver.score_grid().last(), 5);
        assert_eq!(render(solver.solve()), vec!["C"]);
    }

    #[test]
    fn weighted_ties_keep_different_lengths() {
        // "C" (weight 2) ties with "AB" (1 + 1).
        let (x, y) = (chars("ABC"), chars("CAB"));
        let double_c = |c: &char| weight(if *c == 'C' { 2 } else { 1 });
        let solver = Traceback::with_weight(&x, &y, double_c);
        assert_eq!(render(solver.solve()), vec!["AB", "C"]);
    }

    #[test]
    fn maximal_weights_do_not_clamp_into_false_ties() {
        let max = |_: &char| NonZeroU32::MAX;
        let top = u64::from(u32::MAX);

        let (x, y) = (chars("AB"), chars("AB"));
        let solver = Traceback::with_weight(&x, &y, max);
        assert_eq!(*solver.score_grid().last(), 2 * top);
        assert_eq!(render(solver.solve()), vec!["AB"]);

        // "AB" scores twice what "C" does, so "C" must not join the result.
        let (x, y) = (chars("ABC"), chars("CAB"));
        let solver = Traceback::with_weight(&x, &y, max);
        assert_eq!(*solver.score_grid().last(), 2 * top);
        assert_eq!(render(solver.solve()), vec!["AB"]);
    }
}
