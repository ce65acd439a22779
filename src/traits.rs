//! Core trait definitions shared by every solver.
//!
//! A solver is a struct capturing one problem instance (the two input
//! sequences) that implements [`LcsSolver`]. The engine only ever talks to
//! solvers through this trait, so the three strategies are interchangeable:
//! - [`BruteForce`](crate::solvers::brute_force::BruteForce): unmemoized recursion,
//! - [`FullDp`](crate::solvers::full_dp::FullDp): candidate sets in every grid cell,
//! - [`Traceback`](crate::solvers::traceback::Traceback): length grid plus reconstruction.

use std::num::NonZeroU32;

use crate::candidates::CandidateSet;

/// An atomic unit of a sequence.
///
/// Equality drives the recurrence; ordering is only needed to sort the
/// reconstructed subsequences at the end.
pub trait Symbol: Clone + Ord {}

impl<T: Clone + Ord> Symbol for T {}

/// Trait for a solver returning every longest common subsequence.
///
/// Semantics:
/// - The instance holds X (length n) and Y (length m).
/// - [`solve`](LcsSolver::solve) returns the raw candidate set for the full
///   prefixes (n, m): every member is a maximal common subsequence, all of
///   the same length, possibly with duplicates.
/// - The set is never empty; when nothing matches it holds the empty sequence.
///
/// Canonical ordering and deduplication happen afterwards, in
/// [`crate::canonical`].
pub trait LcsSolver<T: Symbol> {
    /// Compute the raw candidate set for the whole of X and Y.
    fn solve(&self) -> CandidateSet<T>;
}

/// Per-symbol match bonus used by the traceback solver's score grid.
///
/// The unit weighting reproduces the plain LCS length recurrence. Any other
/// weighting turns the traceback into a weighted common subsequence search:
/// the reconstruction returns every common subsequence of maximum total
/// weight.
///
/// Weights are [`NonZeroU32`]: a zero-weight match would tie with skipping
/// the symbol, and the traceback would then drop the alternatives that skip
/// it. Scores accumulate in `u64`, so no sum of weights along a path can
/// overflow.
pub trait SymbolWeight<T> {
    fn weight(&self, symbol: &T) -> NonZeroU32;
}

/// Every match is worth one, so scores are lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitWeight;

impl<T> SymbolWeight<T> for UnitWeight {
    #[inline]
    fn weight(&self, _symbol: &T) -> NonZeroU32 {
        NonZeroU32::MIN
    }
}

impl<T, F> SymbolWeight<T> for F
where
    F: Fn(&T) -> NonZeroU32,
{
    #[inline]
    fn weight(&self, symbol: &T) -> NonZeroU32 {
        self(symbol)
    }
}
