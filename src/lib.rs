//! Every Longest Common Subsequence of two sequences.
//!
//! Most LCS routines return one optimal subsequence, or just its length.
//! This crate returns *all* of them: every distinct common subsequence of
//! maximal length, sorted ascending.
//!
//! ## Core idea
//! 1. Wrap the inputs (strings, byte strings, token lists) as symbol slices.
//! 2. Pick a [`Variant`]; each one implements [`LcsSolver`] and yields a raw
//!    candidate set in which ties between two subproblems fan out into the
//!    union of both sides.
//! 3. [`canonical::canonicalize`] sorts the candidates and drops duplicates.
//!
//! The three variants always agree; they differ in cost:
//! - [`Variant::BruteForce`]: plain recursion, exponential, the reference.
//! - [`Variant::FullDp`]: O(n·m) cells, each holding a candidate set.
//! - [`Variant::Traceback`]: O(n·m) integers, then a reconstruction pass.
//!
//! ## Quick start
//! ```
//! use lcs_all::{compute_lcs_str, Variant};
//!
//! let all = compute_lcs_str("AGCAT", "GAC", Variant::Traceback);
//! assert_eq!(all, ["AC", "GA", "GC"]);
//! ```
//!
//! ## Limits
//! Returning every optimal subsequence is inherently exponential in the
//! number of ties, and the recursive phases recurse to depth `n + m`. Use
//! [`utils::lcs_length`] when only the length is needed.
//!
//! ## Cargo features
//! - `parallel`: [`LcsEngine::cross_check`] runs the variants on the rayon pool.
//! - `tracing`: spans around each run and DP phase.
//! - `heavy`: enables long-running stress tests.

pub mod builder;
pub mod candidates;
pub mod canonical;
pub mod engine;
pub mod error;
pub mod grid;
pub mod sequence;
pub mod solvers;
pub mod traits;
pub mod utils;

pub use crate::builder::LcsEngineBuilder;
pub use crate::candidates::CandidateSet;
pub use crate::engine::{compute_lcs, compute_lcs_str, LcsEngine, Variant};
pub use crate::error::{LcsError, Result};
pub use crate::sequence::Sequence;
pub use crate::traits::{LcsSolver, Symbol, SymbolWeight, UnitWeight};
