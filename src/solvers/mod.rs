//! Solver implementations of [`LcsSolver`](crate::traits::LcsSolver).
//!
//! All three return the same maximal subsequences for the same inputs and
//! differ only in how they get there:
//! - [`brute_force`] : unmemoized recursion over prefix lengths.
//! - [`full_dp`]     : bottom-up grid whose cells are candidate sets.
//! - [`traceback`]   : bottom-up length grid, then recursive reconstruction.

pub mod brute_force;
pub mod full_dp;
pub mod traceback;

pub use brute_force::BruteForce;
pub use full_dp::FullDp;
pub use traceback::Traceback;
