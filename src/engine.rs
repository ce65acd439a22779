//! Entry point tying the solvers and the canonicalizer together.
//!
//! A run is two steps:
//! 1. the selected [`Variant`] computes a raw candidate set,
//! 2. [`canonicalize`] turns it into the sorted, duplicate-free result.
//!
//! [`LcsEngine::cross_check`] runs every variant on the same input and
//! fails if any two disagree. With the `parallel` feature the variants run
//! concurrently on the rayon pool.

use std::fmt;
use std::str::FromStr;

use crate::candidates::CandidateSet;
use crate::canonical::{canonicalize, render_strings};
use crate::error::{LcsError, Result};
use crate::solvers::{BruteForce, FullDp, Traceback};
use crate::traits::{LcsSolver, Symbol};
#[cfg(feature = "parallel")]
use rayon::join;

/// Which solver computes the candidate set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Unmemoized recursion; exponential, the correctness baseline.
    BruteForce,
    /// Candidate set stored in every grid cell.
    FullDp,
    /// Length grid followed by traceback reconstruction.
    #[default]
    Traceback,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::BruteForce, Variant::FullDp, Variant::Traceback];

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::BruteForce => "brute-force",
            Variant::FullDp => "full-dp",
            Variant::Traceback => "traceback",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = LcsError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == normalized)
            .ok_or_else(|| LcsError::UnknownVariant(s.to_string()))
    }
}

/// All longest common subsequences of `x` and `y`, distinct and sorted.
///
/// ```
/// use lcs_all::{compute_lcs, Variant};
///
/// let found = compute_lcs(b"AGCAT", b"GAC", Variant::Traceback);
/// assert_eq!(found, vec![b"AC".to_vec(), b"GA".to_vec(), b"GC".to_vec()]);
/// ```
pub fn compute_lcs<T: Symbol>(x: &[T], y: &[T], variant: Variant) -> Vec<Vec<T>> {
    LcsEngine::with_variant(x, y, variant).run()
}

/// [`compute_lcs`] over the characters of two strings.
///
/// ```
/// use lcs_all::{compute_lcs_str, Variant};
///
/// assert_eq!(compute_lcs_str("AGCAT", "GAC", Variant::FullDp), ["AC", "GA", "GC"]);
/// assert_eq!(compute_lcs_str("", "ANYTHING", Variant::BruteForce), [""]);
/// ```
pub fn compute_lcs_str(x: &str, y: &str, variant: Variant) -> Vec<String> {
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = y.chars().collect();
    render_strings(compute_lcs(&x, &y, variant))
}

/// One problem instance plus the variant that will solve it.
#[derive(Clone, Debug)]
pub struct LcsEngine<'a, T> {
    x: &'a [T],
    y: &'a [T],
    variant: Variant,
}

impl<'a, T: Symbol> LcsEngine<'a, T> {
    /// Engine using the default [`Variant::Traceback`].
    pub fn new(x: &'a [T], y: &'a [T]) -> Self {
        Self::with_variant(x, y, Variant::default())
    }

    pub fn with_variant(x: &'a [T], y: &'a [T], variant: Variant) -> Self {
        Self { x, y, variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn inputs(&self) -> (&'a [T], &'a [T]) {
        (self.x, self.y)
    }

    /// Raw candidate set from the configured variant, before canonicalization.
    pub fn solve_raw(&self) -> CandidateSet<T> {
        solve_with(self.variant, self.x, self.y)
    }

    /// Canonical result set from the configured variant.
    pub fn run(&self) -> Vec<Vec<T>> {
        run_variant(self.variant, self.x, self.y)
    }
}

#[cfg(not(feature = "parallel"))]
impl<'a, T: Symbol> LcsEngine<'a, T> {
    /// Run every variant and return the shared result set.
    ///
    /// # Errors
    /// [`LcsError::VariantMismatch`] naming the first pair that disagrees.
    pub fn cross_check(&self) -> Result<Vec<Vec<T>>> {
        let brute = run_variant(Variant::BruteForce, self.x, self.y);
        let full = run_variant(Variant::FullDp, self.x, self.y);
        let traced = run_variant(Variant::Traceback, self.x, self.y);
        agree(brute, full, traced)
    }
}

#[cfg(feature = "parallel")]
impl<'a, T> LcsEngine<'a, T>
where
    T: Symbol + Send + Sync,
{
    /// Run every variant concurrently and return the shared result set.
    ///
    /// # Errors
    /// [`LcsError::VariantMismatch`] naming the first pair that disagrees.
    pub fn cross_check(&self) -> Result<Vec<Vec<T>>> {
        let (x, y) = (self.x, self.y);
        let (brute, (full, traced)) = join(
            || run_variant(Variant::BruteForce, x, y),
            || {
                join(
                    || run_variant(Variant::FullDp, x, y),
                    || run_variant(Variant::Traceback, x, y),
                )
            },
        );
        agree(brute, full, traced)
    }
}

fn solve_with<T: Symbol>(variant: Variant, x: &[T], y: &[T]) -> CandidateSet<T> {
    match variant {
        Variant::BruteForce => BruteForce::new(x, y).solve(),
        Variant::FullDp => FullDp::new(x, y).solve(),
        Variant::Traceback => Traceback::new(x, y).solve(),
    }
}

fn run_variant<T: Symbol>(variant: Variant, x: &[T], y: &[T]) -> Vec<Vec<T>> {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("lcs_run", %variant, n = x.len(), m = y.len()).entered();

    let raw = solve_with(variant, x, y);
    #[cfg(feature = "tracing")]
    tracing::debug!(raw = raw.len(), "candidates before canonicalization");
    canonicalize(raw)
}

fn agree<T: Symbol>(
    brute: Vec<Vec<T>>,
    full: Vec<Vec<T>>,
    traced: Vec<Vec<T>>,
) -> Result<Vec<Vec<T>>> {
    if brute != full {
        return Err(LcsError::VariantMismatch {
            left: Variant::BruteForce,
            right: Variant::FullDp,
        });
    }
    if full != traced {
        return Err(LcsError::VariantMismatch {
            left: Variant::FullDp,
            right: Variant::Traceback,
        });
    }
    Ok(traced)
}
