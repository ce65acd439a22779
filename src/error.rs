//! Error type for the fallible edges of the crate.
//!
//! The solvers themselves are total over finite inputs and never return
//! errors. Only parsing a [`Variant`] name and cross-checking variants
//! against each other can fail.

use thiserror::Error;

use crate::engine::Variant;

/// Errors reported by [`Variant`] parsing and [`crate::LcsEngine::cross_check`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcsError {
    /// The string does not name any solver variant.
    #[error("unknown variant '{0}' (expected brute-force, full-dp or traceback)")]
    UnknownVariant(String),

    /// Two variants produced different result sets for the same input.
    #[error("variants disagree: {left} and {right} produced different result sets")]
    VariantMismatch { left: Variant, right: Variant },
}

pub type Result<T> = std::result::Result<T, LcsError>;
