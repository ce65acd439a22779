//! Input adapter: an immutable, indexable list of symbols.
//!
//! Every solver works on plain slices (`&[T]`); [`Sequence`] exists so that
//! callers can hand in strings, byte strings or any iterator of symbols
//! without caring how they are stored.

use std::ops::Deref;

use crate::traits::Symbol;

/// Fixed-length, 0-indexed list of symbols.
///
/// Dereferences to `[T]`, so indexing and iteration are those of a slice.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence<T> {
    symbols: Vec<T>,
}

impl<T: Symbol> Sequence<T> {
    pub fn new(symbols: Vec<T>) -> Self {
        Self { symbols }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.symbols
    }

    pub fn into_inner(self) -> Vec<T> {
        self.symbols
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.symbols
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.symbols
    }
}

impl<T: Symbol> From<Vec<T>> for Sequence<T> {
    fn from(symbols: Vec<T>) -> Self {
        Self::new(symbols)
    }
}

impl<T: Symbol> From<&[T]> for Sequence<T> {
    fn from(symbols: &[T]) -> Self {
        Self::new(symbols.to_vec())
    }
}

/// Characters, not bytes: `"héllo"` has five symbols.
impl From<&str> for Sequence<char> {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl<T: Symbol> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
