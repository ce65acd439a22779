//! Candidate sets and the tie-inclusion policy.
//!
//! A [`CandidateSet`] holds every maximal common subsequence found for one
//! subproblem. All members share one length; a set grows past a single
//! member only when two subproblems tie, in which case both sides are kept.

use crate::traits::Symbol;

/// Which sides of a mismatch branch survive.
///
/// Comparisons are inclusive on both sides, so a tie keeps both and the
/// candidates fan out. Absent sides (`None`) lose to any present side.
#[inline]
pub fn keep_sides<K: Ord>(up: K, left: K) -> (bool, bool) {
    (up >= left, left >= up)
}

/// Raw, possibly duplicated, collection of equal-length subsequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet<T> {
    members: Vec<Vec<T>>,
}

impl<T> Default for CandidateSet<T> {
    fn default() -> Self {
        Self {
            members: Vec::new(),
        }
    }
}

impl<T: Symbol> CandidateSet<T> {
    /// `{ [] }`: the answer for any empty prefix.
    pub fn empty_sequence() -> Self {
        Self {
            members: vec![Vec::new()],
        }
    }

    pub fn from_members(members: Vec<Vec<T>>) -> Self {
        debug_assert!(
            members.windows(2).all(|w| w[0].len() == w[1].len()),
            "candidate members must share one length"
        );
        Self { members }
    }

    /// Shared length of the members, `None` when the set has no members.
    #[inline]
    pub fn member_len(&self) -> Option<usize> {
        self.members.first().map(Vec::len)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[T]> {
        self.members.iter().map(Vec::as_slice)
    }

    pub fn into_members(self) -> Vec<Vec<T>> {
        self.members
    }

    /// `{ s + symbol : s ∈ self }`, reusing the member buffers.
    pub fn into_extended(mut self, symbol: &T) -> Self {
        for member in &mut self.members {
            member.push(symbol.clone());
        }
        self
    }

    /// `{ s + symbol : s ∈ self }`, leaving `self` untouched.
    pub fn extended(&self, symbol: &T) -> Self {
        let members = self
            .members
            .iter()
            .map(|s| {
                let mut next = Vec::with_capacity(s.len() + 1);
                next.extend_from_slice(s);
                next.push(symbol.clone());
                next
            })
            .collect();
        Self { members }
    }

    /// Mismatch branch over owned sides: keep whichever is at least as long
    /// as the other, both on a tie.
    pub fn longest_of(up: Self, left: Self) -> Self {
        let (keep_up, keep_left) = keep_sides(up.member_len(), left.member_len());
        match (keep_up, keep_left) {
            (true, true) => {
                let mut members = up.members;
                members.extend(left.members);
                Self { members }
            }
            (true, false) => up,
            _ => left,
        }
    }

    /// Plain union, no length check. The weighted traceback uses this since
    /// its tied members share a score, not necessarily a length.
    pub fn union(mut self, other: Self) -> Self {
        self.members.extend(other.members);
        self
    }

    /// Same policy as [`longest_of`](Self::longest_of), cloning only the
    /// surviving side(s) out of borrowed cells.
    pub fn longest_of_ref(up: &Self, left: &Self) -> Self {
        let (keep_up, keep_left) = keep_sides(up.member_len(), left.member_len());
        let capacity = (if keep_up { up.len() } else { 0 }) + (if keep_left { left.len() } else { 0 });
        let mut members = Vec::with_capacity(capacity);
        if keep_up {
            members.extend(up.members.iter().cloned());
        }
        if keep_left {
            members.extend(left.members.iter().cloned());
        }
        Self { members }
    }
}

impl<T> IntoIterator for CandidateSet<T> {
    type Item = Vec<T>;
    type IntoIter = std::vec::IntoIter<Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(members: &[&str]) -> CandidateSet<char> {
        CandidateSet::from_members(members.iter().map(|s| s.chars().collect()).collect())
    }

    fn strings(set: &CandidateSet<char>) -> Vec<String> {
        set.iter().map(|s| s.iter().collect()).collect()
    }

    #[test]
    fn keep_sides_is_inclusive() {
        assert_eq!(keep_sides(2, 1), (true, false));
        assert_eq!(keep_sides(1, 2), (false, true));
        assert_eq!(keep_sides(2, 2), (true, true));
        assert_eq!(keep_sides(None, Some(0)), (false, true));
        assert_eq!(keep_sides(Some(0), None), (true, false));
    }

    #[test]
    fn empty_sequence_is_a_singleton() {
        let s = CandidateSet::<char>::empty_sequence();
        assert_eq!(s.len(), 1);
        assert_eq!(s.member_len(), Some(0));
        assert!(CandidateSet::<char>::default().member_len().is_none());
    }

    #[test]
    fn extension_appends_to_every_member() {
        let s = set(&["GA", "GC"]);
        assert_eq!(strings(&s.extended(&'T')), vec!["GAT", "GCT"]);
        assert_eq!(strings(&s.into_extended(&'T')), vec!["GAT", "GCT"]);
    }

    #[test]
    fn longer_side_wins_alone() {
        let up = set(&["AC"]);
        let left = set(&["A", "C"]);
        assert_eq!(strings(&CandidateSet::longest_of_ref(&up, &left)), vec!["AC"]);
        assert_eq!(strings(&CandidateSet::longest_of(left, up)), vec!["AC"]);
    }

    #[test]
    fn tie_keeps_both_sides_in_order() {
        let up = set(&["GA"]);
        let left = set(&["GC", "AC"]);
        assert_eq!(
            strings(&CandidateSet::longest_of_ref(&up, &left)),
            vec!["GA", "GC", "AC"]
        );
        assert_eq!(
            strings(&CandidateSet::longest_of(up, left)),
            vec!["GA", "GC", "AC"]
        );
    }

    #[test]
    fn missing_side_loses_to_empty_sequence() {
        let up = CandidateSet::<char>::default();
        let left = CandidateSet::empty_sequence();
        let merged = CandidateSet::longest_of(up, left);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.member_len(), Some(0));
    }
}
