use std::collections::btree_map::{self, BTreeMap};

/// Sparse map from exponent to coefficient.
///
/// A stored coefficient is never zero: writing zero removes the entry. Keys
/// are kept ordered so the highest exponent is found in `O(log n)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TermStore {
    terms: BTreeMap<u64, i64>,
}

impl TermStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of stored (non-zero) terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Coefficient at `exponent`, zero if absent.
    #[inline]
    pub fn get(&self, exponent: u64) -> i64 {
        self.terms.get(&exponent).copied().unwrap_or(0)
    }

    /// Store `coefficient` at `exponent`, dropping the entry when it is zero.
    pub fn set(&mut self, exponent: u64, coefficient: i64) {
        if coefficient == 0 {
            self.terms.remove(&exponent);
        } else {
            self.terms.insert(exponent, coefficient);
        }
    }

    pub fn remove(&mut self, exponent: u64) -> Option<i64> {
        self.terms.remove(&exponent)
    }

    /// `(exponent, coefficient)` of the highest stored term.
    #[inline]
    pub fn leading(&self) -> Option<(u64, i64)> {
        self.terms.last_key_value().map(|(&e, &c)| (e, c))
    }

    /// Terms in ascending exponent order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.terms.iter(),
        }
    }
}

/// Iterator over `(exponent, coefficient)` pairs.
///
/// Ascending by default; call `.rev()` for descending order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, u64, i64>,
}

impl Iterator for Iter<'_> {
    type Item = (u64, i64);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&e, &c)| (e, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&e, &c)| (e, c))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TermStore {
    type Item = (u64, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
