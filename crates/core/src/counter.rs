use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use tracing::trace;

/// Most frequent first; equal counts in ascending element order.
fn by_rank<T: Ord>(a: &(T, usize), b: &(T, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Occurrence counts of the elements fed to it.
///
/// Iteration, [`most_common`](Self::most_common) and `Display` all walk the
/// elements in rank order: highest count first, ties broken by the elements'
/// own ordering.
///
/// ```
/// use containers_core::Counter;
///
/// let counter: Counter<char> = "abcacdaabc".chars().collect();
/// assert_eq!(counter.len(), 4);
/// assert_eq!(counter.most_common(Some(2)), vec![(&'a', 4), (&'c', 3)]);
/// assert_eq!(counter.to_string(), "{(a: 4), (c: 3), (b: 2), (d: 1)}");
/// ```
#[derive(Clone)]
pub struct Counter<T> {
    counts: HashMap<T, usize>,
}

impl<T> Default for Counter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Counter<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn clear(&mut self) {
        trace!(distinct = self.counts.len(), "counter clear");
        self.counts.clear();
    }
}

impl<T: Hash + Eq + Ord> Counter<T> {
    /// Adds one occurrence for every element of `iter`.
    pub fn update<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            *self.counts.entry(value).or_insert(0) += 1;
        }
        trace!(distinct = self.counts.len(), "counter update");
    }

    /// Occurrences of `value`; 0 if it was never seen.
    pub fn get(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// The first `n` `(element, count)` pairs in rank order, or all of them
    /// for `None`.
    pub fn most_common(&self, n: Option<usize>) -> Vec<(&T, usize)> {
        let mut ranked: Vec<_> = self.counts.iter().map(|(v, &c)| (v, c)).collect();
        ranked.sort_unstable_by(by_rank);
        if let Some(n) = n {
            ranked.truncate(n);
        }
        ranked
    }

    /// Appends the first `n` elements in rank order to `out`, without their
    /// counts.
    pub fn most_common_into<E: Extend<T>>(&self, out: &mut E, n: Option<usize>)
    where
        T: Clone,
    {
        out.extend(self.most_common(n).into_iter().map(|(v, _)| v.clone()));
    }

    /// Consumes the counter into its `(element, count)` pairs in rank order.
    pub fn into_ranked(self) -> Vec<(T, usize)> {
        let mut ranked: Vec<_> = self.counts.into_iter().collect();
        ranked.sort_unstable_by(by_rank);
        ranked
    }

    /// Element to count map of `iter`, unordered.
    pub fn tally<I: IntoIterator<Item = T>>(iter: I) -> HashMap<T, usize> {
        iter.into_iter().collect::<Self>().counts
    }

    /// `(element, count)` pairs of `iter` in rank order.
    pub fn ranked<I: IntoIterator<Item = T>>(iter: I) -> Vec<(T, usize)> {
        iter.into_iter().collect::<Self>().into_ranked()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.most_common(None).into_iter(),
        }
    }
}

/// Rank-order iterator over a [`Counter`].
pub struct Iter<'a, T> {
    inner: std::vec::IntoIter<(&'a T, usize)>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, usize);

    fn next(&mut self) -> Option<(&'a T, usize)> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Hash + Eq + Ord> Extend<T> for Counter<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<T: Hash + Eq + Ord> FromIterator<T> for Counter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.update(iter);
        counter
    }
}

impl<T: Hash + Eq + Ord> IntoIterator for Counter<T> {
    type Item = (T, usize);
    type IntoIter = std::vec::IntoIter<(T, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_ranked().into_iter()
    }
}

impl<'a, T: Hash + Eq + Ord> IntoIterator for &'a Counter<T> {
    type Item = (&'a T, usize);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Hash + Eq + Ord + fmt::Debug> fmt::Debug for Counter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Ord + fmt::Display> fmt::Display for Counter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (v, c)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({v}: {c})")?;
        }
        f.write_str("}")
    }
}
