use std::iter::FusedIterator;

use crate::math::Vector2;

/// Number of unique unordered pairs of distinct positions among `n` elements.
#[must_use]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

/// Lazy iterator over every pair of distinct positions `i < j` of a slice.
///
/// Pairs are yielded lexicographically by `(i, j)`, the lower-index element
/// first. Distinctness is positional: equal values at different positions
/// still form a pair.
#[derive(Debug, Clone)]
pub struct Pairwise<'a, T> {
    elts: &'a [T],
    i: usize,
    j: usize,
}

impl<'a, T> Pairwise<'a, T> {
    #[must_use]
    pub fn new(elts: &'a [T]) -> Self {
        Self { elts, i: 0, j: 1 }
    }

    fn remaining(&self) -> usize {
        let n = self.elts.len();
        if self.j >= n {
            return 0;
        }
        // Rest of the current row plus every full row after it.
        (n - self.j) + pair_count(n - self.i - 1)
    }
}

impl<'a, T> Iterator for Pairwise<'a, T> {
    type Item = (&'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.elts.len();
        if self.j >= n {
            return None;
        }
        let item = (&self.elts[self.i], &self.elts[self.j]);
        self.j += 1;
        if self.j == n {
            self.i += 1;
            self.j = self.i + 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Pairwise<'_, T> {}

impl<T> FusedIterator for Pairwise<'_, T> {}

/// Returns all unique unordered pairs of `elts`, excluding pairs of an
/// element with itself.
#[must_use]
pub fn pairwise_elts<T: Clone>(elts: &[T]) -> Vec<(T, T)> {
    Pairwise::new(elts)
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

/// Two vectors in source order: `first` came before `second` in the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorPair {
    pub first: Vector2,
    pub second: Vector2,
}

impl VectorPair {
    #[must_use]
    pub const fn new(first: Vector2, second: Vector2) -> Self {
        Self { first, second }
    }

    /// Angle between `first` and `second` in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.first.angle_between(&self.second)
    }
}

impl From<(Vector2, Vector2)> for VectorPair {
    fn from((first, second): (Vector2, Vector2)) -> Self {
        Self { first, second }
    }
}

impl From<VectorPair> for (Vector2, Vector2) {
    fn from(pair: VectorPair) -> Self {
        (pair.first, pair.second)
    }
}

/// Returns every [`VectorPair`] of `vecs` in enumeration order.
#[must_use]
pub fn vector_pairs(vecs: &[Vector2]) -> Vec<VectorPair> {
    Pairwise::new(vecs)
        .map(|(a, b)| VectorPair::new(*a, *b))
        .collect()
}
