use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::math::Vector2;

use super::pairwise::{vector_pairs, VectorPair};

/// A vector pair together with the angle between its members, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleResult {
    pub pair: VectorPair,
    pub angle: f64,
}

impl AngleResult {
    #[must_use]
    pub fn new(pair: VectorPair) -> Self {
        Self {
            angle: pair.angle(),
            pair,
        }
    }
}

impl From<AngleResult> for (Vector2, Vector2, f64) {
    fn from(result: AngleResult) -> Self {
        (result.pair.first, result.pair.second, result.angle)
    }
}

/// Renders `θ([x, y], [x, y]) = angle`.
///
/// The angle uses fixed notation with the formatter's precision, six
/// digits when none is given.
impl fmt::Display for AngleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(
            f,
            "θ({}, {}) = {:.*}",
            self.pair.first, self.pair.second, precision, self.angle
        )
    }
}

/// Ascending by angle. NaN sorts after every number and ties with other NaN.
fn ascending_angle(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Orders every pair of a vector sequence by ascending angle.
pub struct ThetaSort<'a> {
    vecs: &'a [Vector2],
}

impl<'a> ThetaSort<'a> {
    /// Creates a new `ThetaSort` operation.
    #[must_use]
    pub fn new(vecs: &'a [Vector2]) -> Self {
        Self { vecs }
    }

    /// Executes the operation.
    ///
    /// Enumerates every unique pair (lower source index first), computes the
    /// angle of each once, then stable-sorts ascending. Pairs with equal
    /// angles keep their enumeration order. Pairs involving a zero vector get
    /// a NaN angle and end up last.
    #[must_use]
    pub fn execute(&self) -> Vec<AngleResult> {
        let mut results: Vec<AngleResult> = vector_pairs(self.vecs)
            .into_iter()
            .map(AngleResult::new)
            .collect();

        let degenerate = results.iter().filter(|r| r.angle.is_nan()).count();
        if degenerate > 0 {
            warn!(
                pairs = degenerate,
                "angle undefined for pairs with a zero-length or non-finite vector"
            );
        }

        results.sort_by(|a, b| ascending_angle(a.angle, b.angle));

        debug!(
            vectors = self.vecs.len(),
            pairs = results.len(),
            "sorted pairs by angle"
        );
        for r in &results {
            trace!(first = %r.pair.first, second = %r.pair.second, angle = r.angle);
        }
        results
    }
}

/// Returns the pairs of `vecs` ordered by angle, ascending.
#[must_use]
pub fn theta_sort(vecs: &[Vector2]) -> Vec<VectorPair> {
    ThetaSort::new(vecs)
        .execute()
        .into_iter()
        .map(|r| r.pair)
        .collect()
}

/// Returns `(first, second, angle)` for every pair of `vecs`, ascending by angle.
#[must_use]
pub fn sorted_angle_pairs(vecs: &[Vector2]) -> Vec<(Vector2, Vector2, f64)> {
    ThetaSort::new(vecs).execute().into_iter().map(Into::into).collect()
}
