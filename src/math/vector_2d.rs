use std::fmt;

use crate::error::GeometryError;

/// An immutable 2D vector value.
///
/// Equality is exact, field-wise. Two vectors with equal coordinates are
/// interchangeable for every operation in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean 2-norm `sqrt(x² + y²)`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        nalgebra::Vector2::from(*self).norm()
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        nalgebra::Vector2::from(*self).dot(&nalgebra::Vector2::from(*other))
    }

    /// Returns `true` for the zero vector (both components exactly zero).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns the angle between `self` and `other` in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding never pushes parallel
    /// vectors out of the `acos` domain. If either operand is the zero vector
    /// the result is NaN; use [`Vector2::try_angle_between`] to reject that
    /// case instead.
    #[must_use]
    pub fn angle_between(&self, other: &Self) -> f64 {
        (self.dot(other) / (self.norm() * other.norm()))
            .clamp(-1.0, 1.0)
            .acos()
    }

    /// Checked form of [`Vector2::angle_between`].
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if either operand has zero length.
    pub fn try_angle_between(&self, other: &Self) -> Result<f64, GeometryError> {
        if self.is_zero() || other.is_zero() {
            return Err(GeometryError::ZeroVector);
        }
        Ok(self.angle_between(other))
    }
}

/// Returns the dot product of `a` and `b`.
#[must_use]
pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
    a.dot(b)
}

/// Returns the angle θ between `a` and `b` in radians.
#[must_use]
pub fn theta(a: &Vector2, b: &Vector2) -> f64 {
    a.angle_between(b)
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

/// Writes `v` with six significant digits, `%g` style: fixed notation for
/// decimal exponents in `[-4, 6)`, scientific otherwise, trailing zeros
/// removed.
fn write_general(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v == 0.0 || !v.is_finite() {
        return write!(f, "{v}");
    }
    let sci = format!("{v:.5e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return write!(f, "{v}");
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return write!(f, "{v}");
    };

    if (-4..6).contains(&exp) {
        let decimals = usize::try_from(5 - exp).unwrap_or(0);
        let fixed = format!("{v:.decimals$}");
        f.write_str(trim_fraction(&fixed))
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        write!(f, "{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_general(f, self.x)?;
        f.write_str(", ")?;
        write_general(f, self.y)?;
        f.write_str("]")
    }
}
