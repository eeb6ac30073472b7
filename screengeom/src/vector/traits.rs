use std::ops::{Bound, Range, RangeBounds};

use num_traits::Float;

use crate::error::GeometryError;
use crate::vector::{Vec2, Vec3, VecN};
use crate::Arg;

/// Axis to project a vector onto. See [`Vector::projected`].
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    /// Unit basis vector with `1` at the given index.
    Index(usize),
    /// Arbitrary direction. It is not normalized before projecting.
    Direction(VecN),
}

impl From<usize> for Axis {
    fn from(value: usize) -> Self {
        Axis::Index(value)
    }
}

impl From<VecN> for Axis {
    fn from(value: VecN) -> Self {
        Axis::Direction(value)
    }
}

impl From<Vec2> for Axis {
    fn from(value: Vec2) -> Self {
        Axis::Direction(value.into())
    }
}

impl From<Vec3> for Axis {
    fn from(value: Vec3) -> Self {
        Axis::Direction(value.into())
    }
}

/// Component-wise algebra shared by [`VecN`](crate::VecN), [`Vec2`](crate::Vec2) and
/// [`Vec3`](crate::Vec3).
///
/// Implementors only expose their storage; everything else is provided. The arity of a vector
/// never changes, so all operations that produce a vector of the same kind return `Self`.
///
/// Binary operations take an [`Arg`]: a number is broadcast to every component, a vector or a raw
/// sequence must have the same length as `self`.
pub trait Vector: Clone {
    /// Components of the vector.
    fn values(&self) -> &[f64];

    /// Mutable components of the vector.
    fn values_mut(&mut self) -> &mut [f64];

    /// Number of components.
    fn len(&self) -> usize {
        self.values().len()
    }

    /// Returns true if the vector has no components.
    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Component at the given index.
    fn at(&self, index: usize) -> Result<f64, GeometryError> {
        self.values()
            .get(index)
            .copied()
            .ok_or_else(|| GeometryError::index(index, self.len()))
    }

    /// Overwrites the component at the given index.
    fn set_at(&mut self, index: usize, value: f64) -> Result<(), GeometryError> {
        let len = self.len();
        let slot = self
            .values_mut()
            .get_mut(index)
            .ok_or_else(|| GeometryError::index(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Copy of the vector with one component replaced.
    fn with_value(&self, index: usize, value: f64) -> Result<Self, GeometryError> {
        let mut copy = self.clone();
        copy.set_at(index, value)?;
        Ok(copy)
    }

    /// Applies `f` to every component.
    fn map_components(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        let mut copy = self.clone();
        for v in copy.values_mut() {
            *v = f(*v);
        }
        copy
    }

    /// Dot product.
    fn dot(&self, other: &impl Vector) -> Result<f64, GeometryError> {
        check_len(self.len(), other.len())?;
        Ok(self
            .values()
            .iter()
            .zip(other.values())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Scalar projection onto the given axis.
    ///
    /// For [`Axis::Index`] this is the dot product with the unit basis vector, i.e. the component
    /// itself.
    fn projected(&self, axis: impl Into<Axis>) -> Result<f64, GeometryError> {
        match axis.into() {
            Axis::Index(index) => {
                let basis = VecN::zeros(self.len()).with_value(index, 1.0)?;
                self.dot(&basis)
            }
            Axis::Direction(direction) => self.dot(&direction),
        }
    }

    /// Squared euclidean norm.
    fn magnitude_sq(&self) -> f64 {
        self.values().iter().map(|v| v * v).sum()
    }

    /// Euclidean norm.
    fn magnitude(&self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// Vector with the same direction and magnitude of `1`.
    ///
    /// Returns [`GeometryError::DivisionByZero`] if the magnitude is exactly zero.
    fn normalized(&self) -> Result<Self, GeometryError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }

        Ok(self.map_components(|v| v / magnitude))
    }

    /// Component-wise sum.
    fn try_add(&self, rhs: impl Into<Arg>) -> Result<Self, GeometryError> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Component-wise difference.
    fn try_sub(&self, rhs: impl Into<Arg>) -> Result<Self, GeometryError> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Component-wise product.
    fn try_mul(&self, rhs: impl Into<Arg>) -> Result<Self, GeometryError> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Component-wise quotient. Division by a zero component follows IEEE 754.
    fn try_div(&self, rhs: impl Into<Arg>) -> Result<Self, GeometryError> {
        self.zip_with(rhs, |a, b| a / b)
    }

    /// Component-wise quotient rounded towards negative infinity.
    fn try_floor_div(&self, rhs: impl Into<Arg>) -> Result<Self, GeometryError> {
        self.zip_with(rhs, |a, b| (a / b).floor())
    }

    /// Component-wise remainder with the sign of the divisor.
    fn try_rem(&self, rhs: impl Into<Arg>) -> Result<Self, GeometryError> {
        self.zip_with(rhs, floored_rem)
    }

    /// Component-wise power.
    fn try_pow(&self, rhs: impl Into<Arg>) -> Result<Self, GeometryError> {
        self.zip_with(rhs, Float::powf)
    }

    /// Component-wise negation.
    fn negated(&self) -> Self {
        self.map_components(|v| -v)
    }

    /// Component-wise absolute value.
    fn abs(&self) -> Self {
        self.map_components(Float::abs)
    }

    /// Combines every component with the matching component of the broadcast operand.
    fn zip_with(
        &self,
        rhs: impl Into<Arg>,
        mut f: impl FnMut(f64, f64) -> f64,
    ) -> Result<Self, GeometryError> {
        let rhs = broadcast(rhs.into(), self.len())?;
        let mut out = self.clone();
        for (v, r) in out.values_mut().iter_mut().zip(rhs) {
            *v = f(*v, r);
        }
        Ok(out)
    }
}

fn broadcast(rhs: Arg, len: usize) -> Result<Vec<f64>, GeometryError> {
    if let Arg::Number(v) = rhs {
        return Ok(vec![v; len]);
    }

    let kind = rhs.kind();
    let values = rhs
        .into_components()
        .ok_or_else(|| GeometryError::type_mismatch("number, vector or sequence", kind))?;
    check_len(len, values.len())?;
    Ok(values)
}

fn check_len(expected: usize, actual: usize) -> Result<(), GeometryError> {
    if expected != actual {
        return Err(GeometryError::dimension_mismatch(expected, actual));
    }

    Ok(())
}

fn floored_rem(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Clamps a range to `0..len` the same way slicing a list does.
pub(crate) fn clamp_range(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.saturating_add(1),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };

    let end = end.min(len);
    start.min(end)..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn broadcasting_matches_explicit_vector() {
        let v = VecN::new(vec![1.0, -2.0, 3.5]);
        for s in [0.0, 1.0, -4.25, 1e6] {
            assert_eq!(
                v.try_add(s).unwrap(),
                v.try_add(VecN::new(vec![s; v.len()])).unwrap()
            );
            assert_eq!(
                v.try_mul(s).unwrap(),
                v.try_mul(vec![s; v.len()]).unwrap()
            );
        }
    }

    #[test]
    fn binary_ops_check_operands() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_matches!(
            v.try_add(Vec2::new(1.0, 1.0)),
            Err(GeometryError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_matches!(
            v.try_sub(crate::Rect2::new(0.0, 0.0, 1.0, 1.0)),
            Err(GeometryError::TypeMismatch {
                actual: "rect",
                ..
            })
        );
        assert_eq!(
            v.try_sub(vec![1.0, 1.0, 1.0]).unwrap(),
            Vec3::new(0.0, 1.0, 2.0)
        );
    }

    #[test]
    fn floor_div_and_rem_follow_floor_semantics() {
        let v = Vec2::new(7.0, -7.0);
        assert_eq!(v.try_floor_div(2.0).unwrap(), Vec2::new(3.0, -4.0));
        assert_eq!(v.try_rem(2.0).unwrap(), Vec2::new(1.0, 1.0));
        assert_eq!(v.try_pow(2.0).unwrap(), Vec2::new(49.0, 49.0));
        assert_eq!(v.abs(), Vec2::new(7.0, 7.0));
        assert_eq!(v.negated(), Vec2::new(-7.0, 7.0));
    }

    #[test]
    fn projection() {
        let v = Vec3::new(3.0, -4.0, 5.0);
        assert_eq!(v.projected(1).unwrap(), -4.0);
        assert_eq!(v.projected(Vec3::new(1.0, 1.0, 0.0)).unwrap(), -1.0);
        assert_matches!(
            v.projected(3),
            Err(GeometryError::Index { index: 3, len: 3 })
        );
        assert_matches!(
            v.projected(Vec2::new(1.0, 0.0)),
            Err(GeometryError::DimensionMismatch { .. })
        );
    }

    #[test]
    fn normalization() {
        let vectors = [
            VecN::new(vec![3.0, 4.0]),
            VecN::new(vec![1e-3, 0.0, 0.0, 2e-3]),
            VecN::new(vec![-10.0, 250.0, 0.5]),
        ];
        for v in vectors {
            assert_abs_diff_eq!(v.normalized().unwrap().magnitude(), 1.0, epsilon = 1e-12);
        }

        assert_matches!(
            Vec2::zero().normalized(),
            Err(GeometryError::DivisionByZero)
        );
    }

    #[test]
    fn indexing() {
        let mut v = Vec2::new(1.0, 2.0);
        assert_eq!(v.at(1).unwrap(), 2.0);
        assert_matches!(v.at(2), Err(GeometryError::Index { index: 2, len: 2 }));
        v.set_at(0, 5.0).unwrap();
        assert_eq!(v.x(), 5.0);
        assert_matches!(v.set_at(7, 1.0), Err(GeometryError::Index { .. }));
        assert_eq!(v.with_value(1, 9.0).unwrap(), Vec2::new(5.0, 9.0));
        assert_eq!(v, Vec2::new(5.0, 2.0));
    }

    #[test]
    fn clamping_ranges() {
        assert_eq!(clamp_range(1..3, 4), 1..3);
        assert_eq!(clamp_range(2.., 4), 2..4);
        assert_eq!(clamp_range(..=10, 4), 0..4);
        assert_eq!(clamp_range(5..7, 4), 4..4);
    }
}
