use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::{fmt_components, impl_tolerant_eq, Axis, VecN, Vector};
use crate::error::GeometryError;
use crate::Arg;

/// 2d vector. Also used as a point in screen space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vec2 {
    values: [f64; 2],
}

impl Vec2 {
    /// Creates a new vector.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { values: [x, y] }
    }

    /// Vector with both components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Zero vector.
    pub const fn zero() -> Self {
        Self::splat(0.0)
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.values[0]
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.values[1]
    }

    /// Sets x component.
    pub fn set_x(&mut self, x: f64) {
        self.values[0] = x;
    }

    /// Sets y component.
    pub fn set_y(&mut self, y: f64) {
        self.values[1] = y;
    }

    /// Mutable reference to the x component.
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.values[0]
    }

    /// Mutable reference to the y component.
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.values[1]
    }

    /// Copy of the vector.
    pub fn xy(&self) -> Vec2 {
        *self
    }

    /// Overwrites both components.
    pub fn set_xy(&mut self, xy: Vec2) {
        self.values = xy.values;
    }

    /// Projection onto the x axis, [`projected`](Vector::projected) with `Axis::Index(0)`.
    pub fn projected_x(&self) -> f64 {
        self.project_on_basis(0)
    }

    /// Projection onto the y axis, [`projected`](Vector::projected) with `Axis::Index(1)`.
    pub fn projected_y(&self) -> f64 {
        self.project_on_basis(1)
    }

    // The index is always within the arity, so the projection cannot fail.
    fn project_on_basis(&self, index: usize) -> f64 {
        self.projected(Axis::Index(index)).unwrap_or_default()
    }

    pub(crate) fn zip(self, other: Vec2, f: impl Fn(f64, f64) -> f64) -> Vec2 {
        Vec2::new(f(self.x(), other.x()), f(self.y(), other.y()))
    }
}

impl Vector for Vec2 {
    fn values(&self) -> &[f64] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

impl_tolerant_eq!(Vec2);

impl Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec2(")?;
        fmt_components(f, &self.values)?;
        write!(f, ")")
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(values: [f64; 2]) -> Self {
        Self { values }
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<f64> for Vec2 {
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(value: Vec2) -> Self {
        (value.x(), value.y())
    }
}

impl TryFrom<&[f64]> for Vec2 {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(GeometryError::dimension_mismatch(2, values.len())),
        }
    }
}

impl TryFrom<VecN> for Vec2 {
    type Error = GeometryError;

    fn try_from(value: VecN) -> Result<Self, Self::Error> {
        Self::try_from(value.values())
    }
}

impl TryFrom<Arg> for Vec2 {
    type Error = GeometryError;

    fn try_from(value: Arg) -> Result<Self, Self::Error> {
        if let Arg::Point(p) = value {
            return Ok(p);
        }

        let kind = value.kind();
        let values = value
            .into_components()
            .ok_or_else(|| GeometryError::type_mismatch("point or sequence", kind))?;
        Self::try_from(values.as_slice())
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for Vec2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Div for Vec2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a / b)
    }
}

impl Add<f64> for Vec2 {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        self + Vec2::splat(rhs)
    }
}

impl Sub<f64> for Vec2 {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        self - Vec2::splat(rhs)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self * Vec2::splat(rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self / Vec2::splat(rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vec2::new(-self.x(), -self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accessors_write_through() {
        let mut v = Vec2::new(1.0, 2.0);
        v.set_x(3.0);
        *v.y_mut() += 1.0;
        assert_eq!(v.values(), &[3.0, 3.0]);
        assert_eq!(v.at(1).unwrap(), 3.0);

        v.set_xy(Vec2::new(-1.0, -2.0));
        assert_eq!(v, Vec2::new(-1.0, -2.0));
        assert_eq!(v.projected_x(), -1.0);
        assert_eq!(v.projected_y(), -2.0);
        assert_eq!(v.projected_y(), v.projected(Axis::Index(1)).unwrap());
    }

    #[test]
    fn swizzle_read_is_a_copy() {
        let v = Vec2::new(1.0, 2.0);
        let mut copy = v.xy();
        copy.set_x(10.0);
        assert_eq!(v.x(), 1.0);
    }

    #[test]
    fn construction_checks_arity() {
        assert_eq!(
            Vec2::try_from([1.0, 2.0].as_slice()).unwrap(),
            Vec2::new(1.0, 2.0)
        );
        assert_matches!(
            Vec2::try_from([1.0, 2.0, 3.0].as_slice()),
            Err(GeometryError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_matches!(
            Vec2::try_from(VecN::new(vec![1.0])),
            Err(GeometryError::DimensionMismatch { .. })
        );
        assert_matches!(
            Vec2::try_from(Arg::from(4.0)),
            Err(GeometryError::TypeMismatch { .. })
        );
        assert_eq!(
            Vec2::try_from(Arg::from(VecN::new(vec![5.0, 6.0]))).unwrap(),
            Vec2::new(5.0, 6.0)
        );
    }

    #[test]
    fn operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 8.0);
        assert_eq!(a + b, Vec2::new(5.0, 10.0));
        assert_eq!(b - a, Vec2::new(3.0, 6.0));
        assert_eq!(a * b, Vec2::new(4.0, 16.0));
        assert_eq!(b / a, Vec2::new(4.0, 4.0));
        assert_eq!(a + 1.0, Vec2::new(2.0, 3.0));
        assert_eq!(2.0 * a, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        assert_eq!(a.magnitude_sq(), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(Vec2::new(1.0, -2.5).to_string(), "Vec2(1.0, -2.5)");
    }
}
