use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::{fmt_components, impl_tolerant_eq, Axis, Vec2, VecN, Vector};
use crate::error::GeometryError;
use crate::Arg;

/// 3d vector.
///
/// Swizzle getters (`xy`, `xz`, `yz`, `xyz`) return copies; the matching setters scatter the
/// given components back into this vector.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vec3 {
    values: [f64; 3],
}

impl Vec3 {
    /// Creates a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { values: [x, y, z] }
    }

    /// Vector with all components set to `v`.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
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

    /// Z component.
    pub fn z(&self) -> f64 {
        self.values[2]
    }

    /// Sets x component.
    pub fn set_x(&mut self, x: f64) {
        self.values[0] = x;
    }

    /// Sets y component.
    pub fn set_y(&mut self, y: f64) {
        self.values[1] = y;
    }

    /// Sets z component.
    pub fn set_z(&mut self, z: f64) {
        self.values[2] = z;
    }

    /// Mutable reference to the x component.
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.values[0]
    }

    /// Mutable reference to the y component.
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.values[1]
    }

    /// Mutable reference to the z component.
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.values[2]
    }

    /// `(x, y)` components.
    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x(), self.y())
    }

    /// `(x, z)` components.
    pub fn xz(&self) -> Vec2 {
        Vec2::new(self.x(), self.z())
    }

    /// `(y, z)` components.
    pub fn yz(&self) -> Vec2 {
        Vec2::new(self.y(), self.z())
    }

    /// Copy of the vector.
    pub fn xyz(&self) -> Vec3 {
        *self
    }

    /// Writes `v` into the x and y components.
    pub fn set_xy(&mut self, v: Vec2) {
        self.values[0] = v.x();
        self.values[1] = v.y();
    }

    /// Writes `v` into the x and z components.
    pub fn set_xz(&mut self, v: Vec2) {
        self.values[0] = v.x();
        self.values[2] = v.y();
    }

    /// Writes `v` into the y and z components.
    pub fn set_yz(&mut self, v: Vec2) {
        self.values[1] = v.x();
        self.values[2] = v.y();
    }

    /// Overwrites all components.
    pub fn set_xyz(&mut self, v: Vec3) {
        self.values = v.values;
    }

    /// Projection onto the x axis, [`projected`](Vector::projected) with `Axis::Index(0)`.
    pub fn projected_x(&self) -> f64 {
        self.project_on_basis(0)
    }

    /// Projection onto the y axis, [`projected`](Vector::projected) with `Axis::Index(1)`.
    pub fn projected_y(&self) -> f64 {
        self.project_on_basis(1)
    }

    /// Projection onto the z axis, [`projected`](Vector::projected) with `Axis::Index(2)`.
    pub fn projected_z(&self) -> f64 {
        self.project_on_basis(2)
    }

    // The index is always within the arity, so the projection cannot fail.
    fn project_on_basis(&self, index: usize) -> f64 {
        self.projected(Axis::Index(index)).unwrap_or_default()
    }

    /// Cross product.
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    fn zip(self, other: Vec3, f: impl Fn(f64, f64) -> f64) -> Vec3 {
        Vec3::new(
            f(self.x(), other.x()),
            f(self.y(), other.y()),
            f(self.z(), other.z()),
        )
    }
}

impl Vector for Vec3 {
    fn values(&self) -> &[f64] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

impl_tolerant_eq!(Vec3);

impl Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vec3(")?;
        fmt_components(f, &self.values)?;
        write!(f, ")")
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(values: [f64; 3]) -> Self {
        Self { values }
    }
}

impl From<(f64, f64, f64)> for Vec3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[f64]> for Vec3 {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match values {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GeometryError::dimension_mismatch(3, values.len())),
        }
    }
}

impl TryFrom<VecN> for Vec3 {
    type Error = GeometryError;

    fn try_from(value: VecN) -> Result<Self, Self::Error> {
        Self::try_from(value.values())
    }
}

impl TryFrom<Arg> for Vec3 {
    type Error = GeometryError;

    fn try_from(value: Arg) -> Result<Self, Self::Error> {
        let kind = value.kind();
        let values = value
            .into_components()
            .ok_or_else(|| GeometryError::type_mismatch("vector or sequence", kind))?;
        Self::try_from(values.as_slice())
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for Vec3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Div for Vec3 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a / b)
    }
}

impl Add<f64> for Vec3 {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        self + Vec3::splat(rhs)
    }
}

impl Sub<f64> for Vec3 {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        self - Vec3::splat(rhs)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self * Vec3::splat(rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self / Vec3::splat(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}
