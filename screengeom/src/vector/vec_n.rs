use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, RangeBounds, Sub};

use serde::{Deserialize, Serialize};

use super::{clamp_range, fmt_components, impl_tolerant_eq, Vec2, Vec3, Vector};
use crate::error::GeometryError;
use crate::Arg;

/// Vector with an arbitrary number of components.
///
/// The number of components is fixed at construction. Cloning produces independent storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VecN {
    values: Vec<f64>,
}

impl VecN {
    /// Creates a vector from its components.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// Vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Creates a vector from loosely typed arguments.
    ///
    /// Either every argument is a number (one component each), or there is exactly one
    /// sequence-like argument providing all components. Mixing the two forms returns
    /// [`GeometryError::DimensionMismatch`].
    pub fn from_args(args: impl IntoIterator<Item = Arg>) -> Result<Self, GeometryError> {
        let args: Vec<Arg> = args.into_iter().collect();
        let Some(first) = args.first() else {
            return Err(GeometryError::Construction(
                "a vector needs at least one component".into(),
            ));
        };

        if let Some(rect) = args.iter().find(|arg| matches!(arg, Arg::Rect(_))) {
            return Err(GeometryError::type_mismatch("number or sequence", rect.kind()));
        }

        if args.iter().all(|arg| arg.as_number().is_some()) {
            return Ok(args.iter().filter_map(Arg::as_number).collect());
        }

        if args.len() != 1 {
            return Err(GeometryError::dimension_mismatch(1, args.len()));
        }

        let kind = first.kind();
        args.into_iter()
            .next()
            .and_then(Arg::into_components)
            .map(Self::new)
            .ok_or_else(|| GeometryError::type_mismatch("number or sequence", kind))
    }

    /// Sub-vector over the given range. The range is clamped to the vector length.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        Self::new(&self.values[clamp_range(range, self.values.len())])
    }

    /// Iterates over the components.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Consumes the vector returning its components.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl Vector for VecN {
    fn values(&self) -> &[f64] {
        &self.values
    }

    fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}

impl_tolerant_eq!(VecN);

impl Display for VecN {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "VecN([")?;
        fmt_components(f, &self.values)?;
        write!(f, "])")
    }
}

impl From<Vec<f64>> for VecN {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for VecN {
    fn from(values: &[f64]) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[f64; N]> for VecN {
    fn from(values: [f64; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<Vec2> for VecN {
    fn from(value: Vec2) -> Self {
        Self::new(value.values())
    }
}

impl From<Vec3> for VecN {
    fn from(value: Vec3) -> Self {
        Self::new(value.values())
    }
}

impl FromIterator<f64> for VecN {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl IntoIterator for VecN {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Add<f64> for VecN {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        self.map_components(|v| v + rhs)
    }
}

impl Sub<f64> for VecN {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        self.map_components(|v| v - rhs)
    }
}

impl Mul<f64> for VecN {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map_components(|v| v * rhs)
    }
}

impl Div<f64> for VecN {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.map_components(|v| v / rhs)
    }
}

impl Neg for VecN {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn construction_forms() {
        let expected = VecN::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            VecN::from_args([Arg::from(1.0), Arg::from(2.0), Arg::from(3.0)]).unwrap(),
            expected
        );
        assert_eq!(
            VecN::from_args([Arg::from(vec![1.0, 2.0, 3.0])]).unwrap(),
            expected
        );
        assert_eq!(VecN::from_args([Arg::from(expected.clone())]).unwrap(), expected);
        assert_eq!(VecN::from([1.0, 2.0, 3.0]), expected);
        assert_eq!([1.0, 2.0, 3.0].into_iter().collect::<VecN>(), expected);
    }

    #[test]
    fn mixed_construction_forms_fail() {
        assert_matches!(
            VecN::from_args([Arg::from(vec![1.0, 2.0]), Arg::from(3.0)]),
            Err(GeometryError::DimensionMismatch { .. })
        );
        assert_matches!(
            VecN::from_args([Arg::from(1.0), Arg::from(vec![2.0, 3.0])]),
            Err(GeometryError::DimensionMismatch { .. })
        );
        assert_matches!(
            VecN::from_args([Arg::from(1.0), Arg::from(Vec2::new(2.0, 3.0)), Arg::from(4.0)]),
            Err(GeometryError::DimensionMismatch { .. })
        );
        assert_matches!(
            VecN::from_args([Arg::from(1.0), Arg::from(crate::Rect2::default())]),
            Err(GeometryError::TypeMismatch { actual: "rect", .. })
        );
        assert_matches!(
            VecN::from_args([Arg::from(crate::Rect2::new(0.0, 0.0, 1.0, 1.0))]),
            Err(GeometryError::TypeMismatch { actual: "rect", .. })
        );
        assert_matches!(
            VecN::from_args(Vec::new()),
            Err(GeometryError::Construction(_))
        );
    }

    #[test]
    fn clones_do_not_alias() {
        let original = VecN::new(vec![1.0, 2.0]);
        let mut copy = original.clone();
        copy.set_at(0, 10.0).unwrap();
        assert_eq!(original.at(0).unwrap(), 1.0);
        assert_eq!(copy.at(0).unwrap(), 10.0);
    }

    #[test]
    fn slicing() {
        let v = VecN::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.slice(1..3), VecN::new(vec![2.0, 3.0]));
        assert_eq!(v.slice(2..), VecN::new(vec![3.0, 4.0]));
        assert!(v.slice(6..).is_empty());
    }

    #[test]
    fn scalar_ops() {
        let v = VecN::new(vec![1.0, -2.0]);
        assert_eq!(v.clone() + 1.0, VecN::new(vec![2.0, -1.0]));
        assert_eq!(v.clone() * 2.0, VecN::new(vec![2.0, -4.0]));
        assert_eq!(v.clone() / 2.0, VecN::new(vec![0.5, -1.0]));
        assert_eq!(-v, VecN::new(vec![-1.0, 2.0]));
    }

    #[test]
    fn display() {
        assert_eq!(VecN::new(vec![1.0, 2.5]).to_string(), "VecN([1.0, 2.5])");
    }
}
