//! See documentation for [`Arg`].

use crate::rect2::Rect2;
use crate::vector::{Vec2, Vec3, VecN, Vector};

/// Dynamically typed argument.
///
/// Most operations of the crate are typed, so passing e.g. a rectangle where a point is expected
/// does not compile. Some call sites (scripting bridges, config-driven construction, the
/// [`Rect2Builder`](crate::Rect2Builder)) only know the kind of the value at runtime. These
/// accept an `Arg` and report a [`GeometryError::TypeMismatch`](crate::GeometryError) when the
/// kind is not supported.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// A scalar.
    Number(f64),
    /// A raw sequence of scalars (list or tuple).
    Sequence(Vec<f64>),
    /// A 2d point.
    Point(Vec2),
    /// A vector of any other arity.
    Vector(VecN),
    /// A rectangle.
    Rect(Rect2),
}

impl Arg {
    /// Human readable name of the argument kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Number(_) => "number",
            Arg::Sequence(_) => "sequence",
            Arg::Point(_) => "point",
            Arg::Vector(_) => "vector",
            Arg::Rect(_) => "rect",
        }
    }

    /// Returns the scalar if the argument is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Arg::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the point if the argument is a point or a vector with two components.
    pub fn as_point(&self) -> Option<Vec2> {
        match self {
            Arg::Point(p) => Some(*p),
            Arg::Vector(v) if v.len() == 2 => Vec2::try_from(v.values()).ok(),
            _ => None,
        }
    }

    /// Components of a sequence-like argument. Numbers and rectangles have none.
    pub(crate) fn into_components(self) -> Option<Vec<f64>> {
        match self {
            Arg::Sequence(values) => Some(values),
            Arg::Point(p) => Some(p.values().to_vec()),
            Arg::Vector(v) => Some(v.into_values()),
            Arg::Number(_) | Arg::Rect(_) => None,
        }
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Number(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Number(value as f64)
    }
}

impl From<Vec<f64>> for Arg {
    fn from(value: Vec<f64>) -> Self {
        Arg::Sequence(value)
    }
}

impl From<&[f64]> for Arg {
    fn from(value: &[f64]) -> Self {
        Arg::Sequence(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Arg {
    fn from(value: [f64; N]) -> Self {
        Arg::Sequence(value.to_vec())
    }
}

impl From<(f64, f64)> for Arg {
    fn from((a, b): (f64, f64)) -> Self {
        Arg::Sequence(vec![a, b])
    }
}

impl From<Vec2> for Arg {
    fn from(value: Vec2) -> Self {
        Arg::Point(value)
    }
}

impl From<Vec3> for Arg {
    fn from(value: Vec3) -> Self {
        Arg::Vector(value.into())
    }
}

impl From<VecN> for Arg {
    fn from(value: VecN) -> Self {
        Arg::Vector(value)
    }
}

impl From<&VecN> for Arg {
    fn from(value: &VecN) -> Self {
        Arg::Vector(value.clone())
    }
}

impl From<Rect2> for Arg {
    fn from(value: Rect2) -> Self {
        Arg::Rect(value)
    }
}
