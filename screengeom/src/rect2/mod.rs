//! Closed-interval rectangle with float coordinates.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, RangeBounds, Sub};

use crate::error::GeometryError;
use crate::serialization::{FieldValue, Serializable, Snapshot};
use crate::vector::{clamp_range, Vec2, VecN, Vector};
use crate::Arg;

mod builder;

pub use builder::Rect2Builder;

/// Axis-aligned rectangle defined by two corner points.
///
/// The rectangle is always canonical: `start` holds the minimum and `end` the maximum coordinate
/// on both axes. Every constructor and every operation that moves the corners restores this
/// invariant, so the order in which corners are given never matters.
///
/// Both edges belong to the rectangle, i.e. [`contains`](Rect2::contains) and
/// [`intersects`](Rect2::intersects) use closed intervals. This differs from the legacy
/// [`Rect`](crate::Rect), which is half-open.
///
/// Corner names assume that the `y` axis points up: `top` is `end.y` and `bottom` is `start.y`.
#[derive(Debug, Copy, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Endpoints")]
pub struct Rect2 {
    start: Vec2,
    end: Vec2,
}

#[derive(serde::Deserialize)]
struct Endpoints {
    start: Vec2,
    end: Vec2,
}

impl From<Endpoints> for Rect2 {
    fn from(value: Endpoints) -> Self {
        Self::from_endpoints(value.start, value.end)
    }
}

impl Rect2 {
    /// Creates a rectangle from its bounding box values.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::from_endpoints(Vec2::new(min_x, min_y), Vec2::new(max_x, max_y))
    }

    /// Inverse of [`Rect2::to_bbox`].
    pub fn from_bbox((min_x, min_y, max_x, max_y): (f64, f64, f64, f64)) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }

    /// Creates a rectangle spanning the two given points.
    pub fn from_endpoints(a: Vec2, b: Vec2) -> Self {
        Self {
            start: a.zip(b, f64::min),
            end: a.zip(b, f64::max),
        }
    }

    /// Creates a rectangle from its origin and dimensions.
    pub fn from_origin_and_dimensions(origin: Vec2, width: f64, height: f64) -> Self {
        Self::from_endpoints(origin, origin + Vec2::new(width, height))
    }

    /// Creates a rectangle from origin coordinates and dimensions.
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_origin_and_dimensions(Vec2::new(x, y), width, height)
    }

    /// Creates a rectangle from its origin and a size vector.
    pub fn from_origin_and_size(origin: Vec2, size: Vec2) -> Self {
        Self::from_endpoints(origin, origin + size)
    }

    /// Creates a rectangle from origin coordinates and a size vector.
    pub fn from_xy_and_size(x: f64, y: f64, size: Vec2) -> Self {
        Self::from_origin_and_size(Vec2::new(x, y), size)
    }

    /// Corner with the minimum coordinates.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Corner with the maximum coordinates.
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Left edge.
    pub fn x(&self) -> f64 {
        self.start.x()
    }

    /// Bottom edge.
    pub fn y(&self) -> f64 {
        self.start.y()
    }

    /// Same as [`Rect2::start`].
    pub fn xy(&self) -> Vec2 {
        self.start
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.end.x() - self.start.x()
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.end.y() - self.start.y()
    }

    /// `(width, height)` of the rectangle.
    pub fn size(&self) -> Vec2 {
        self.end - self.start
    }

    /// Center point.
    pub fn center(&self) -> Vec2 {
        self.start + self.size() / 2.0
    }

    /// Minimum `x`.
    pub fn left(&self) -> f64 {
        self.start.x()
    }

    /// Maximum `x`.
    pub fn right(&self) -> f64 {
        self.end.x()
    }

    /// Maximum `y`.
    pub fn top(&self) -> f64 {
        self.end.y()
    }

    /// Minimum `y`.
    pub fn bottom(&self) -> f64 {
        self.start.y()
    }

    /// `(left, top)` corner.
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.start.x(), self.end.y())
    }

    /// `(right, top)` corner. Same as [`Rect2::end`].
    pub fn top_right(&self) -> Vec2 {
        self.end
    }

    /// `(left, bottom)` corner. Same as [`Rect2::start`].
    pub fn bottom_left(&self) -> Vec2 {
        self.start
    }

    /// `(right, bottom)` corner.
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.end.x(), self.start.y())
    }

    /// `(min_x, min_y, max_x, max_y)` as a vector.
    pub fn bbox(&self) -> VecN {
        VecN::from(self.flat())
    }

    /// `(x, y, width, height)` as a vector.
    pub fn xywh(&self) -> VecN {
        VecN::from([self.x(), self.y(), self.width(), self.height()])
    }

    /// `(min_x, min_y, max_x, max_y)`.
    pub fn tuple_bbox(&self) -> (f64, f64, f64, f64) {
        (self.start.x(), self.start.y(), self.end.x(), self.end.y())
    }

    /// `(x, y, width, height)`.
    pub fn tuple_xywh(&self) -> (f64, f64, f64, f64) {
        (self.x(), self.y(), self.width(), self.height())
    }

    /// Bounding box in the `(min_x, min_y, max_x, max_y)` order expected by drawing code.
    pub fn to_bbox(&self) -> (f64, f64, f64, f64) {
        self.tuple_bbox()
    }

    /// Returns true if the point lies inside the rectangle or on its boundary.
    pub fn contains(&self, point: Vec2) -> bool {
        self.start.x() <= point.x()
            && point.x() <= self.end.x()
            && self.start.y() <= point.y()
            && point.y() <= self.end.y()
    }

    /// Same as [`Rect2::contains`] for a loosely typed argument.
    pub fn try_contains(&self, point: impl Into<Arg>) -> Result<bool, GeometryError> {
        let point = point.into();
        point
            .as_point()
            .map(|p| self.contains(p))
            .ok_or_else(|| GeometryError::type_mismatch("point", point.kind()))
    }

    /// Returns true if the rectangles share at least one point. Touching edges or corners count.
    pub fn intersects(&self, other: &Rect2) -> bool {
        self.start.x() <= other.end.x()
            && self.end.x() >= other.start.x()
            && self.start.y() <= other.end.y()
            && self.end.y() >= other.start.y()
    }

    /// Same as [`Rect2::intersects`] for a loosely typed argument.
    pub fn try_intersects(&self, other: impl Into<Arg>) -> Result<bool, GeometryError> {
        match other.into() {
            Arg::Rect(other) => Ok(self.intersects(&other)),
            other => Err(GeometryError::type_mismatch("rect", other.kind())),
        }
    }

    /// Overlapping region of the two rectangles, if any.
    pub fn intersection(&self, other: &Rect2) -> Option<Rect2> {
        self.intersects(other).then(|| Self {
            start: self.start.zip(other.start, f64::max),
            end: self.end.zip(other.end, f64::min),
        })
    }

    /// Smallest rectangle containing both rectangles.
    pub fn union(&self, other: &Rect2) -> Rect2 {
        Self {
            start: self.start.zip(other.start, f64::min),
            end: self.end.zip(other.end, f64::max),
        }
    }

    /// Grows the rectangle by `size` in total, half of it on each side.
    pub fn expanded(&self, size: impl Into<Vec2>) -> Rect2 {
        let half = size.into() / 2.0;
        Self::from_endpoints(self.start - half, self.end + half)
    }

    /// Moves `start` away from the center by `size`.
    pub fn expanded_start(&self, size: Vec2) -> Rect2 {
        Self::from_endpoints(self.start - size, self.end)
    }

    /// Moves `end` away from the center by `size`.
    pub fn expanded_end(&self, size: Vec2) -> Rect2 {
        Self::from_endpoints(self.start, self.end + size)
    }

    /// Moves the left edge outwards by `size`.
    pub fn expanded_left(&self, size: f64) -> Rect2 {
        self.expanded_start(Vec2::new(size, 0.0))
    }

    /// Moves the right edge outwards by `size`.
    pub fn expanded_right(&self, size: f64) -> Rect2 {
        self.expanded_end(Vec2::new(size, 0.0))
    }

    /// Moves the top edge outwards by `size`.
    pub fn expanded_top(&self, size: f64) -> Rect2 {
        self.expanded_end(Vec2::new(0.0, size))
    }

    /// Moves the bottom edge outwards by `size`.
    pub fn expanded_bottom(&self, size: f64) -> Rect2 {
        self.expanded_start(Vec2::new(0.0, size))
    }

    /// Pushes the top-left corner outwards: left by `size.x`, up by `size.y`.
    pub fn expanded_top_left(&self, size: Vec2) -> Rect2 {
        self.expanded_left(size.x()).expanded_top(size.y())
    }

    /// Pushes the top-right corner outwards: right by `size.x`, up by `size.y`.
    pub fn expanded_top_right(&self, size: Vec2) -> Rect2 {
        self.expanded_end(size)
    }

    /// Pushes the bottom-left corner outwards: left by `size.x`, down by `size.y`.
    pub fn expanded_bottom_left(&self, size: Vec2) -> Rect2 {
        self.expanded_start(size)
    }

    /// Pushes the bottom-right corner outwards: right by `size.x`, down by `size.y`.
    pub fn expanded_bottom_right(&self, size: Vec2) -> Rect2 {
        self.expanded_right(size.x()).expanded_bottom(size.y())
    }

    /// Value at the given index of `(start.x, start.y, end.x, end.y)`.
    pub fn at(&self, index: usize) -> Result<f64, GeometryError> {
        self.flat()
            .get(index)
            .copied()
            .ok_or_else(|| GeometryError::index(index, 4))
    }

    /// Overwrites the value at the given index of `(start.x, start.y, end.x, end.y)`.
    ///
    /// The rectangle is canonicalized afterwards, so writing a `start` value past `end` swaps
    /// them.
    pub fn set_at(&mut self, index: usize, value: f64) -> Result<(), GeometryError> {
        match index {
            0 | 1 => self.start.set_at(index, value)?,
            2 | 3 => self.end.set_at(index - 2, value)?,
            _ => return Err(GeometryError::index(index, 4)),
        }

        *self = Self::from_endpoints(self.start, self.end);
        Ok(())
    }

    /// Builds a new rectangle from a sub-sequence of `(start.x, start.y, end.x, end.y)`.
    ///
    /// Only a sub-sequence of four values is a valid rectangle; anything else fails the same way
    /// [`Rect2Builder::build`] does for a sequence argument.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Rect2, GeometryError> {
        let flat = self.flat();
        let values = flat[clamp_range(range, flat.len())].to_vec();
        Rect2Builder::new().arg(values).build()
    }

    /// Translates the rectangle by a loosely typed offset. Only points are accepted.
    pub fn try_translate(&self, offset: impl Into<Arg>) -> Result<Rect2, GeometryError> {
        let offset = offset.into();
        offset
            .as_point()
            .map(|p| *self + p)
            .ok_or_else(|| GeometryError::type_mismatch("point", offset.kind()))
    }

    /// Scales the rectangle by a loosely typed factor: a number or a per-axis point.
    pub fn try_scale(&self, factor: impl Into<Arg>) -> Result<Rect2, GeometryError> {
        let factor = factor.into();
        if let Some(k) = factor.as_number() {
            return Ok(*self * k);
        }

        factor
            .as_point()
            .map(|p| *self * p)
            .ok_or_else(|| GeometryError::type_mismatch("number or point", factor.kind()))
    }

    fn flat(&self) -> [f64; 4] {
        [self.start.x(), self.start.y(), self.end.x(), self.end.y()]
    }
}

impl PartialEq for Rect2 {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl approx::AbsDiffEq for Rect2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        crate::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.start, &other.start, epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.end, &other.end, epsilon)
    }
}

impl approx::RelativeEq for Rect2 {
    fn default_max_relative() -> f64 {
        crate::MAX_RELATIVE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        approx::RelativeEq::relative_eq(&self.start, &other.start, epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.end, &other.end, epsilon, max_relative)
    }
}

impl Display for Rect2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect2({}, {}, size={})", self.start, self.end, self.size())
    }
}

impl Add<Vec2> for Rect2 {
    type Output = Rect2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self::from_endpoints(self.start + rhs, self.end + rhs)
    }
}

impl Sub<Vec2> for Rect2 {
    type Output = Rect2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self::from_endpoints(self.start - rhs, self.end - rhs)
    }
}

impl Mul<Vec2> for Rect2 {
    type Output = Rect2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Self::from_endpoints(self.start * rhs, self.end * rhs)
    }
}

impl Mul<f64> for Rect2 {
    type Output = Rect2;

    fn mul(self, rhs: f64) -> Self::Output {
        self * Vec2::splat(rhs)
    }
}

impl Mul<Rect2> for f64 {
    type Output = Rect2;

    fn mul(self, rhs: Rect2) -> Self::Output {
        rhs * self
    }
}

impl Div<Vec2> for Rect2 {
    type Output = Rect2;

    fn div(self, rhs: Vec2) -> Self::Output {
        Self::from_endpoints(self.start / rhs, self.end / rhs)
    }
}

impl Div<f64> for Rect2 {
    type Output = Rect2;

    fn div(self, rhs: f64) -> Self::Output {
        self / Vec2::splat(rhs)
    }
}

impl Serializable for Rect2 {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with_field("start", self.start)
            .with_field("end", self.end)
    }

    fn restore_field(&mut self, name: &str, value: FieldValue) -> Result<bool, GeometryError> {
        match name {
            "start" => self.start = Vec2::try_from(value.as_values()?)?,
            "end" => self.end = Vec2::try_from(value.as_values()?)?,
            _ => return Ok(false),
        }

        Ok(true)
    }

    fn finish_restore(&mut self) -> Result<(), GeometryError> {
        *self = Self::from_endpoints(self.start, self.end);
        Ok(())
    }
}
