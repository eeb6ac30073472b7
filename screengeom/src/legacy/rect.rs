use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use crate::error::GeometryError;
use crate::serialization::{FieldValue, Serializable, Snapshot};
use crate::vector::Vec2;
use crate::Arg;

/// Integer rectangle in screen coordinates (the `y` axis points down).
///
/// Unlike [`Rect2`](crate::Rect2) the rectangle is stored as origin and size, is not
/// canonicalized and uses a half-open containment test.
///
/// Helpers returning a modified copy saturate at the `i32` range instead of overflowing. Derived
/// points (corners, center, containment) are computed in `f64` and are exact for any field values.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from float values, truncating them toward zero.
    ///
    /// Fails with [`GeometryError::InvariantViolation`] if a value is not finite or does not fit
    /// into `i32`.
    pub fn from_f64(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Ok(Self::new(
            to_int(x)?,
            to_int(y)?,
            to_int(width)?,
            to_int(height)?,
        ))
    }

    /// Inverse of [`Rect::to_bbox`].
    pub fn from_bbox((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// `(x0, y0, x1, y1)` of the rectangle. The far edges saturate at the `i32` range.
    pub fn to_bbox(&self) -> (i32, i32, i32, i32) {
        (
            self.x,
            self.y,
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    /// Top left and bottom right corners.
    pub fn to_double_point(&self) -> (Vec2, Vec2) {
        (self.top_left(), self.bottom_right())
    }

    /// Returns true if width and height are not negative.
    pub fn is_valid(&self) -> bool {
        self.width >= 0 && self.height >= 0
    }

    /// Center of the rectangle. Size is halved with floor division.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            f64::from(self.x) + f64::from(self.width.div_euclid(2)),
            f64::from(self.y) + f64::from(self.height.div_euclid(2)),
        )
    }

    /// Top left corner.
    pub fn pivot(&self) -> Vec2 {
        point(self.x, self.y)
    }

    /// `(width, height)` of the rectangle.
    pub fn size(&self) -> Vec2 {
        point(self.width, self.height)
    }

    /// Top left corner.
    pub fn top_left(&self) -> Vec2 {
        point(self.x, self.y)
    }

    /// Top right corner.
    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), f64::from(self.y))
    }

    /// Bottom left corner.
    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(f64::from(self.x), self.bottom())
    }

    /// Bottom right corner.
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Returns true if `x <= point.x < x + width` and `y <= point.y < y + height`.
    pub fn contains(&self, point: Vec2) -> bool {
        f64::from(self.x) <= point.x()
            && point.x() < self.right()
            && f64::from(self.y) <= point.y()
            && point.y() < self.bottom()
    }

    /// Translates the rectangle. Offset components are truncated.
    pub fn move_rel(&self, offset: Vec2) -> Rect {
        *self + offset
    }

    /// Translates the rectangle horizontally.
    pub fn move_rel_x(&self, amount: i32) -> Rect {
        self.with_x(self.x.saturating_add(amount))
    }

    /// Translates the rectangle vertically.
    pub fn move_rel_y(&self, amount: i32) -> Rect {
        self.with_y(self.y.saturating_add(amount))
    }

    /// Moves the top left corner to `pivot`.
    pub fn move_abs(&self, pivot: Vec2) -> Rect {
        Self {
            x: truncate(pivot.x()),
            y: truncate(pivot.y()),
            ..*self
        }
    }

    /// Moves the top edge up, keeping the bottom edge in place.
    pub fn expand_up(&self, amount: i32) -> Rect {
        Self {
            y: self.y.saturating_sub(amount),
            height: self.height.saturating_add(amount),
            ..*self
        }
    }

    /// Moves the bottom edge down.
    pub fn expand_down(&self, amount: i32) -> Rect {
        self.with_height(self.height.saturating_add(amount))
    }

    /// Moves the left edge left, keeping the right edge in place.
    pub fn expand_left(&self, amount: i32) -> Rect {
        Self {
            x: self.x.saturating_sub(amount),
            width: self.width.saturating_add(amount),
            ..*self
        }
    }

    /// Moves the right edge right.
    pub fn expand_right(&self, amount: i32) -> Rect {
        self.with_width(self.width.saturating_add(amount))
    }

    /// Moves every edge outwards by `amount`.
    pub fn expand_center(&self, amount: i32) -> Rect {
        let twice = amount.saturating_mul(2);
        Self::new(
            self.x.saturating_sub(amount),
            self.y.saturating_sub(amount),
            self.width.saturating_add(twice),
            self.height.saturating_add(twice),
        )
    }

    /// Copy with a different `x`.
    pub fn with_x(&self, x: i32) -> Rect {
        Self { x, ..*self }
    }

    /// Copy with a different `y`.
    pub fn with_y(&self, y: i32) -> Rect {
        Self { y, ..*self }
    }

    /// Copy with a different width.
    pub fn with_width(&self, width: i32) -> Rect {
        Self { width, ..*self }
    }

    /// Copy with a different height.
    pub fn with_height(&self, height: i32) -> Rect {
        Self { height, ..*self }
    }

    /// Copy with a different size. Components are truncated.
    pub fn with_size(&self, size: Vec2) -> Rect {
        Self {
            width: truncate(size.x()),
            height: truncate(size.y()),
            ..*self
        }
    }

    /// Moves the rectangle so that its [`center`](Self::center) is at `pivot`.
    pub fn with_pivot(&self, pivot: Vec2) -> Rect {
        Self {
            x: truncate(pivot.x()).saturating_sub(self.width.div_euclid(2)),
            y: truncate(pivot.y()).saturating_sub(self.height.div_euclid(2)),
            ..*self
        }
    }

    /// Value at the given index of `(x, y, width, height)`.
    pub fn at(&self, index: usize) -> Result<i32, GeometryError> {
        self.flat()
            .get(index)
            .copied()
            .ok_or_else(|| GeometryError::index(index, 4))
    }

    /// Overwrites the value at the given index of `(x, y, width, height)`.
    pub fn set_at(&mut self, index: usize, value: i32) -> Result<(), GeometryError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.width = value,
            3 => self.height = value,
            _ => return Err(GeometryError::index(index, 4)),
        }

        Ok(())
    }

    /// Multiplies all four fields by a uniform factor or by a per-axis `(sx, sy)` pair. The
    /// results are truncated toward zero.
    pub fn scaled(&self, scale: impl Into<Arg>) -> Result<Rect, GeometryError> {
        let scale = scale.into();
        let (sx, sy) = if let Some(k) = scale.as_number() {
            (k, k)
        } else {
            let kind = scale.kind();
            match scale.into_components() {
                Some(values) => Vec2::try_from(values.as_slice())?.into(),
                None => return Err(GeometryError::type_mismatch("number or pair", kind)),
            }
        };

        Self::from_f64(
            f64::from(self.x) * sx,
            f64::from(self.y) * sy,
            f64::from(self.width) * sx,
            f64::from(self.height) * sy,
        )
    }

    /// View of the part of the image covered by the rectangle.
    ///
    /// The covered area is clipped to the image bounds. Parts of the rectangle left of or above
    /// the image origin are dropped.
    #[cfg(feature = "image")]
    pub fn cut_image<'a, I: image::GenericImageView>(
        &self,
        image: &'a I,
    ) -> image::SubImage<&'a I> {
        let x0 = i64::from(self.x);
        let y0 = i64::from(self.y);
        let x1 = x0 + i64::from(self.width);
        let y1 = y0 + i64::from(self.height);

        let (left, top) = (x0.max(0), y0.max(0));
        let (right, bottom) = (x1.max(left), y1.max(top));

        // All values are within 0..=2 * i32::MAX, so they fit into u32.
        image::imageops::crop_imm(
            image,
            left.unsigned_abs() as u32,
            top.unsigned_abs() as u32,
            (right - left).unsigned_abs() as u32,
            (bottom - top).unsigned_abs() as u32,
        )
    }

    fn right(&self) -> f64 {
        f64::from(self.x) + f64::from(self.width)
    }

    fn bottom(&self) -> f64 {
        f64::from(self.y) + f64::from(self.height)
    }

    fn flat(&self) -> [i32; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    fn add(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x.saturating_add(truncate(rhs.x())),
            y: self.y.saturating_add(truncate(rhs.y())),
            ..self
        }
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Self {
            x: self.x.saturating_sub(truncate(rhs.x())),
            y: self.y.saturating_sub(truncate(rhs.y())),
            ..self
        }
    }
}

impl Serializable for Rect {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with_field("x", self.x)
            .with_field("y", self.y)
            .with_field("width", self.width)
            .with_field("height", self.height)
    }

    fn restore_field(&mut self, name: &str, value: FieldValue) -> Result<bool, GeometryError> {
        let slot = match name {
            "x" => &mut self.x,
            "y" => &mut self.y,
            "width" => &mut self.width,
            "height" => &mut self.height,
            _ => return Ok(false),
        };

        *slot = match value {
            FieldValue::Number(v) => to_int(v)?,
            other => i32::try_from(other.as_i64()?).map_err(|_| {
                GeometryError::InvariantViolation(format!("field '{name}' does not fit into i32"))
            })?,
        };

        Ok(true)
    }
}

fn point(x: i32, y: i32) -> Vec2 {
    Vec2::new(f64::from(x), f64::from(y))
}

fn to_int(value: f64) -> Result<i32, GeometryError> {
    num_traits::cast(value).ok_or_else(|| {
        GeometryError::InvariantViolation(format!("{value} cannot be represented as i32"))
    })
}

/// Saturating truncation toward zero, `NaN` becomes zero.
fn truncate(value: f64) -> i32 {
    value as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn construction() {
        assert_eq!(
            Rect::from_f64(1.9, -1.9, 10.5, 20.0).unwrap(),
            Rect::new(1, -1, 10, 20)
        );
        assert_matches!(
            Rect::from_f64(f64::NAN, 0.0, 0.0, 0.0),
            Err(GeometryError::InvariantViolation(_))
        );
        assert_matches!(
            Rect::from_f64(0.0, 1e12, 0.0, 0.0),
            Err(GeometryError::InvariantViolation(_))
        );
    }

    #[test]
    fn bbox_round_trip() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.to_bbox(), (10, 20, 40, 60));
        assert_eq!(Rect::from_bbox(rect.to_bbox()), rect);
    }

    #[test]
    fn derived_values() {
        let rect = Rect::new(10, 20, 31, 41);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
        assert_eq!(Rect::new(0, 0, -3, -3).center(), Vec2::new(-2.0, -2.0));
        assert_eq!(rect.pivot(), Vec2::new(10.0, 20.0));
        assert_eq!(rect.size(), Vec2::new(31.0, 41.0));
        assert_eq!(rect.top_right(), Vec2::new(41.0, 20.0));
        assert_eq!(rect.bottom_left(), Vec2::new(10.0, 61.0));
        assert_eq!(
            rect.to_double_point(),
            (Vec2::new(10.0, 20.0), Vec2::new(41.0, 61.0))
        );
    }

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(9.5, 9.0)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 10.0)));
        assert!(!rect.contains(Vec2::new(-0.5, 5.0)));
    }

    #[test]
    fn helpers_return_new_values() {
        let rect = Rect::new(10, 10, 20, 20);
        assert_eq!(rect.move_rel(Vec2::new(5.7, -5.7)), Rect::new(15, 5, 20, 20));
        assert_eq!(rect.move_rel_x(-10), Rect::new(0, 10, 20, 20));
        assert_eq!(rect.move_rel_y(3), Rect::new(10, 13, 20, 20));
        assert_eq!(rect.move_abs(Vec2::new(1.0, 2.0)), Rect::new(1, 2, 20, 20));
        assert_eq!(rect.expand_up(5), Rect::new(10, 5, 20, 25));
        assert_eq!(rect.expand_down(5), Rect::new(10, 10, 20, 25));
        assert_eq!(rect.expand_left(5), Rect::new(5, 10, 25, 20));
        assert_eq!(rect.expand_right(5), Rect::new(10, 10, 25, 20));
        assert_eq!(rect.expand_center(5), Rect::new(5, 5, 30, 30));
        assert_eq!(rect.with_size(Vec2::new(1.0, 2.0)), Rect::new(10, 10, 1, 2));
        assert_eq!(rect.with_pivot(Vec2::new(0.0, 0.0)), Rect::new(-10, -10, 20, 20));
        assert_eq!(rect.with_pivot(rect.center()), rect);
        assert_eq!(rect, Rect::new(10, 10, 20, 20));
    }

    #[test]
    fn translation_truncates() {
        let rect = Rect::new(0, 0, 5, 5);
        assert_eq!(rect + Vec2::new(1.9, 2.1), Rect::new(1, 2, 5, 5));
        assert_eq!(rect - Vec2::new(1.9, 2.1), Rect::new(-1, -2, 5, 5));
    }

    #[test]
    fn indexing() {
        let mut rect = Rect::new(1, 2, 3, 4);
        assert_eq!(rect.at(3).unwrap(), 4);
        assert_matches!(rect.at(4), Err(GeometryError::Index { index: 4, len: 4 }));
        rect.set_at(2, -3).unwrap();
        assert_eq!(rect, Rect::new(1, 2, -3, 4));
        assert!(!rect.is_valid());
        assert_matches!(rect.set_at(5, 0), Err(GeometryError::Index { .. }));
    }

    #[test]
    fn scaling() {
        let rect = Rect::new(10, 10, 15, 15);
        assert_eq!(rect.scaled(2.0).unwrap(), Rect::new(20, 20, 30, 30));
        assert_eq!(rect.scaled(0.5).unwrap(), Rect::new(5, 5, 7, 7));
        assert_eq!(rect.scaled((2.0, 1.0)).unwrap(), Rect::new(20, 10, 30, 15));
        assert_eq!(
            rect.scaled(Vec2::new(1.0, 3.0)).unwrap(),
            Rect::new(10, 30, 15, 45)
        );
        assert_matches!(
            rect.scaled(vec![1.0, 2.0, 3.0]),
            Err(GeometryError::DimensionMismatch { .. })
        );
        assert_matches!(
            rect.scaled(crate::Rect2::default()),
            Err(GeometryError::TypeMismatch { .. })
        );
    }

    #[test]
    fn display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "Rect(1, 2, 3, 4)");
    }

    #[cfg(feature = "image")]
    #[test]
    fn cut_image_is_clipped() {
        use image::{GenericImageView, RgbImage};

        let image = RgbImage::from_fn(20, 10, |x, y| image::Rgb([x as u8, y as u8, 0]));

        let view = Rect::new(2, 3, 5, 4).cut_image(&image);
        assert_eq!(view.dimensions(), (5, 4));
        assert_eq!(view.get_pixel(0, 0), image::Rgb([2, 3, 0]));

        let view = Rect::new(-5, -5, 10, 10).cut_image(&image);
        assert_eq!(view.dimensions(), (5, 5));
        assert_eq!(view.get_pixel(0, 0), image::Rgb([0, 0, 0]));

        let view = Rect::new(15, 5, 100, 100).cut_image(&image);
        assert_eq!(view.dimensions(), (5, 5));

        let view = Rect::new(-20, 0, 5, 5).cut_image(&image);
        assert_eq!(view.dimensions(), (0, 5));
    }

    #[cfg(feature = "image")]
    #[test]
    fn cut_image_outlives_rect() {
        use image::{GenericImageView, GrayImage};

        let image = GrayImage::new(8, 8);
        let view = {
            let rect = Rect::new(i32::MAX - 1, 0, i32::MAX, 4);
            rect.cut_image(&image)
        };
        assert_eq!(view.dimensions(), (0, 4));
    }

    #[test]
    fn arithmetic_near_limits_does_not_overflow() {
        let rect = Rect::new(i32::MAX - 5, 0, 10, 10);
        assert!(!rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(f64::from(i32::MAX), 5.0)));
        assert_eq!(rect.to_bbox(), (i32::MAX - 5, 0, i32::MAX, 10));
        assert_eq!(rect.top_right(), Vec2::new(f64::from(i32::MAX) + 5.0, 0.0));
        assert_eq!(rect.center(), Vec2::new(f64::from(i32::MAX), 5.0));

        assert_eq!(rect.move_rel_x(10).x, i32::MAX);
        assert_eq!(rect.expand_right(i32::MAX).width, i32::MAX);
        assert_eq!(
            rect.expand_center(i32::MAX),
            Rect::new(-5, -i32::MAX, i32::MAX, i32::MAX)
        );
        assert_eq!((rect + Vec2::new(100.0, 0.0)).x, i32::MAX);
        assert_eq!((Rect::new(i32::MIN, 0, 1, 1) - Vec2::new(1.0, 0.0)).x, i32::MIN);
        assert_eq!(Rect::from_bbox((i32::MIN, 0, i32::MAX, 1)).width, i32::MAX);
    }
}
