use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use super::{Color, Rect};
use crate::error::GeometryError;
use crate::serialization::{restore_nested, FieldValue, Serializable, Snapshot};

/// [`Rect`] with drawing attributes.
///
/// Width and height are guaranteed to be non-negative. Equality and hashing only consider the
/// geometry, two rectangles of different color covering the same area are equal.
#[derive(Debug, Copy, Clone, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GRectFields")]
pub struct GRect {
    rect: Rect,
    color: Color,
    filled: bool,
    visible: bool,
}

#[derive(serde::Deserialize)]
struct GRectFields {
    rect: Rect,
    color: Color,
    filled: bool,
    visible: bool,
}

impl TryFrom<GRectFields> for GRect {
    type Error = GeometryError;

    fn try_from(value: GRectFields) -> Result<Self, Self::Error> {
        Self::new(value.rect, value.color, value.filled, value.visible)
    }
}

impl Default for GRect {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            color: Color::PINK,
            filled: false,
            visible: true,
        }
    }
}

impl GRect {
    /// Creates a new graphical rectangle.
    pub fn new(
        rect: Rect,
        color: Color,
        filled: bool,
        visible: bool,
    ) -> Result<Self, GeometryError> {
        validate(&rect)?;
        Ok(Self {
            rect,
            color,
            filled,
            visible,
        })
    }

    /// Outlined, visible pink rectangle.
    pub fn outline(rect: Rect) -> Result<Self, GeometryError> {
        Self::new(rect, Color::PINK, false, true)
    }

    /// Creates a rectangle from loosely typed values. The color is given as BGR channels.
    pub fn from_values(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &[f64],
        filled: bool,
        visible: bool,
    ) -> Result<Self, GeometryError> {
        let rect = Rect::from_f64(x, y, width, height)?;
        let color = Color::try_from(color)?;
        Self::new(rect, color, filled, visible)
    }

    /// Geometry of the rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Outline or fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the rectangle is drawn filled.
    pub fn filled(&self) -> bool {
        self.filled
    }

    /// Whether the rectangle is drawn at all.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Copy of the rectangle with a different color.
    pub fn colored(&self, color: Color) -> GRect {
        Self { color, ..*self }
    }

    /// Copy with a different fill flag.
    pub fn with_filled(&self, filled: bool) -> GRect {
        Self { filled, ..*self }
    }

    /// Copy with a different visibility flag.
    pub fn with_visible(&self, visible: bool) -> GRect {
        Self { visible, ..*self }
    }

    /// Copy with different geometry. Fails if the new geometry has a negative size.
    ///
    /// ```
    /// use screengeom::{GRect, Rect};
    ///
    /// let grect = GRect::outline(Rect::new(0, 0, 10, 10))?;
    /// let moved = grect.with_rect(grect.rect().move_rel_x(5))?;
    /// assert_eq!(moved.rect().x, 5);
    /// # Ok::<(), screengeom::GeometryError>(())
    /// ```
    pub fn with_rect(&self, rect: Rect) -> Result<GRect, GeometryError> {
        Self::new(rect, self.color, self.filled, self.visible)
    }
}

impl PartialEq for GRect {
    fn eq(&self, other: &Self) -> bool {
        self.rect == other.rect
    }
}

impl Eq for GRect {}

impl Hash for GRect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rect.hash(state);
    }
}

impl Display for GRect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.rect;
        write!(
            f,
            "GRect({x}, {y}, {width}, {height}, color={}, filled={}, visible={})",
            self.color, self.filled, self.visible
        )
    }
}

impl Serializable for GRect {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with_nested("rect", &self.rect)
            .with_field("color", self.color)
            .with_field("filled", self.filled)
            .with_field("visible", self.visible)
    }

    fn restore_field(&mut self, name: &str, value: FieldValue) -> Result<bool, GeometryError> {
        match name {
            "rect" => restore_nested(&mut self.rect, value)?,
            "color" => self.color = Color::try_from(value.as_values()?)?,
            "filled" => self.filled = value.as_bool()?,
            "visible" => self.visible = value.as_bool()?,
            _ => return Ok(false),
        }

        Ok(true)
    }

    fn finish_restore(&mut self) -> Result<(), GeometryError> {
        validate(&self.rect)
    }
}

fn validate(rect: &Rect) -> Result<(), GeometryError> {
    if rect.width < 0 {
        return Err(GeometryError::InvariantViolation(format!(
            "width must be >= 0, but was {}",
            rect.width
        )));
    }

    if rect.height < 0 {
        return Err(GeometryError::InvariantViolation(format!(
            "height must be >= 0, but was {}",
            rect.height
        )));
    }

    Ok(())
}
