use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::serialization::FieldValue;

/// Color of a [`GRect`](super::GRect) outline or fill.
///
/// Channels are stored in BGR order, which is the order the drawing backend consumes them in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    b: u8,
    g: u8,
    r: u8,
}

impl From<[u8; 3]> for Color {
    fn from([b, g, r]: [u8; 3]) -> Self {
        Self::bgr(b, g, r)
    }
}

impl From<Color> for [u8; 3] {
    fn from(value: Color) -> Self {
        value.to_bgr_array()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::PINK
    }
}

impl Color {
    /// Pink color: `#FFC0CB`. Default highlight color.
    pub const PINK: Color = Color::rgb(255, 192, 203);
    /// Red color: `#FF0000`
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Green color: `#00FF00`
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Blue color: `#0000FF`
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// White color: `#FFFFFF`
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Black color: `#000000`
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Yellow color: `#FFFF00`
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Constructs color from its channels in storage order.
    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Constructs color from its RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r }
    }

    /// Blue channel.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Green channel.
    pub fn g(&self) -> u8 {
        self.g
    }

    /// Red channel.
    pub fn r(&self) -> u8 {
        self.r
    }

    /// Channels in storage (BGR) order.
    pub fn to_bgr_array(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Channels in RGB order, as used by `image` buffers.
    pub fn to_rgb_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts the color into HEX6 string: `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.b, self.g, self.r)
    }
}

/// Parses channels given in BGR order. Each channel must be an integer in `0..=255`.
impl TryFrom<&[f64]> for Color {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        let &[b, g, r] = values else {
            return Err(GeometryError::InvariantViolation(format!(
                "color must have 3 channels, got {}",
                values.len()
            )));
        };

        Ok(Self::bgr(channel(b)?, channel(g)?, channel(r)?))
    }
}

impl From<Color> for FieldValue {
    fn from(value: Color) -> Self {
        FieldValue::Values(value.to_bgr_array().map(f64::from).to_vec())
    }
}

fn channel(value: f64) -> Result<u8, GeometryError> {
    if value.fract() != 0.0 {
        return Err(GeometryError::InvariantViolation(format!(
            "color channel must be an integer, got {value}"
        )));
    }

    num_traits::cast(value).ok_or_else(|| {
        GeometryError::InvariantViolation(format!(
            "color channel must be in range 0..=255, got {value}"
        ))
    })
}
