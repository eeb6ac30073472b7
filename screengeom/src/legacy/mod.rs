//! Integer rectangles used by older screen-automation code.
//!
//! New code should prefer [`Rect2`](crate::Rect2). [`Rect`] remains for callers that work in
//! whole pixels, e.g. cropping screenshots with [`Rect::cut_image`] or drawing highlight boxes
//! described by [`GRect`].

mod color;
mod grect;
mod rect;

pub use color::Color;
pub use grect::GRect;
pub use rect::Rect;
