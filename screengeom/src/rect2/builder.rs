use super::Rect2;
use crate::error::GeometryError;
use crate::vector::Vec2;
use crate::Arg;

/// Constructor for a [`Rect2`] from loosely typed arguments.
///
/// Typed code should prefer the named factories of [`Rect2`]. The builder is meant for call sites
/// that receive arguments whose kind is only known at runtime. Supported shapes:
///
/// * `(min_x, min_y, max_x, max_y)` or a single 4-element sequence,
/// * `(start, end)` points,
/// * `(rect)` copy,
/// * `(start)` or `(x, y)` with [`with_size`](Self::with_size) or both
///   [`with_width`](Self::with_width) and [`with_height`](Self::with_height).
///
/// ```
/// use screengeom::{Rect2Builder, Vec2};
///
/// let rect = Rect2Builder::new()
///     .arg(Vec2::new(10.0, 10.0))
///     .with_width(20.0)
///     .with_height(5.0)
///     .build()?;
/// assert_eq!(rect.end(), Vec2::new(30.0, 15.0));
/// # Ok::<(), screengeom::GeometryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rect2Builder {
    args: Vec<Arg>,
    width: Option<f64>,
    height: Option<f64>,
    size: Option<Vec2>,
}

impl Rect2Builder {
    /// Creates a builder without arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several positional arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = Arg>) -> Self {
        self.args.extend(args);
        self
    }

    /// Sets the width. Must be used together with [`with_height`](Self::with_height).
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the height. Must be used together with [`with_width`](Self::with_width).
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the size of the rectangle.
    pub fn with_size(mut self, size: impl Into<Vec2>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Resolves the arguments into a rectangle.
    pub fn build(self) -> Result<Rect2, GeometryError> {
        let Self {
            args,
            width,
            height,
            size,
        } = self;

        let mut args = args.into_iter();
        let Some(first) = args.next() else {
            return Err(construction("at least one positional argument is required"));
        };
        let rest: Vec<Arg> = args.collect();

        let (start, mut end) = if let Arg::Rect(rect) = first {
            if !rest.is_empty() || width.is_some() || height.is_some() || size.is_some() {
                return Err(construction(
                    "copy construction does not accept other arguments",
                ));
            }

            (rect.start(), Some(rect.end()))
        } else if let Some(start) = first.as_point() {
            let end = match rest.as_slice() {
                [] => None,
                [end] => Some(
                    end.as_point()
                        .ok_or_else(|| GeometryError::type_mismatch("point", end.kind()))?,
                ),
                _ => {
                    return Err(construction(format!(
                        "(start, end) takes 2 positional arguments, got {}",
                        rest.len() + 1
                    )))
                }
            };

            (start, end)
        } else if let Some(x) = first.as_number() {
            let Some((y, tail)) = rest.split_first() else {
                return Err(construction("(x, y) form requires at least 2 arguments"));
            };
            let start = Vec2::new(x, number(y)?);
            let end = match tail {
                [] => None,
                [max_x, max_y] => Some(Vec2::new(number(max_x)?, number(max_y)?)),
                _ => {
                    return Err(construction(format!(
                        "(min_x, min_y, max_x, max_y) takes 4 positional arguments, got {}",
                        rest.len() + 1
                    )))
                }
            };

            (start, end)
        } else {
            if !rest.is_empty() {
                return Err(construction(
                    "a bbox sequence does not accept other positional arguments",
                ));
            }

            let kind = first.kind();
            match first.into_components().as_deref() {
                Some(&[min_x, min_y, max_x, max_y]) => {
                    (Vec2::new(min_x, min_y), Some(Vec2::new(max_x, max_y)))
                }
                _ => {
                    return Err(GeometryError::type_mismatch(
                        "point, number, rect or 4-element sequence",
                        kind,
                    ))
                }
            }
        };

        if let Some(size) = size {
            if end.is_some() {
                return Err(construction(
                    "end is already defined, use either (start, end) or size",
                ));
            }

            end = Some(start + size);
        }

        match (width, height) {
            (None, None) => {}
            (Some(width), Some(height)) => {
                if end.is_some() {
                    return Err(construction(
                        "end is already defined, use either (start, end), size or width and height",
                    ));
                }

                end = Some(start + Vec2::new(width, height));
            }
            (Some(_), None) => return Err(construction("width is given without height")),
            (None, Some(_)) => return Err(construction("height is given without width")),
        }

        let Some(end) = end else {
            return Err(construction(
                "end is not specified, use (start, end), (start, size), (start, width, height), \
                 (x, y, size), (x, y, width, height) or (min_x, min_y, max_x, max_y)",
            ));
        };

        log::trace!("Resolved rectangle arguments into start {start} and end {end}");

        Ok(Rect2::from_endpoints(start, end))
    }
}

fn construction(message: impl Into<String>) -> GeometryError {
    GeometryError::Construction(message.into())
}

fn number(arg: &Arg) -> Result<f64, GeometryError> {
    arg.as_number()
        .ok_or_else(|| GeometryError::type_mismatch("number", arg.kind()))
}
