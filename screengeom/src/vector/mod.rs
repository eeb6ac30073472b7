//! Vector types: arbitrary-length [`VecN`] and fixed-arity [`Vec2`], [`Vec3`].
//!
//! All of them share the algebra of the [`Vector`] trait and compare with a floating point
//! tolerance (see [`EPSILON`] and [`MAX_RELATIVE`]), as components are always stored as `f64`
//! even when constructed from integer-looking values.

mod traits;
mod vec2;
mod vec3;
mod vec_n;

pub(crate) use traits::clamp_range;
pub use traits::{Axis, Vector};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec_n::VecN;

/// Absolute tolerance used by `==` on float geometry.
pub const EPSILON: f64 = 1e-8;

/// Relative tolerance used by `==` on float geometry.
pub const MAX_RELATIVE: f64 = 1e-5;

/// Implements `PartialEq` with the crate tolerances and the `approx` comparison traits for a
/// [`Vector`] type.
macro_rules! impl_tolerant_eq {
    ($t:ty) => {
        impl approx::AbsDiffEq for $t {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                $crate::vector::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                use $crate::vector::Vector;
                self.len() == other.len()
                    && self
                        .values()
                        .iter()
                        .zip(other.values())
                        .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl approx::RelativeEq for $t {
            fn default_max_relative() -> f64 {
                $crate::vector::MAX_RELATIVE
            }

            fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
                use $crate::vector::Vector;
                self.len() == other.len()
                    && self.values().iter().zip(other.values()).all(|(a, b)| {
                        approx::RelativeEq::relative_eq(a, b, epsilon, max_relative)
                    })
            }
        }

        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                approx::RelativeEq::relative_eq(
                    self,
                    other,
                    $crate::vector::EPSILON,
                    $crate::vector::MAX_RELATIVE,
                )
            }
        }
    };
}

pub(crate) use impl_tolerant_eq;

fn fmt_components(f: &mut std::fmt::Formatter<'_>, values: &[f64]) -> std::fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{v:?}")?;
    }
    Ok(())
}
