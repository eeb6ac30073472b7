//! Geometric primitives for screen automation: vectors, float and integer rectangles, and a
//! structural snapshot format to persist them.
//!
//! * [`VecN`], [`Vec2`] and [`Vec3`] share the elementwise algebra of the [`Vector`] trait.
//! * [`Rect2`] is a canonical closed rectangle with float coordinates, built either with typed
//!   factories or from loosely typed arguments with [`Rect2Builder`].
//! * [`Rect`] and [`GRect`] are integer rectangles in screen coordinates used for cropping
//!   screenshots and drawing highlights.
//! * [`Serializable`] converts values into [`Snapshot`]s and binary blobs.
//!
//! ```
//! use screengeom::{Rect2, Vec2};
//!
//! let button = Rect2::from_xywh(10.0, 10.0, 80.0, 20.0);
//! let click = button.center() + Vec2::new(0.0, 2.0);
//! assert!(button.contains(click));
//! ```

mod arg;
pub mod error;
pub mod legacy;
mod rect2;
pub mod serialization;
pub mod vector;

pub use arg::Arg;
pub use error::GeometryError;
pub use legacy::{Color, GRect, Rect};
pub use rect2::{Rect2, Rect2Builder};
pub use serialization::{
    load_from_file, load_into, restore_nested, save_to_file, FieldValue, Serializable, Snapshot,
};
pub use vector::{Axis, Vec2, Vec3, VecN, Vector, EPSILON, MAX_RELATIVE};
