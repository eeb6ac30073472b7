//! Structural snapshots of geometry values and their binary encoding.
//!
//! A type opts in by implementing [`Serializable`]: it lists its fields in
//! [`snapshot`](Serializable::snapshot) and assigns them back in
//! [`restore_field`](Serializable::restore_field). Snapshots are encoded with `bincode`.
//!
//! ```
//! use screengeom::{Rect2, Serializable};
//!
//! let rect = Rect2::new(0.0, 0.0, 10.0, 20.0);
//! let blob = Serializable::serialize(&rect)?;
//!
//! let mut restored = Rect2::default();
//! restored.deserialize(&blob)?;
//! assert_eq!(restored, rect);
//! # Ok::<(), screengeom::GeometryError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::vector::{Vec2, Vector};

/// Value of a single snapshot field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Float scalar.
    Number(f64),
    /// Integer scalar.
    Integer(i64),
    /// Flag.
    Bool(bool),
    /// Vector-like value.
    Values(Vec<f64>),
    /// Snapshot of a nested [`Serializable`] value.
    Nested(Snapshot),
}

impl FieldValue {
    /// Name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Number(_) => "number",
            FieldValue::Integer(_) => "integer",
            FieldValue::Bool(_) => "bool",
            FieldValue::Values(_) => "values",
            FieldValue::Nested(_) => "nested",
        }
    }

    /// Float value. Integers are converted.
    pub fn as_f64(&self) -> Result<f64, GeometryError> {
        match self {
            FieldValue::Number(v) => Ok(*v),
            FieldValue::Integer(v) => Ok(*v as f64),
            other => Err(GeometryError::type_mismatch("number", other.kind())),
        }
    }

    /// Integer value.
    pub fn as_i64(&self) -> Result<i64, GeometryError> {
        match self {
            FieldValue::Integer(v) => Ok(*v),
            other => Err(GeometryError::type_mismatch("integer", other.kind())),
        }
    }

    /// Flag value.
    pub fn as_bool(&self) -> Result<bool, GeometryError> {
        match self {
            FieldValue::Bool(v) => Ok(*v),
            other => Err(GeometryError::type_mismatch("bool", other.kind())),
        }
    }

    /// Vector-like value.
    pub fn as_values(&self) -> Result<&[f64], GeometryError> {
        match self {
            FieldValue::Values(v) => Ok(v),
            other => Err(GeometryError::type_mismatch("values", other.kind())),
        }
    }

    /// Consumes the value returning the nested snapshot.
    pub fn into_snapshot(self) -> Result<Snapshot, GeometryError> {
        match self {
            FieldValue::Nested(snapshot) => Ok(snapshot),
            other => Err(GeometryError::type_mismatch("nested", other.kind())),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<f64>> for FieldValue {
    fn from(value: Vec<f64>) -> Self {
        FieldValue::Values(value)
    }
}

impl From<Vec2> for FieldValue {
    fn from(value: Vec2) -> Self {
        FieldValue::Values(value.values().to_vec())
    }
}

impl From<Snapshot> for FieldValue {
    fn from(value: Snapshot) -> Self {
        FieldValue::Nested(value)
    }
}

/// Ordered list of named field values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    fields: Vec<(String, FieldValue)>,
}

impl Snapshot {
    /// Empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. A field with the same name is replaced.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Appends the snapshot of a nested value.
    pub fn with_nested(self, name: impl Into<String>, value: &impl Serializable) -> Self {
        self.with_field(name, value.snapshot())
    }

    /// Sets a field. A field with the same name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Value of the field with the given name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> + '_ {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl IntoIterator for Snapshot {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Value that can be converted into a [`Snapshot`] and restored from it.
///
/// Restoring assigns fields into an existing receiver, so a type is restored by first creating a
/// placeholder (usually `Default`) and then calling [`restore`](Self::restore) or
/// [`deserialize`](Self::deserialize) on it. Fields the receiver does not know are skipped.
///
/// Fields are assigned to a copy of the receiver, which replaces it only after
/// [`finish_restore`](Self::finish_restore) succeeds. A failed restore leaves the receiver as it
/// was.
pub trait Serializable: Clone {
    /// Lists the fields of the value.
    fn snapshot(&self) -> Snapshot;

    /// Assigns a single field. Returns `false` if the field name is unknown.
    fn restore_field(&mut self, name: &str, value: FieldValue) -> Result<bool, GeometryError>;

    /// Called after all fields are assigned. Types with invariants re-establish or validate
    /// them here.
    fn finish_restore(&mut self) -> Result<(), GeometryError> {
        Ok(())
    }

    /// Assigns all fields of the snapshot.
    fn restore(&mut self, snapshot: Snapshot) -> Result<(), GeometryError> {
        let mut restored = self.clone();
        for (name, value) in snapshot {
            if !restored.restore_field(&name, value)? {
                log::warn!("Skipping unknown snapshot field '{name}'");
            }
        }

        restored.finish_restore()?;
        *self = restored;

        Ok(())
    }

    /// Encodes the snapshot of the value.
    fn serialize(&self) -> Result<Vec<u8>, GeometryError> {
        Ok(bincode::serde::encode_to_vec(
            self.snapshot(),
            bincode_config(),
        )?)
    }

    /// Restores the value from a blob produced by [`serialize`](Self::serialize).
    fn deserialize(&mut self, blob: &[u8]) -> Result<(), GeometryError> {
        let (snapshot, _): (Snapshot, usize) =
            bincode::serde::decode_from_slice(blob, bincode_config())?;
        self.restore(snapshot)
    }
}

/// Restores `target` in place from a [`FieldValue::Nested`] value.
pub fn restore_nested(
    target: &mut impl Serializable,
    value: FieldValue,
) -> Result<(), GeometryError> {
    target.restore(value.into_snapshot()?)
}

/// Writes the serialized value to the file, replacing its contents.
pub fn save_to_file(
    path: impl AsRef<Path>,
    value: &impl Serializable,
) -> Result<(), GeometryError> {
    let path = path.as_ref();
    let blob = value.serialize()?;
    std::fs::write(path, &blob)?;
    log::debug!("Saved {} bytes to {}", blob.len(), path.display());

    Ok(())
}

/// Restores `receiver` from the file and returns it.
pub fn load_into<T: Serializable>(
    path: impl AsRef<Path>,
    mut receiver: T,
) -> Result<T, GeometryError> {
    let path = path.as_ref();
    let blob = std::fs::read(path)?;
    log::debug!("Loaded {} bytes from {}", blob.len(), path.display());

    receiver.deserialize(&blob)?;
    Ok(receiver)
}

/// Loads a value from the file using `T::default()` as the receiver.
pub fn load_from_file<T: Serializable + Default>(
    path: impl AsRef<Path>,
) -> Result<T, GeometryError> {
    load_into(path, T::default())
}

fn bincode_config() -> impl bincode::config::Config {
    bincode::config::standard()
}
