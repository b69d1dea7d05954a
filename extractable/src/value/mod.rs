//! The dynamic value tree.
//!
//! This module provides the input (and output) domain of extraction:
//!
//! - **[`Value`]**: polymorphic node — scalars, containers, file leaves
//! - **[`List`] / [`Map`]**: shared containers; clones alias their allocation
//! - **[`FileList`]**: flat sequence holding only file leaves
//! - **[`Opaque`]**: pass-through handle for foreign instances
//!
//! Containers are handles over shared, interiorly mutable storage so a value
//! tree can express aliasing (the same container under several paths) and
//! true cycles. Extraction only ever reads a tree; the handles exist so that
//! callers can build those shapes in the first place.

mod debug;
mod file_list;
mod list;
mod map;
mod opaque;

pub use file_list::FileList;
pub use list::List;
pub use map::Map;
pub use opaque::Opaque;

use crate::file::{File, FileSubstitute};

// =============================================================================
// Value - The polymorphic tree node
// =============================================================================

/// A node in a dynamic value tree.
///
/// Scalar variants hold their data inline; `List`, `Map`, `FileList`,
/// `File`, and `Opaque` hold shared handles, so cloning a `Value` aliases
/// the underlying allocation rather than copying it.
#[derive(Clone, Default)]
pub enum Value {
    /// Absent / null.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar.
    String(String),
    /// Shared ordered sequence.
    List(List),
    /// Shared keyed mapping, insertion-ordered.
    Map(Map),
    /// Flat sequence of file leaves.
    FileList(FileList),
    /// Extractable file leaf.
    File(File),
    /// Foreign instance, passed through untouched.
    Opaque(Opaque),
}

impl Value {
    /// Builds a [`Value::List`] from anything convertible to values.
    #[must_use]
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::List(items.into_iter().collect())
    }

    /// Builds a [`Value::Map`] from key/value pairs, preserving their order.
    #[must_use]
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(entries.into_iter().collect())
    }

    /// Wraps a foreign instance as a [`Value::Opaque`].
    #[must_use]
    pub fn opaque<T: std::any::Any>(value: T) -> Self {
        Value::Opaque(Opaque::new(value))
    }

    /// Whether this is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean scalar, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// The integer scalar, if this is one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// The floating-point scalar, if this is one.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// The text scalar, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// The list handle, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// The map handle, if this is a map.
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The file-list handle, if this is a file list.
    #[must_use]
    pub fn as_file_list(&self) -> Option<&FileList> {
        match self {
            Value::FileList(files) => Some(files),
            _ => None,
        }
    }

    /// The file handle, if this is a file leaf.
    #[must_use]
    pub fn as_file(&self) -> Option<&File> {
        match self {
            Value::File(file) => Some(file),
            _ => None,
        }
    }

    /// The opaque handle, if this is a foreign instance.
    #[must_use]
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Opaque(opaque) => Some(opaque),
            _ => None,
        }
    }

    /// A short label for the node kind, used in messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::FileList(_) => "file list",
            Value::File(_) => "file",
            Value::Opaque(_) => "opaque value",
        }
    }

    /// Resolves a dot-separated path against this value.
    ///
    /// Each segment is a map key or a decimal index into a list or file
    /// list. The empty path resolves to the value itself. Returns `None` as
    /// soon as a segment fails to resolve. Resolution consumes one segment
    /// per step, so it terminates even on cyclic values.
    ///
    /// ```rust
    /// use extractable::Value;
    ///
    /// let value = Value::map([("a", Value::list([1i64, 2]))]);
    /// assert_eq!(value.at_path("a.1"), Some(Value::Int(2)));
    /// assert_eq!(value.at_path("a.9"), None);
    /// ```
    #[must_use]
    pub fn at_path(&self, path: &str) -> Option<Value> {
        if path.is_empty() {
            return Some(self.clone());
        }
        let mut current = self.clone();
        for segment in path.split('.') {
            current = match &current {
                Value::Map(map) => map.get(segment)?,
                Value::List(list) => list.get(segment.parse().ok()?)?,
                Value::FileList(files) => Value::File(files.get(segment.parse().ok()?)?),
                _ => return None,
            };
        }
        Some(current)
    }
}

// =============================================================================
// Equality
// =============================================================================

/// Structural equality with identity short-circuits.
///
/// Shared handles compare equal when they alias the same allocation; lists
/// and maps otherwise compare their contents pairwise in order. `File` and
/// `Opaque` compare by identity only — two distinct file instances with
/// equal contents are *not* equal. Comparing two structurally equal but
/// distinct cyclic values does not terminate; comparisons through the same
/// handle short-circuit and are always safe.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::File(a), Value::File(b)) => a.ptr_eq(b),
            (Value::Opaque(a), Value::Opaque(b)) => a.ptr_eq(b),
            (Value::List(a), Value::List(b)) => a.ptr_eq(b) || a.to_vec() == b.to_vec(),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b) || a.entries() == b.entries(),
            (Value::FileList(a), Value::FileList(b)) => {
                a.ptr_eq(b) || {
                    let (a, b) = (a.to_vec(), b.to_vec());
                    a.len() == b.len()
                        && a.iter().zip(b.iter()).all(|(left, right)| left.ptr_eq(right))
                }
            }
            _ => false,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::List(list)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<FileList> for Value {
    fn from(files: FileList) -> Self {
        Value::FileList(files)
    }
}

impl From<File> for Value {
    fn from(file: File) -> Self {
        Value::File(file)
    }
}

impl From<FileSubstitute> for Value {
    fn from(substitute: FileSubstitute) -> Self {
        Value::File(File::from(substitute))
    }
}

impl From<Opaque> for Value {
    fn from(opaque: Opaque) -> Self {
        Value::Opaque(opaque)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::{Map, Value};
    use crate::file::{Blob, File};

    #[test]
    fn builders_preserve_shape() {
        let value = Value::map([("a", Value::list([1i64, 2])), ("b", Value::from("text"))]);
        let map = value.as_map().unwrap();
        assert_eq!(map.keys(), ["a", "b"]);
        assert_eq!(map.get("a").unwrap().as_list().unwrap().len(), 2);
    }

    #[test]
    fn files_compare_by_identity() {
        let a = File::from(Blob::new(b"same".to_vec()));
        let b = File::from(Blob::new(b"same".to_vec()));
        assert_eq!(Value::File(a.clone()), Value::File(a.clone()));
        assert_ne!(Value::File(a), Value::File(b));
    }

    #[test]
    fn containers_compare_structurally() {
        let a = Value::list([1i64, 2]);
        let b = Value::list([1i64, 2]);
        assert_eq!(a, b);
        assert_ne!(a, Value::list([2i64, 1]));
    }

    #[test]
    fn at_path_walks_maps_and_lists() {
        let inner = Map::new();
        inner.insert("leaf", 42i64);
        let value = Value::map([("outer", Value::list([Value::Map(inner)]))]);
        assert_eq!(value.at_path("outer.0.leaf"), Some(Value::Int(42)));
        assert_eq!(value.at_path(""), Some(value.clone()));
        assert_eq!(value.at_path("outer.x"), None);
        assert_eq!(value.at_path("missing"), None);
    }

    #[test]
    fn at_path_terminates_on_cycles() {
        let map = Map::new();
        map.insert("next", Value::Map(map.clone()));
        let value = Value::Map(map.clone());
        let resolved = value.at_path("next.next.next").unwrap();
        assert!(resolved.as_map().unwrap().ptr_eq(&map));
    }

    #[test]
    fn option_conversion_maps_none_to_null() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    }
}
