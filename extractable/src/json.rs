//! `serde_json::Value` interop.
//!
//! Ingestion is total: every JSON document converts into a [`Value`]
//! (`From<serde_json::Value>`), with objects keeping their key order.
//! Lowering is fallible: a [`Value`] converts back to JSON
//! (`TryFrom<&Value>`) only when it holds nothing JSON cannot represent —
//! no file leaves, no opaque instances, no non-finite numbers, no reference
//! cycles. The usual pipeline extracts first and lowers the nulled clone:
//!
//! ```rust
//! use extractable::{Blob, File, Value, extract};
//! use serde_json::json;
//!
//! let operations = Value::from(json!({
//!     "query": "mutation ($file: Upload!) { upload(file: $file) }",
//!     "variables": { "file": null },
//! }));
//! operations
//!     .at_path("variables")
//!     .unwrap()
//!     .as_map()
//!     .unwrap()
//!     .insert("file", File::from(Blob::new(b"payload".to_vec())));
//!
//! let extraction = extract(&operations);
//! let body = serde_json::Value::try_from(&extraction.clone).unwrap();
//! assert!(body["variables"]["file"].is_null());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::value::Value;

/// Failure lowering a [`Value`] to JSON.
#[derive(Debug, Error, PartialEq)]
pub enum JsonError {
    /// The value holds a leaf JSON has no representation for — a file, a
    /// file list, or an opaque instance. Extract files before lowering.
    #[error("cannot represent {kind} in JSON")]
    Unrepresentable {
        /// Kind label of the offending node.
        kind: &'static str,
    },
    /// A non-finite float has no JSON number form.
    #[error("number {0} has no JSON representation")]
    NonFiniteNumber(f64),
    /// The value references one of its own ancestors.
    #[error("value contains a reference cycle")]
    Cycle,
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            // u64 magnitudes beyond i64 degrade through f64.
            serde_json::Value::Number(number) => number.as_i64().map_or_else(
                || number.as_f64().map_or(Value::Null, Value::Float),
                Value::Int,
            ),
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self, JsonError> {
        lower(value, &HashSet::new())
    }
}

impl TryFrom<Value> for serde_json::Value {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self, JsonError> {
        Self::try_from(&value)
    }
}

// Same per-branch tracking as the extraction walk: shared acyclic sub-trees
// lower under every branch, only true back-references error.
fn lower(value: &Value, active: &HashSet<usize>) -> Result<serde_json::Value, JsonError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(value) => Ok(serde_json::Value::Bool(*value)),
        Value::Int(value) => Ok(serde_json::Value::from(*value)),
        Value::Float(value) => serde_json::Number::from_f64(*value)
            .map(serde_json::Value::Number)
            .ok_or(JsonError::NonFiniteNumber(*value)),
        Value::String(value) => Ok(serde_json::Value::String(value.clone())),
        Value::List(list) => {
            if active.contains(&list.address()) {
                return Err(JsonError::Cycle);
            }
            let mut active = active.clone();
            active.insert(list.address());
            let items = list
                .to_vec()
                .iter()
                .map(|item| lower(item, &active))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(serde_json::Value::Array(items))
        }
        Value::Map(map) => {
            if active.contains(&map.address()) {
                return Err(JsonError::Cycle);
            }
            let mut active = active.clone();
            active.insert(map.address());
            let mut fields = serde_json::Map::with_capacity(map.len());
            for (key, item) in map.entries() {
                fields.insert(key, lower(&item, &active)?);
            }
            Ok(serde_json::Value::Object(fields))
        }
        Value::FileList(_) | Value::File(_) | Value::Opaque(_) => Err(JsonError::Unrepresentable {
            kind: value.kind_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::JsonError;
    use crate::{
        file::{Blob, File},
        value::{Map, Value},
    };

    #[test]
    fn ingestion_preserves_shape_and_key_order() {
        let value = Value::from(json!({"z": [1, 2.5], "a": {"inner": "text"}}));
        let map = value.as_map().unwrap();
        assert_eq!(map.keys(), ["z", "a"]);
        assert_eq!(value.at_path("z.0"), Some(Value::Int(1)));
        assert_eq!(value.at_path("z.1"), Some(Value::Float(2.5)));
        assert_eq!(value.at_path("a.inner"), Some(Value::from("text")));
    }

    #[test]
    fn lowering_round_trips_file_free_values() {
        let document = json!({"b": [true, null, 3], "a": "text"});
        let value = Value::from(document.clone());
        assert_eq!(serde_json::Value::try_from(&value), Ok(document));
    }

    #[test]
    fn shared_sub_trees_lower_under_every_branch() {
        let shared = Value::list([1i64]);
        let value = Value::map([("a", shared.clone()), ("b", shared)]);
        assert_eq!(
            serde_json::Value::try_from(&value),
            Ok(json!({"a": [1], "b": [1]}))
        );
    }

    #[test]
    fn files_do_not_lower() {
        let value = Value::map([("file", File::from(Blob::new(b"x".to_vec())))]);
        assert_eq!(
            serde_json::Value::try_from(&value),
            Err(JsonError::Unrepresentable { kind: "file" })
        );
    }

    #[test]
    fn cycles_do_not_lower() {
        let map = Map::new();
        map.insert("own", Value::Map(map.clone()));
        assert_eq!(
            serde_json::Value::try_from(&Value::Map(map)),
            Err(JsonError::Cycle)
        );
    }

    #[test]
    fn non_finite_floats_do_not_lower() {
        let value = Value::list([f64::NAN]);
        assert!(matches!(
            serde_json::Value::try_from(&value),
            Err(JsonError::NonFiniteNumber(_))
        ));
    }
}
