//! The recursive extraction walk.

use std::collections::HashSet;

use super::{index::FileIndex, path, predicate::is_extractable_file};
use crate::value::{List, Map, Value};

// =============================================================================
// Entrypoints
// =============================================================================

/// Result of an extraction: the nulled clone and the path index.
#[derive(Debug)]
pub struct Extraction {
    /// Deep clone of the input with every extracted leaf replaced by
    /// [`Value::Null`]. Non-leaf structure is mirrored exactly: same lengths,
    /// same keys in the same enumeration order.
    pub clone: Value,
    /// Paths at which each extracted leaf occurred in the input, keyed by
    /// leaf identity in first-seen order.
    pub files: FileIndex,
}

/// Extracts file leaves from `value` using the default predicate and an
/// empty path prefix.
///
/// ```rust
/// use extractable::{Blob, File, Value, extract};
///
/// let file = File::from(Blob::new(b"payload".to_vec()));
/// let value = Value::map([("avatar", file.clone())]);
///
/// let extraction = extract(&value);
/// assert!(extraction.clone.at_path("avatar").unwrap().is_null());
/// assert_eq!(
///     extraction.files.paths(&Value::File(file)).unwrap(),
///     ["avatar"]
/// );
/// ```
#[must_use]
pub fn extract(value: &Value) -> Extraction {
    extract_with(value, "", is_extractable_file)
}

/// Extracts leaves from `value`, prefixing every recorded path with
/// `path_prefix` and classifying leaves with `is_extractable`.
///
/// The walk is depth-first and pre-order, defined over every input and
/// never fails:
///
/// 1. A value the predicate classifies becomes `Null` in the clone and is
///    recorded at its current path — classified values are leaves even when
///    they are containers.
/// 2. A file list clones to a plain list, each entry running through the
///    same classification at `prefix.index`.
/// 3. Lists and maps clone structurally, recursing per item / per key.
/// 4. Everything else — scalars, opaque instances, and containers already
///    on the current recursion path — passes through as-is; for
///    handle-backed values the clone aliases the input's allocation.
///
/// The set of containers on the current path is copied per branch: a
/// container shared by sibling branches is cloned under each of them, and
/// only a true back-reference to a container still being walked passes
/// through un-recursed, which keeps cyclic inputs from recursing forever
/// while leaving the cycle intact (aliased) in the clone.
///
/// The input is only read; no node of it is mutated or moved.
#[must_use]
pub fn extract_with<F>(value: &Value, path_prefix: &str, is_extractable: F) -> Extraction
where
    F: Fn(&Value) -> bool,
{
    let mut files = FileIndex::new();
    let clone = walk(
        value,
        path_prefix.to_owned(),
        &is_extractable,
        &HashSet::new(),
        &mut files,
    );
    Extraction { clone, files }
}

// =============================================================================
// The walk
// =============================================================================

fn walk<F>(
    value: &Value,
    current_path: String,
    is_extractable: &F,
    active: &HashSet<usize>,
    files: &mut FileIndex,
) -> Value
where
    F: Fn(&Value) -> bool,
{
    if is_extractable(value) {
        #[cfg(feature = "tracing")]
        tracing::trace!(path = %current_path, kind = value.kind_name(), "extracted leaf");
        files.record(value, current_path);
        return Value::Null;
    }
    match value {
        // Entries are flat file leaves by construction; no tracking on this
        // branch.
        Value::FileList(list) => {
            let clone: List = list
                .to_vec()
                .iter()
                .enumerate()
                .map(|(index, file)| {
                    walk(
                        &Value::File(file.clone()),
                        path::child(&current_path, index),
                        is_extractable,
                        active,
                        files,
                    )
                })
                .collect();
            Value::List(clone)
        }
        Value::List(list) if !active.contains(&list.address()) => {
            let mut active = active.clone();
            active.insert(list.address());
            let clone: List = list
                .to_vec()
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    walk(
                        item,
                        path::child(&current_path, index),
                        is_extractable,
                        &active,
                        files,
                    )
                })
                .collect();
            Value::List(clone)
        }
        Value::Map(map) if !active.contains(&map.address()) => {
            let mut active = active.clone();
            active.insert(map.address());
            let clone: Map = map
                .entries()
                .iter()
                .map(|(key, item)| {
                    let cloned = walk(
                        item,
                        path::child(&current_path, key),
                        is_extractable,
                        &active,
                        files,
                    );
                    (key.clone(), cloned)
                })
                .collect();
            Value::Map(clone)
        }
        // Scalars, opaque instances, and containers already on the current
        // path: pass through, aliased.
        _ => {
            #[cfg(feature = "tracing")]
            {
                if matches!(value, Value::List(_) | Value::Map(_)) {
                    tracing::trace!(path = %current_path, "reference cycle broken");
                }
            }
            value.clone()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
