//! Default extractability classification.

use crate::{
    file::FileKind,
    value::Value,
};

/// A single file-kind check.
type KindCheck = fn(&Value) -> bool;

/// Ordered catalog of built-in file-like checks.
///
/// One check per kind the host environment may provide. Platforms with a
/// different catalog (or custom leaf types carried as `Value::Opaque`) pass
/// their own predicate to [`crate::extract_with`] instead of extending this
/// table.
const FILE_KIND_CHECKS: &[KindCheck] = &[is_blob_file, is_file_substitute];

fn is_blob_file(value: &Value) -> bool {
    matches!(value, Value::File(file) if matches!(file.kind(), FileKind::Blob(_)))
}

fn is_file_substitute(value: &Value) -> bool {
    matches!(value, Value::File(file) if matches!(file.kind(), FileKind::Substitute(_)))
}

/// The default extractability predicate.
///
/// Classifies blob-backed files and file substitutes as extractable;
/// everything else — scalars, containers, opaque instances — is not.
/// [`crate::extract`] uses this predicate; [`crate::extract_with`] accepts
/// any replacement.
#[must_use]
pub fn is_extractable_file(value: &Value) -> bool {
    FILE_KIND_CHECKS.iter().any(|check| check(value))
}
